use thiserror::Error;

/// Erros possíveis durante o parsing e a categorização do extrato
#[derive(Error, Debug)]
pub enum CategorizeError {
    /// Falha de leitura no stream delimitado (linha malformada no nível do CSV)
    #[error("Ledger read failed: {0}")]
    LedgerReadFailed(String),

    /// Campo numérico inválido em uma linha com contagem de colunas correta.
    /// Aborta o lote inteiro; nenhum resultado parcial é retornado.
    #[error("Invalid numeric field '{value}' in ledger column '{column}'")]
    LedgerNumberInvalid { column: &'static str, value: String },

    /// O documento de regras não pôde ser decodificado na forma esperada
    /// (campo obrigatório ausente, tipo errado)
    #[error("Rule set format error: {0}")]
    RuleSetFormat(#[from] serde_json::Error),

    /// Erro ao ler o conteúdo de um arquivo do disco
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// O builder foi chamado sem conteúdo nem caminho para o extrato
    #[error("Transactions content or filepath is required")]
    MissingTransactions,

    /// O builder foi chamado sem conteúdo nem caminho para as regras
    #[error("Rules content or filepath is required")]
    MissingRules,

    /// Falha no armazenamento dos registros categorizados
    #[error("Record store failed: {0}")]
    StoreFailed(#[from] rusqlite::Error),
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type CategorizeResult<T> = Result<T, CategorizeError>;
