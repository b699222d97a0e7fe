use csv::ReaderBuilder;
use tracing::warn;

use super::dto::{LEDGER_FIELD_COUNT, LedgerRowRaw};
use crate::errors::{CategorizeError, CategorizeResult};
use crate::parsers::traits::Parser;
use crate::types::Transaction;

/// Parser do extrato delimitado (UTF-8, header + linhas separadas por vírgula).
///
/// Política de leniência herdada do comportamento original: linhas com menos
/// de 6 colunas são descartadas em silêncio, mas um campo numérico inválido
/// em uma linha bem formada aborta o lote inteiro.
pub struct LedgerParser;

impl Parser for LedgerParser {
    type Output = Transaction;

    fn parse(content: &str) -> CategorizeResult<Vec<Self::Output>> {
        // flexible: linhas curtas não são erro de leitura; o filtro de
        // colunas abaixo decide o que descartar. quoting desligado: o split
        // é por vírgula pura e aspas são texto literal, nunca atravessam
        // o fim da linha.
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(content.as_bytes());

        let mut transactions = Vec::new();

        for result in reader.records() {
            let record = result.map_err(|e| CategorizeError::LedgerReadFailed(e.to_string()))?;

            if record.len() < LEDGER_FIELD_COUNT {
                warn!(
                    fields = record.len(),
                    line = record.position().map(|p| p.line()).unwrap_or_default(),
                    "dropping ledger row with too few columns"
                );
                continue;
            }

            let raw = LedgerRowRaw::from_record(&record);
            transactions.push(raw.try_into()?);
        }

        Ok(transactions)
    }
}
