use csv::StringRecord;

use crate::errors::{CategorizeError, CategorizeResult};
use crate::types::Transaction;

/// Número mínimo de colunas para uma linha ser considerada bem formada
pub const LEDGER_FIELD_COUNT: usize = 6;

/// Uma linha crua do extrato, ainda sem interpretação dos campos.
///
/// Ordem das colunas: timestamp, description, income, outcome, balance,
/// location. Os campos chegam sem trim; a conversão para [`Transaction`]
/// faz o trim e o parse numérico.
#[derive(Debug, Clone)]
pub struct LedgerRowRaw {
    pub timestamp: String,
    pub description: String,
    pub income: String,
    pub outcome: String,
    pub balance: String,
    pub location: String,
}

impl LedgerRowRaw {
    /// Caller guarantees the record has at least [`LEDGER_FIELD_COUNT`]
    /// fields; extra trailing fields are ignored.
    pub fn from_record(record: &StringRecord) -> Self {
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();
        LedgerRowRaw {
            timestamp: field(0),
            description: field(1),
            income: field(2),
            outcome: field(3),
            balance: field(4),
            location: field(5),
        }
    }
}

fn parse_amount(column: &'static str, value: &str) -> CategorizeResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| CategorizeError::LedgerNumberInvalid {
            column,
            value: value.to_string(),
        })
}

impl TryFrom<LedgerRowRaw> for Transaction {
    type Error = CategorizeError;

    fn try_from(raw: LedgerRowRaw) -> CategorizeResult<Self> {
        Ok(Transaction {
            timestamp: raw.timestamp.trim().to_string(),
            description: raw.description.trim().to_string(),
            income: parse_amount("income", raw.income.trim())?,
            outcome: parse_amount("outcome", raw.outcome.trim())?,
            balance: parse_amount("balance", raw.balance.trim())?,
            location: raw.location.trim().to_string(),
        })
    }
}
