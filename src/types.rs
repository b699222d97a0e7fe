use serde::{Deserialize, Serialize};

/// Sentinel written into `category_id` and `category_name` when no rule
/// keyword is contained in the transaction description.
pub const UNCLASSIFIED: &str = "unclassified";

/// A single raw ledger row. Immutable once parsed; amounts are whole units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub timestamp: String,
    pub description: String,
    pub income: i64,
    pub outcome: i64,
    pub balance: i64,
    pub location: String,
}

/// Outcome of running a transaction against a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Matched {
        company_id: String,
        category_id: String,
        category_name: String,
    },
    Unmatched,
}

impl Classification {
    pub fn is_matched(&self) -> bool {
        matches!(self, Classification::Matched { .. })
    }
}

/// Persisted/returned record shape: one per input transaction.
///
/// `id` is assigned by the record store, never by the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedTransaction {
    pub id: Option<i64>,
    pub company_id: Option<String>,
    pub transaction_date: String,
    pub transaction_description: String,
    pub deposit_amount: i64,
    pub withdraw_amount: i64,
    pub balance_amount: i64,
    pub transaction_place: String,
    pub category_id: String,
    pub category_name: String,
    pub classified: bool,
}

impl CategorizedTransaction {
    /// Builds the output record for one transaction, applying the field
    /// renames (income→deposit, outcome→withdraw, balance→balance amount,
    /// location→place) and the unclassified sentinel when nothing matched.
    pub fn build(transaction: &Transaction, outcome: Classification) -> Self {
        let (company_id, category_id, category_name, classified) = match outcome {
            Classification::Matched {
                company_id,
                category_id,
                category_name,
            } => (Some(company_id), category_id, category_name, true),
            Classification::Unmatched => {
                (None, UNCLASSIFIED.to_string(), UNCLASSIFIED.to_string(), false)
            }
        };

        CategorizedTransaction {
            id: None,
            company_id,
            transaction_date: transaction.timestamp.clone(),
            transaction_description: transaction.description.clone(),
            deposit_amount: transaction.income,
            withdraw_amount: transaction.outcome,
            balance_amount: transaction.balance,
            transaction_place: transaction.location.clone(),
            category_id,
            category_name,
            classified,
        }
    }
}
