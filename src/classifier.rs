use tracing::debug;

use crate::parsers::rules::dto::RuleSet;
use crate::types::{CategorizedTransaction, Classification, Transaction};

/// Assigns a transaction to at most one (company, category) pair.
///
/// Greedy first-match: companies are walked in declared order, then each
/// company's categories, then each category's keywords. The first keyword
/// contained in the description wins and traversal stops. Containment is
/// case-sensitive, exactly as the keywords were written in the rule set.
///
/// Pure function of its two inputs; it cannot fail.
pub fn classify(transaction: &Transaction, rule_set: &RuleSet) -> Classification {
    for company in &rule_set.companies {
        for category in &company.categories {
            for keyword in &category.keywords {
                if transaction.description.contains(keyword.as_str()) {
                    return Classification::Matched {
                        company_id: company.company_id.clone(),
                        category_id: category.category_id.clone(),
                        category_name: category.category_name.clone(),
                    };
                }
            }
        }
    }
    Classification::Unmatched
}

/// Classifies a whole batch, building one output record per transaction.
///
/// Output index i corresponds to input index i; the buffer is pre-sized so
/// a parallel map could later fill it by position without reordering.
pub fn classify_batch(
    transactions: &[Transaction],
    rule_set: &RuleSet,
) -> Vec<CategorizedTransaction> {
    let mut records = Vec::with_capacity(transactions.len());

    for transaction in transactions {
        let outcome = classify(transaction, rule_set);
        records.push(CategorizedTransaction::build(transaction, outcome));
    }

    let matched = records.iter().filter(|r| r.classified).count();
    debug!(
        total = records.len(),
        matched,
        unmatched = records.len() - matched,
        "classified transaction batch"
    );

    records
}
