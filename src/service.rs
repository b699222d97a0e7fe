use tracing::debug;

use crate::builder::CategorizerBuilder;
use crate::errors::CategorizeResult;
use crate::store::RecordStore;
use crate::types::CategorizedTransaction;

/// Ties the classification pipeline to a record store: the two operations a
/// request surface would mount (classify-and-persist, query-by-company).
pub struct CategorizerService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> CategorizerService<S> {
    pub fn new(store: S) -> Self {
        CategorizerService { store }
    }

    /// Parses both inputs, classifies every row and persists the whole
    /// batch. Any parse or format error aborts before anything is stored.
    pub fn process(
        &mut self,
        transactions_content: &str,
        rules_content: &str,
    ) -> CategorizeResult<Vec<CategorizedTransaction>> {
        let records = CategorizerBuilder::new()
            .transactions(transactions_content)
            .rules(rules_content)
            .categorize()?;

        debug!(records = records.len(), "persisting categorized batch");
        self.store.save_all(records)
    }

    pub fn records_by_company(
        &self,
        company_id: &str,
    ) -> CategorizeResult<Vec<CategorizedTransaction>> {
        self.store.find_by_company_id(company_id)
    }
}
