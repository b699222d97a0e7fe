use std::fs;

use crate::classifier::classify_batch;
use crate::errors::{CategorizeError, CategorizeResult};
use crate::parsers::prelude::*;
use crate::types::CategorizedTransaction;

/// Fluent entry point for the whole pipeline: load both inputs, parse them,
/// classify every row, return the ordered record sequence.
///
/// ```rust,ignore
/// use ledger_rules_rs::CategorizerBuilder;
///
/// let records = CategorizerBuilder::new()
///     .transactions(&ledger_content)
///     .rules_file("rules.json")
///     .categorize()?;
/// ```
#[derive(Default)]
pub struct CategorizerBuilder {
    transactions: Option<String>,
    transactions_path: Option<String>,
    rules: Option<String>,
    rules_path: Option<String>,
}

impl CategorizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(mut self, content: &str) -> Self {
        self.transactions = Some(content.to_string());
        self
    }

    pub fn transactions_file(mut self, path: &str) -> Self {
        self.transactions_path = Some(path.to_string());
        self
    }

    pub fn rules(mut self, content: &str) -> Self {
        self.rules = Some(content.to_string());
        self
    }

    pub fn rules_file(mut self, path: &str) -> Self {
        self.rules_path = Some(path.to_string());
        self
    }

    pub fn categorize(self) -> CategorizeResult<Vec<CategorizedTransaction>> {
        let rules_content = load(self.rules, self.rules_path, CategorizeError::MissingRules)?;
        let transactions_content = load(
            self.transactions,
            self.transactions_path,
            CategorizeError::MissingTransactions,
        )?;

        // Regras primeiro: um documento de regras inválido aborta a
        // requisição antes de qualquer parsing do extrato.
        let rule_set = RuleSet::from_json(&rules_content)?;
        let transactions = LedgerParser::parse(&transactions_content)?;

        Ok(classify_batch(&transactions, &rule_set))
    }
}

fn load(
    content: Option<String>,
    path: Option<String>,
    missing: CategorizeError,
) -> CategorizeResult<String> {
    content.map(Ok).unwrap_or_else(|| {
        path.ok_or(missing)
            .and_then(|p| fs::read_to_string(p).map_err(Into::into))
    })
}
