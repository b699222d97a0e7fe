//! Rule-based categorization of bank transaction ledgers.
//!
//! Feed a comma-delimited ledger and a hierarchical keyword rule set
//! (companies → categories → keywords); every transaction comes back tagged
//! with the first matching (company, category) pair, or marked unclassified.
//!
//! ```rust,ignore
//! use ledger_rules_rs::CategorizerBuilder;
//!
//! let records = CategorizerBuilder::new()
//!     .transactions(&ledger_content)
//!     .rules(&rules_content)
//!     .categorize()?;
//! ```

mod builder;
mod types;

pub mod classifier;
pub mod errors;
pub mod parsers;
pub mod service;
pub mod store;

pub use builder::CategorizerBuilder;
pub use classifier::{classify, classify_batch};
pub use errors::{CategorizeError, CategorizeResult};
pub use parsers::prelude::*;
pub use service::CategorizerService;
pub use store::{RecordStore, SqliteStore};
pub use types::{CategorizedTransaction, Classification, Transaction, UNCLASSIFIED};
