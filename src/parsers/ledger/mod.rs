pub mod dto;
pub mod parser;

pub mod prelude {
    pub use super::dto::{LEDGER_FIELD_COUNT, LedgerRowRaw};
    pub use super::parser::LedgerParser;
}
