pub mod dto;

pub mod prelude {
    pub use super::dto::{CategoryRule, CompanyRule, RuleSet};
}
