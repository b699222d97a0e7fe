pub mod ledger;
pub mod rules;
pub mod traits;

pub mod prelude {
    pub use super::ledger::prelude::*;
    pub use super::rules::prelude::*;
    pub use super::traits::Parser;
}
