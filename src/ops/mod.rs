pub mod ledger;
pub mod search;
pub mod shared;

pub use ledger::TaskLedger;
pub use shared::SharedLedger;
