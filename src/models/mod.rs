mod budget;
mod category;
mod transaction;

pub use budget::BudgetTable;
pub use category::CategoryRegistry;
pub use transaction::Transaction;
