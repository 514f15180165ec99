use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use uuid::Uuid;

/// One recorded expense event. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Unique within the ledger, generated at creation time.
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Local>,
}

impl Transaction {
    pub fn new(title: String, amount: Decimal, category: String, date: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            amount,
            category,
            date,
        }
    }
}
