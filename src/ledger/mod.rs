use std::str::FromStr;

use chrono::{DateTime, Duration, Local};
use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::{CategoryRegistry, Transaction};

#[cfg(test)]
mod tests;

/// Append-only, insertion-ordered collection of transactions for one
/// session. The single source of truth: no entry is ever edited, removed,
/// or reordered, and nothing here is persisted.
#[derive(Debug)]
pub struct Ledger {
    registry: CategoryRegistry,
    entries: Vec<Transaction>,
}

impl Ledger {
    pub fn new(registry: CategoryRegistry) -> Self {
        Self {
            registry,
            entries: Vec::new(),
        }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Validate the input, construct a transaction with a fresh id, and
    /// push it. The ledger is unchanged after any `Err`.
    ///
    /// `amount` is the raw text the caller collected; it must parse to a
    /// non-negative decimal.
    pub fn append(
        &mut self,
        title: &str,
        amount: &str,
        category: &str,
        date: DateTime<Local>,
    ) -> Result<Transaction, LedgerError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(LedgerError::InvalidTitle);
        }
        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| LedgerError::InvalidAmount(amount.to_string()))?;
        if amount < Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }
        if !self.registry.contains(category) {
            return Err(LedgerError::InvalidCategory(category.to_string()));
        }

        let txn = Transaction::new(title.to_string(), amount, category.to_string(), date);
        self.entries.push(txn.clone());
        Ok(txn)
    }

    /// All transactions, insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.entries
    }

    /// Transactions dated strictly after `as_of - window_days`.
    pub fn recent_as_of(&self, window_days: i64, as_of: DateTime<Local>) -> Vec<Transaction> {
        let cutoff = as_of - Duration::days(window_days);
        self.entries
            .iter()
            .filter(|txn| txn.date > cutoff)
            .cloned()
            .collect()
    }

    /// `recent_as_of` anchored at the current time.
    pub fn recent(&self, window_days: i64) -> Vec<Transaction> {
        self.recent_as_of(window_days, Local::now())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
