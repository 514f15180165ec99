//! Pure aggregation over ledger snapshots. Nothing here caches or mutates:
//! every call recomputes from the transactions it is handed, so a result
//! can never diverge from the ledger state it was derived from.

use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::{BudgetTable, CategoryRegistry, Transaction};


/// One row of the budget comparison, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    pub category: String,
    pub spent: Decimal,
    pub ceiling: Option<Decimal>,
    /// `Some(spent - ceiling)` only when strictly over the ceiling.
    pub overspent: Option<Decimal>,
}

/// Sum of all amounts. Empty slice sums to zero.
pub fn total_spent(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(|txn| txn.amount).sum()
}

/// Spend per registry category, in registry order. Categories with no
/// transactions get an explicit zero entry rather than being omitted.
pub fn spend_by_category(
    transactions: &[Transaction],
    registry: &CategoryRegistry,
) -> Vec<(String, Decimal)> {
    registry
        .names()
        .iter()
        .map(|name| {
            let spent = transactions
                .iter()
                .filter(|txn| txn.category == *name)
                .map(|txn| txn.amount)
                .sum();
            (name.clone(), spent)
        })
        .collect()
}

/// Overspend per category: `Some(spend - ceiling)` iff spend strictly
/// exceeds the ceiling. Exactly-at-ceiling is not overspend, and a category
/// with no ceiling set can never overspend.
pub fn overspend_by_category(
    spend: &[(String, Decimal)],
    budgets: &BudgetTable,
) -> Result<Vec<(String, Option<Decimal>)>, LedgerError> {
    spend
        .iter()
        .map(|(category, spent)| {
            let over = match budgets.budget_for(category)? {
                Some(ceiling) if *spent > ceiling => Some(*spent - ceiling),
                _ => None,
            };
            Ok((category.clone(), over))
        })
        .collect()
}

/// Compose the per-category spend and overspend into display rows.
pub fn budget_report(
    transactions: &[Transaction],
    registry: &CategoryRegistry,
    budgets: &BudgetTable,
) -> Result<Vec<BudgetLine>, LedgerError> {
    spend_by_category(transactions, registry)
        .into_iter()
        .map(|(category, spent)| {
            let ceiling = budgets.budget_for(&category)?;
            let overspent = match ceiling {
                Some(ceiling) if spent > ceiling => Some(spent - ceiling),
                _ => None,
            };
            Ok(BudgetLine {
                category,
                spent,
                ceiling,
                overspent,
            })
        })
        .collect()
}
