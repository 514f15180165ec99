use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::CategoryRegistry;

/// Monthly spend ceilings, one slot per registered category.
///
/// "No ceiling set" is an explicit `None`, distinct from a zero ceiling:
/// an unset budget never flags overspend, while a zero ceiling flags any
/// positive spend.
#[derive(Debug, Clone)]
pub struct BudgetTable {
    ceilings: Vec<(String, Option<Decimal>)>,
}

impl BudgetTable {
    /// An empty table (no ceilings set) covering every registry category.
    pub fn new(registry: &CategoryRegistry) -> Self {
        Self {
            ceilings: registry
                .names()
                .iter()
                .map(|name| (name.clone(), None))
                .collect(),
        }
    }

    /// The ceilings every session starts with. Miscellaneous is deliberately
    /// left unset.
    pub fn defaults(registry: &CategoryRegistry) -> Self {
        let mut table = Self::new(registry);
        for (name, ceiling) in [
            ("Food", 1000),
            ("Shopping", 500),
            ("Transport", 300),
            ("Utilities", 200),
            ("Entertainment", 400),
        ] {
            // Ignore names absent from a non-default registry.
            let _ = table.set(name, Decimal::from(ceiling));
        }
        table
    }

    /// Set the ceiling for a registered category.
    pub fn set(&mut self, category: &str, ceiling: Decimal) -> Result<(), LedgerError> {
        if ceiling < Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(ceiling.to_string()));
        }
        match self.ceilings.iter_mut().find(|(name, _)| name == category) {
            Some((_, slot)) => {
                *slot = Some(ceiling);
                Ok(())
            }
            None => Err(LedgerError::UnknownCategory(category.to_string())),
        }
    }

    /// Ceiling for a registered category, `Ok(None)` when none is set.
    pub fn budget_for(&self, category: &str) -> Result<Option<Decimal>, LedgerError> {
        self.ceilings
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, ceiling)| *ceiling)
            .ok_or_else(|| LedgerError::UnknownCategory(category.to_string()))
    }
}
