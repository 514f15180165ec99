mod error;
mod ledger;
mod models;
mod run;
mod summary;
mod ui;

use anyhow::Result;

use crate::ledger::Ledger;
use crate::models::{BudgetTable, CategoryRegistry};
use crate::ui::app::App;

fn main() -> Result<()> {
    let registry = CategoryRegistry::defaults();
    let budgets = BudgetTable::defaults(&registry);
    let ledger = Ledger::new(registry);

    let mut app = App::new(ledger, budgets);
    run::as_tui(&mut app)
}
