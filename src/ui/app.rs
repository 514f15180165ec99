use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;

use crate::ledger::Ledger;
use crate::models::BudgetTable;
use crate::ui::util::format_date;

/// How many days back the "recent" summary card looks.
pub(crate) const RECENT_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Adding,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Adding => write!(f, "ADD"),
        }
    }
}

/// Fields of the add-transaction form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Title,
    Amount,
    Category,
    Date,
}

impl FormField {
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Title,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Title => Self::Date,
            Self::Amount => Self::Title,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Model, owned by the session. Aggregates are recomputed from it on
    // every draw; nothing derived is stored here.
    pub(crate) ledger: Ledger,
    pub(crate) budgets: BudgetTable,

    // Transaction list viewport
    pub(crate) txn_scroll: usize,
    pub(crate) visible_rows: usize,

    // Add-transaction form
    pub(crate) field: FormField,
    pub(crate) title_input: String,
    pub(crate) amount_input: String,
    pub(crate) category_index: usize,
    pub(crate) date_input: String,
}

impl App {
    pub(crate) fn new(ledger: Ledger, budgets: BudgetTable) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            status_message: String::from("Press a to add a transaction, ? for help"),
            show_help: false,
            ledger,
            budgets,
            txn_scroll: 0,
            visible_rows: 10,
            field: FormField::Title,
            title_input: String::new(),
            amount_input: String::new(),
            category_index: 0,
            date_input: String::new(),
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    // ── Add-transaction form ─────────────────────────────────────

    pub(crate) fn open_form(&mut self) {
        self.input_mode = InputMode::Adding;
        self.field = FormField::Title;
        self.title_input.clear();
        self.amount_input.clear();
        self.category_index = 0;
        self.date_input = format_date(Local::now());
    }

    pub(crate) fn close_form(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn selected_category(&self) -> Option<&str> {
        self.ledger
            .registry()
            .names()
            .get(self.category_index)
            .map(String::as_str)
    }

    pub(crate) fn category_up(&mut self) {
        self.category_index = self.category_index.saturating_sub(1);
    }

    pub(crate) fn category_down(&mut self) {
        if self.category_index + 1 < self.ledger.registry().len() {
            self.category_index += 1;
        }
    }

    pub(crate) fn push_char(&mut self, c: char) {
        match self.field {
            FormField::Title => self.title_input.push(c),
            FormField::Amount => self.amount_input.push(c),
            FormField::Date => self.date_input.push(c),
            FormField::Category => {}
        }
    }

    pub(crate) fn pop_char(&mut self) {
        match self.field {
            FormField::Title => {
                self.title_input.pop();
            }
            FormField::Amount => {
                self.amount_input.pop();
            }
            FormField::Date => {
                self.date_input.pop();
            }
            FormField::Category => {}
        }
    }

    /// Validate the form and append to the ledger. Bad input never reaches
    /// `append`: the form stays open with a status message and the ledger is
    /// untouched. The ledger re-checks everything itself regardless.
    pub(crate) fn submit_form(&mut self) {
        if self.title_input.trim().is_empty() {
            self.set_status("Title is required");
            return;
        }
        if Decimal::from_str(self.amount_input.trim())
            .map(|amount| amount < Decimal::ZERO)
            .unwrap_or(true)
        {
            self.set_status(format!("Invalid amount: {}", self.amount_input));
            return;
        }
        let Some(date) = parse_form_date(&self.date_input) else {
            self.set_status(format!("Invalid date: {} (use D/M/YYYY)", self.date_input));
            return;
        };
        let Some(category) = self.selected_category().map(str::to_string) else {
            self.set_status("Select a category");
            return;
        };
        let title = self.title_input.clone();
        let amount = self.amount_input.clone();
        match self.ledger.append(&title, &amount, &category, date) {
            Ok(txn) => {
                self.set_status(format!("Added: {} ({})", txn.title, txn.category));
                self.close_form();
            }
            Err(e) => self.set_status(format!("Not added: {e}")),
        }
    }
}

/// Parse the form's `D/M/YYYY` date at local midnight.
fn parse_form_date(input: &str) -> Option<DateTime<Local>> {
    NaiveDate::parse_from_str(input.trim(), "%d/%m/%Y")
        .ok()?
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(Local)
        .single()
}
