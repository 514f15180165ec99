use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::summary;
use crate::ui::app::{App, FormField, InputMode, RECENT_WINDOW_DAYS};
use crate::ui::theme;
use crate::ui::util::{format_amount, format_date, truncate};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header bar
            Constraint::Length(7), // Summary cards
            Constraint::Min(8),    // Summaries + transaction list
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_summary_cards(f, chunks[1], app);
    render_body(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);

    if app.input_mode == InputMode::Adding {
        render_form_overlay(f, f.area(), app);
    }
    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(" Expense Tracker ", theme::header_style()),
        Span::styled(
            format!(" {} ", app.input_mode),
            Style::default().fg(theme::TEXT_DIM).bg(theme::HEADER_BG),
        ),
    ]))
    .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(bar, area);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let total = summary::total_spent(app.ledger.all());
    let recent = app.ledger.recent(RECENT_WINDOW_DAYS).len();

    render_card(f, cards[0], "Total Spent", format_amount(total));
    render_card(
        f,
        cards[1],
        "Transactions",
        format!("{recent} in last {RECENT_WINDOW_DAYS} days"),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_body(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_budget_summary(f, columns[0], app);
    render_transaction_list(f, columns[1], app);
}

fn render_budget_summary(f: &mut Frame, area: Rect, app: &App) {
    let report = match summary::budget_report(app.ledger.all(), app.ledger.registry(), &app.budgets)
    {
        Ok(report) => report,
        Err(e) => {
            let msg = Paragraph::new(Line::from(Span::styled(
                format!("Budgets unavailable: {e}"),
                theme::dim_style(),
            )))
            .centered()
            .block(titled_block(" Budgets "));
            f.render_widget(msg, area);
            return;
        }
    };

    let items: Vec<ListItem> = report
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let ceiling = match line.ceiling {
                Some(c) => format_amount(c),
                None => String::from("—"),
            };
            let mut spans = vec![
                Span::styled(format!("{:<14}", truncate(&line.category, 13)), style),
                Span::styled(
                    format!("{:>12} / {:<12}", format_amount(line.spent), ceiling),
                    if line.overspent.is_some() {
                        Style::default().fg(theme::RED)
                    } else {
                        Style::default().fg(theme::GREEN)
                    },
                ),
            ];
            if let Some(over) = line.overspent {
                spans.push(Span::styled(
                    format!(" over by {}", format_amount(over)),
                    theme::overspent_style(),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(titled_block(" Budgets "));
    f.render_widget(list, area);
}

fn render_transaction_list(f: &mut Frame, area: Rect, app: &App) {
    let transactions = app.ledger.all();

    if app.ledger.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No transactions yet. Press a to add one",
            theme::dim_style(),
        )))
        .centered()
        .block(titled_block(" Transactions "));
        f.render_widget(msg, area);
        return;
    }

    let page = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = transactions
        .iter()
        .enumerate()
        .rev() // newest first
        .skip(app.txn_scroll)
        .take(page)
        .map(|(i, txn)| {
            let style = if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<20}", truncate(&txn.title, 19)), style),
                Span::styled(
                    format!("{:<14}", truncate(&txn.category, 13)),
                    theme::dim_style(),
                ),
                Span::styled(format!("{:>12}", format_amount(txn.amount)), style),
                Span::styled(format!("  {}", format_date(txn.date)), theme::dim_style()),
            ]))
        })
        .collect();

    let title = format!(" Transactions ({}) ", transactions.len());
    let list = List::new(items).block(titled_block(&title));
    f.render_widget(list, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let bar = Paragraph::new(Line::from(Span::raw(format!(" {}", app.status_message))))
        .style(theme::status_bar_style());
    f.render_widget(bar, area);
}

// ── Overlays ─────────────────────────────────────────────────

fn render_form_overlay(f: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(46, 12, area);
    f.render_widget(Clear, popup);

    let category = app.selected_category().unwrap_or("?");
    let lines = vec![
        Line::from(""),
        field_line("Title", &app.title_input, app.field == FormField::Title),
        field_line("Amount", &app.amount_input, app.field == FormField::Amount),
        field_line(
            "Category",
            &format!("< {category} >"),
            app.field == FormField::Category,
        ),
        field_line("Date", &app.date_input, app.field == FormField::Date),
        Line::from(""),
        Line::from(Span::styled(
            " Tab next field · ↑/↓ category · Enter add · Esc cancel",
            theme::dim_style(),
        )),
    ];

    let form = Paragraph::new(lines).block(
        titled_block(" Add Transaction ").style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(form, popup);
}

fn field_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let style = if active {
        theme::active_field_style()
    } else {
        theme::normal_style()
    };
    Line::from(vec![
        Span::styled(format!(" {label:<10}"), theme::dim_style()),
        Span::styled(format!("{value} "), style),
    ])
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let popup = centered_rect(40, 10, area);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(" a        add a transaction")),
        Line::from(Span::raw(" j/k      scroll the transaction list")),
        Line::from(Span::raw(" ?        toggle this help")),
        Line::from(Span::raw(" q        quit")),
        Line::from(""),
        Line::from(Span::styled(
            " Nothing is saved: the ledger lives for this session only.",
            theme::dim_style(),
        )),
    ];

    let help = Paragraph::new(lines)
        .block(titled_block(" Help ").style(Style::default().bg(theme::HEADER_BG)));
    f.render_widget(help, popup);
}

fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
