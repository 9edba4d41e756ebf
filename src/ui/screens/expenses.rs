use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_aed, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.debits.is_empty() {
        render_empty(f, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);

    render_expense_table(f, chunks[0], app);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_summary_table(f, side[0], app);
    render_category_chart(f, side[1], app);
}

fn render_empty(f: &mut Frame, area: Rect, app: &App) {
    let msg = if app.statement_path.is_none() {
        vec![
            Line::from(""),
            Line::from(Span::styled("No statement loaded", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press o to open a statement CSV",
                theme::dim_style(),
            )),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "This statement has no debit transactions",
                theme::dim_style(),
            )),
        ]
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Expenses (0) ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(msg).centered().block(block), area);
}

fn render_expense_table(f: &mut Frame, area: Rect, app: &App) {
    let header_cells = ["Date", "Details", "Amount", "Category"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .debits
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let date = txn
                .date
                .map(|d| d.format("%d %b %Y").to_string())
                .unwrap_or_else(|| "—".to_string());

            let pending = app.pending.get(i).and_then(|p| p.as_deref());
            let (category, category_style) = match pending {
                Some(name) => (format!("*{name}"), theme::pending_style()),
                None => (txn.category.clone(), theme::normal_style()),
            };

            let style = if i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(date),
                Cell::from(truncate(&txn.details, 32)),
                Cell::from(Span::styled(format_aed(txn.amount), theme::debit_style())),
                Cell::from(Span::styled(category, category_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(18),
    ];

    let pending_count = app.pending_count();
    let title = if pending_count > 0 {
        format!(
            " Expenses ({}) [{pending_count} pending — press a to apply] ",
            app.debits.len()
        )
    } else {
        format!(" Expenses ({}) ", app.debits.len())
    };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}

fn render_summary_table(f: &mut Frame, area: Rect, app: &App) {
    let header_cells = ["Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .category_totals
        .iter()
        .take(area.height.saturating_sub(3) as usize)
        .map(|(name, total)| {
            Row::new(vec![
                Cell::from(truncate(name, 18)),
                Cell::from(format_aed(*total)),
            ])
            .style(theme::normal_style())
        })
        .collect();

    let widths = [Constraint::Min(12), Constraint::Length(18)];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Expenses Summary ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    let bars: Vec<Bar> = app
        .category_totals
        .iter()
        .take(8)
        .map(|(name, total)| {
            let val = total.abs().to_u64().unwrap_or(0);
            Bar::default()
                .value(val)
                .label(Line::from(truncate(name, 9)))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(
                    " Expenses by Category ",
                    Style::default()
                        .fg(theme::TEXT_DIM)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}
