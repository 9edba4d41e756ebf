use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_aed, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    render_total_card(f, chunks[0], app);
    render_payment_table(f, chunks[1], app);
}

fn render_total_card(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Total Payments ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let card = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_aed(app.total_payments),
            Style::default()
                .fg(theme::GREEN)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(card, area);
}

fn render_payment_table(f: &mut Frame, area: Rect, app: &App) {
    if app.credits.is_empty() {
        let msg = if app.statement_path.is_none() {
            "No statement loaded — press o to open one"
        } else {
            "This statement has no credit transactions"
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Payments (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(msg, theme::dim_style())))
                .centered()
                .block(block),
            area,
        );
        return;
    }

    let header_cells = ["Date", "Details", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .credits
        .iter()
        .enumerate()
        .skip(app.payment_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let date = txn
                .date
                .map(|d| d.format("%d %b %Y").to_string())
                .unwrap_or_else(|| "—".to_string());

            let style = if i == app.payment_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(date),
                Cell::from(truncate(&txn.details, 48)),
                Cell::from(Span::styled(format_aed(txn.amount), theme::credit_style())),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(24),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Payments ({}) ", app.credits.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
