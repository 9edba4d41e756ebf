use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Open Statement — {} ", app.browse_path.display()),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if app.browse_entries.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No CSV files or directories here",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let page = area.height.saturating_sub(2) as usize;
    let parent = app.browse_path.parent();

    let items: Vec<ListItem> = app
        .browse_entries
        .iter()
        .enumerate()
        .skip(app.browse_scroll)
        .take(page.max(1))
        .map(|(i, path)| {
            let is_parent = Some(path.as_path()) == parent;
            let label = if is_parent {
                "../".to_string()
            } else {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("?")
                    .to_string();
                if path.is_dir() {
                    format!("{name}/")
                } else {
                    name
                }
            };

            let style = if i == app.browse_index {
                theme::selected_style()
            } else if path.is_dir() {
                Style::default().fg(theme::ACCENT)
            } else {
                theme::normal_style()
            };

            ListItem::new(Line::from(Span::styled(format!(" {label}"), style)))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
