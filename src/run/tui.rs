use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::store::CategoryStore;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(store: &mut CategoryStore) -> Result<()> {
    let mut app = App::new();
    app.refresh_browse();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut CategoryStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Tab, status, and input bars plus table chrome eat five rows.
            let content_height = f.area().height.saturating_sub(5) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app, store);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, store)?,
                InputMode::NewCategory => handle_new_category_input(key, app, store),
                InputMode::PickCategory => handle_picker_input(key, app, store),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(
    key: event::KeyEvent,
    app: &mut App,
    store: &mut CategoryStore,
) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, store, Screen::Browse),
        KeyCode::Char('2') => switch_screen(app, store, Screen::Expenses),
        KeyCode::Char('3') => switch_screen(app, store, Screen::Payments),
        KeyCode::Char('o') => switch_screen(app, store, Screen::Browse),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, store, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, store, screens[prev]);
        }
        KeyCode::Enter => handle_enter(app, store),
        KeyCode::Esc => {
            app.status_message.clear();
        }
        KeyCode::Char('n') if app.screen == Screen::Expenses => {
            app.input_mode = InputMode::NewCategory;
            app.input_buffer.clear();
        }
        KeyCode::Char('a') if app.screen == Screen::Expenses => {
            match app.apply_changes(store) {
                Ok(0) => app.set_status("No pending changes"),
                Ok(n) => app.set_status(format!(
                    "Applied {n} change{} and updated keywords",
                    if n == 1 { "" } else { "s" }
                )),
                Err(e) => app.set_status(format!("Error: {e:#}")),
            }
        }
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_new_category_input(key: event::KeyEvent, app: &mut App, store: &mut CategoryStore) {
    match key.code {
        KeyCode::Enter => {
            let name = app.input_buffer.trim().to_string();
            if !name.is_empty() {
                match store.add_category(&name) {
                    Ok(true) => app.set_status(format!("Added category: {name}")),
                    Ok(false) => app.set_status(format!("Category '{name}' already exists")),
                    Err(e) => app.set_status(format!("Error: {e:#}")),
                }
            }
            app.input_buffer.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_buffer.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            if app.input_buffer.pop().is_none() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.input_buffer.push(c);
        }
        _ => {}
    }
}

fn handle_picker_input(key: event::KeyEvent, app: &mut App, store: &CategoryStore) {
    let len = store.categories().len();
    let page = app.visible_rows.min(len).max(1);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            scroll_down(&mut app.picker_index, &mut app.picker_scroll, len, page);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_up(&mut app.picker_index, &mut app.picker_scroll);
        }
        KeyCode::Char('g') => {
            scroll_to_top(&mut app.picker_index, &mut app.picker_scroll);
        }
        KeyCode::Char('G') => {
            scroll_to_bottom(&mut app.picker_index, &mut app.picker_scroll, len, page);
        }
        KeyCode::Enter => {
            let picked = store
                .names()
                .get(app.picker_index)
                .map(|name| name.to_string());
            if let Some(name) = picked {
                assign_category(app, name);
            }
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        _ => {}
    }
}

fn assign_category(app: &mut App, name: String) {
    let row = app.expense_index;
    let Some(txn) = app.debits.get(row) else {
        return;
    };
    let details = txn.details.clone();
    if txn.category == name {
        app.pending[row] = None;
        app.set_status("Category unchanged");
    } else {
        app.pending[row] = Some(name.clone());
        app.set_status(format!("'{details}' → {name} (pending — press a to apply)"));
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, store: &CategoryStore, screen: Screen) {
    app.screen = screen;
    match screen {
        Screen::Browse => app.refresh_browse(),
        // Categories never disappear mid-session today, but the grid must
        // not show a name the picker cannot offer.
        Screen::Expenses => app.sanitize_categories(store),
        Screen::Payments => {}
    }
}

fn handle_enter(app: &mut App, store: &mut CategoryStore) {
    match app.screen {
        Screen::Browse => {
            let Some(path) = app.browse_entries.get(app.browse_index).cloned() else {
                return;
            };
            if path.is_dir() {
                app.browse_path = path;
                app.refresh_browse();
            } else {
                match app.load_statement(&path, store) {
                    Ok(()) => {
                        app.screen = Screen::Expenses;
                        app.set_status(format!(
                            "Loaded {} expenses and {} payments",
                            app.debits.len(),
                            app.credits.len()
                        ));
                    }
                    Err(e) => app.set_status(format!("Error processing file: {e:#}")),
                }
            }
        }
        Screen::Expenses => {
            if app.debits.is_empty() {
                return;
            }
            let current = app
                .pending
                .get(app.expense_index)
                .and_then(|p| p.as_deref())
                .unwrap_or(app.debits[app.expense_index].category.as_str())
                .to_string();
            app.picker_index = store
                .names()
                .iter()
                .position(|n| *n == current)
                .unwrap_or(0);
            app.picker_scroll = app.picker_index;
            app.input_mode = InputMode::PickCategory;
        }
        Screen::Payments => {}
    }
}

fn handle_move_down(app: &mut App) {
    let page = app.visible_rows;
    match app.screen {
        Screen::Browse => scroll_down(
            &mut app.browse_index,
            &mut app.browse_scroll,
            app.browse_entries.len(),
            page,
        ),
        Screen::Expenses => scroll_down(
            &mut app.expense_index,
            &mut app.expense_scroll,
            app.debits.len(),
            page,
        ),
        Screen::Payments => scroll_down(
            &mut app.payment_index,
            &mut app.payment_scroll,
            app.credits.len(),
            page,
        ),
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Browse => scroll_up(&mut app.browse_index, &mut app.browse_scroll),
        Screen::Expenses => scroll_up(&mut app.expense_index, &mut app.expense_scroll),
        Screen::Payments => scroll_up(&mut app.payment_index, &mut app.payment_scroll),
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Browse => scroll_to_top(&mut app.browse_index, &mut app.browse_scroll),
        Screen::Expenses => scroll_to_top(&mut app.expense_index, &mut app.expense_scroll),
        Screen::Payments => scroll_to_top(&mut app.payment_index, &mut app.payment_scroll),
    }
}

fn handle_goto_bottom(app: &mut App) {
    let page = app.visible_rows;
    match app.screen {
        Screen::Browse => scroll_to_bottom(
            &mut app.browse_index,
            &mut app.browse_scroll,
            app.browse_entries.len(),
            page,
        ),
        Screen::Expenses => scroll_to_bottom(
            &mut app.expense_index,
            &mut app.expense_scroll,
            app.debits.len(),
            page,
        ),
        Screen::Payments => scroll_to_bottom(
            &mut app.payment_index,
            &mut app.payment_scroll,
            app.credits.len(),
            page,
        ),
    }
}
