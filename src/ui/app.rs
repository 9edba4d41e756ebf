use anyhow::Result;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

use crate::classify::Classifier;
use crate::import::StatementImporter;
use crate::models::Transaction;
use crate::store::{CategoryStore, UNCATEGORIZED};
use crate::summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Browse,
    Expenses,
    Payments,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Browse, Self::Expenses, Self::Payments]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Browse => write!(f, "Statement"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Payments => write!(f, "Payments"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    /// Typing a new category name into the input bar.
    NewCategory,
    /// Choosing a category for the selected expense from the picker overlay.
    PickCategory,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::NewCategory => write!(f, "INPUT"),
            Self::PickCategory => write!(f, "PICK"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Loaded statement
    pub(crate) statement_path: Option<PathBuf>,
    pub(crate) debits: Vec<Transaction>,
    pub(crate) credits: Vec<Transaction>,
    /// Per-debit-row category edit awaiting "apply"; parallel to `debits`.
    pub(crate) pending: Vec<Option<String>>,

    // Summaries (recomputed on load and on apply)
    pub(crate) category_totals: Vec<(String, Decimal)>,
    pub(crate) total_payments: Decimal,

    // Cursors
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,
    pub(crate) payment_index: usize,
    pub(crate) payment_scroll: usize,
    pub(crate) picker_index: usize,
    pub(crate) picker_scroll: usize,

    // Input bar buffer (new-category name)
    pub(crate) input_buffer: String,

    // File browser
    pub(crate) browse_path: PathBuf,
    pub(crate) browse_entries: Vec<PathBuf>,
    pub(crate) browse_index: usize,
    pub(crate) browse_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Browse,
            input_mode: InputMode::Normal,
            status_message: String::new(),
            show_help: false,

            statement_path: None,
            debits: Vec::new(),
            credits: Vec::new(),
            pending: Vec::new(),

            category_totals: Vec::new(),
            total_payments: Decimal::ZERO,

            expense_index: 0,
            expense_scroll: 0,
            payment_index: 0,
            payment_scroll: 0,
            picker_index: 0,
            picker_scroll: 0,

            input_buffer: String::new(),

            browse_path: directories::UserDirs::new()
                .map(|d| d.home_dir().to_path_buf())
                .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"))),
            browse_entries: Vec::new(),
            browse_index: 0,
            browse_scroll: 0,

            visible_rows: 20,
        }
    }

    /// One full parse → classify → split cycle for a statement file. Any
    /// failure leaves the previously loaded statement untouched.
    pub(crate) fn load_statement(&mut self, path: &Path, store: &CategoryStore) -> Result<()> {
        let mut transactions = StatementImporter::load(path)?;
        Classifier::new(store).classify_batch(&mut transactions);

        let (debits, credits) = summary::split_by_direction(transactions);
        self.debits = debits;
        self.credits = credits;
        self.pending = vec![None; self.debits.len()];
        self.statement_path = Some(path.to_path_buf());

        self.expense_index = 0;
        self.expense_scroll = 0;
        self.payment_index = 0;
        self.payment_scroll = 0;

        self.refresh_summaries();
        Ok(())
    }

    /// Rows whose category no longer exists fall back to the default.
    /// Run before the grid or picker is shown.
    pub(crate) fn sanitize_categories(&mut self, store: &CategoryStore) {
        for txn in &mut self.debits {
            if !store.contains(&txn.category) {
                txn.category = UNCATEGORIZED.to_string();
            }
        }
    }

    pub(crate) fn refresh_summaries(&mut self) {
        self.category_totals = summary::category_totals(&self.debits);
        self.total_payments = summary::total_payments(&self.credits);
    }

    /// Commit pending edits: each changed row takes its new category and the
    /// row's details string is taught to that category as a keyword.
    /// Returns how many rows changed.
    pub(crate) fn apply_changes(&mut self, store: &mut CategoryStore) -> Result<usize> {
        let mut changed = 0;
        for (txn, pending) in self.debits.iter_mut().zip(self.pending.iter_mut()) {
            let Some(new_category) = pending.take() else {
                continue;
            };
            if new_category == txn.category {
                continue;
            }
            txn.category = new_category.clone();
            store.add_keyword(&new_category, &txn.details)?;
            changed += 1;
        }
        if changed > 0 {
            self.refresh_summaries();
        }
        Ok(changed)
    }

    pub(crate) fn pending_count(&self) -> usize {
        self.pending.iter().filter(|p| p.is_some()).count()
    }

    /// Re-scan the browse directory: parent entry first, then directories,
    /// then CSV files, each alphabetical.
    pub(crate) fn refresh_browse(&mut self) {
        let mut entries: Vec<PathBuf> = Vec::new();

        if let Some(parent) = self.browse_path.parent() {
            entries.push(parent.to_path_buf());
        }

        if let Ok(read_dir) = std::fs::read_dir(&self.browse_path) {
            let all: Vec<PathBuf> = read_dir
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    let hidden = p
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with('.'));
                    !hidden
                        && (p.is_dir()
                            || p.extension()
                                .and_then(|e| e.to_str())
                                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv")))
                })
                .collect();

            let mut dirs: Vec<PathBuf> = all.iter().filter(|p| p.is_dir()).cloned().collect();
            let mut files: Vec<PathBuf> = all.iter().filter(|p| !p.is_dir()).cloned().collect();
            dirs.sort();
            files.sort();
            entries.extend(dirs);
            entries.extend(files);
        }

        self.browse_entries = entries;
        self.browse_index = 0;
        self.browse_scroll = 0;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
