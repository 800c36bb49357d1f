use std::{fs, path::PathBuf, time::Duration};

use crossterm::event::{self, Event, KeyEvent};

use engine::{
    CSV_FILENAME, FileStore, Ledger, LedgerError, PDF_FILENAME, Summary, TransactionDraft,
    TransactionKind, csv_export, pdf_export,
};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui, view,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Description,
    Amount,
    Kind,
    Date,
    List,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Kind,
            Self::Kind => Self::Date,
            Self::Date => Self::List,
            Self::List => Self::Description,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Description => Self::List,
            Self::Amount => Self::Description,
            Self::Kind => Self::Amount,
            Self::Date => Self::Kind,
            Self::List => Self::Date,
        }
    }
}

#[derive(Debug)]
pub struct FormState {
    pub description: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub date: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            kind: TransactionKind::Income,
            date: String::new(),
        }
    }
}

impl FormState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// The blocking notification overlay: while shown, the next key press only
/// dismisses it.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

#[derive(Debug)]
pub struct AppState {
    pub focus: Focus,
    pub form: FormState,
    pub selected: usize,
    pub dark_mode: bool,
    pub notice: Option<Notice>,
    pub rows: Vec<view::TransactionRow>,
    pub summary: Summary,
    pub summary_view: view::SummaryView,
}

pub struct App {
    config: AppConfig,
    ledger: Ledger,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let ledger = Ledger::builder()
            .store(Box::new(FileStore::open(&config.data_file)))
            .build();
        let dark_mode = ledger.dark_mode();

        let summary = ledger.summarize();
        let state = AppState {
            focus: Focus::Description,
            form: FormState::default(),
            selected: 0,
            dark_mode,
            notice: None,
            rows: view::rows(ledger.transactions()),
            summary,
            summary_view: view::summary_view(&summary),
        };

        Ok(Self {
            config,
            ledger,
            state,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key)?,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // A visible notice blocks everything else until acknowledged.
        if self.state.notice.is_some() {
            self.state.notice = None;
            return Ok(());
        }

        match ui::keymap::map_key(key) {
            ui::keymap::AppAction::Quit => {
                self.should_quit = true;
            }
            ui::keymap::AppAction::ToggleDark => {
                self.toggle_dark_mode();
            }
            ui::keymap::AppAction::ExportCsv => {
                self.export_csv();
            }
            ui::keymap::AppAction::ExportPdf => {
                self.export_pdf();
            }
            ui::keymap::AppAction::NextField => {
                self.state.focus = self.state.focus.next();
            }
            ui::keymap::AppAction::PrevField => {
                self.state.focus = self.state.focus.prev();
            }
            ui::keymap::AppAction::Submit => {
                if self.state.focus != Focus::List {
                    self.submit_add();
                }
            }
            ui::keymap::AppAction::Backspace => {
                if let Some(field) = self.active_field_mut() {
                    field.pop();
                }
            }
            ui::keymap::AppAction::Up => match self.state.focus {
                Focus::List => self.select_prev(),
                Focus::Kind => self.toggle_kind(),
                _ => {}
            },
            ui::keymap::AppAction::Down => match self.state.focus {
                Focus::List => self.select_next(),
                Focus::Kind => self.toggle_kind(),
                _ => {}
            },
            ui::keymap::AppAction::DeleteRow => {
                if self.state.focus == Focus::List {
                    self.delete_selected();
                }
            }
            ui::keymap::AppAction::Cancel => {
                self.state.focus = Focus::List;
            }
            ui::keymap::AppAction::Input(ch) => {
                self.handle_char(ch);
            }
            ui::keymap::AppAction::None => {}
        }

        Ok(())
    }

    fn handle_char(&mut self, ch: char) {
        match self.state.focus {
            Focus::List => match ch {
                'q' => self.should_quit = true,
                'a' => self.state.focus = Focus::Description,
                'j' => self.select_next(),
                'k' => self.select_prev(),
                'x' => self.delete_selected(),
                _ => {}
            },
            Focus::Kind => {
                if ch == ' ' {
                    self.toggle_kind();
                }
            }
            Focus::Description => self.state.form.description.push(ch),
            Focus::Amount => {
                if ch.is_ascii_digit() || matches!(ch, '.' | ',' | '+' | '-') {
                    self.state.form.amount.push(ch);
                }
            }
            Focus::Date => {
                if ch.is_ascii_digit() || ch == '-' {
                    self.state.form.date.push(ch);
                }
            }
        }
    }

    fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.state.focus {
            Focus::Description => Some(&mut self.state.form.description),
            Focus::Amount => Some(&mut self.state.form.amount),
            Focus::Date => Some(&mut self.state.form.date),
            Focus::Kind | Focus::List => None,
        }
    }

    fn toggle_kind(&mut self) {
        self.state.form.kind = match self.state.form.kind {
            TransactionKind::Income => TransactionKind::Expense,
            TransactionKind::Expense => TransactionKind::Income,
        };
    }

    fn submit_add(&mut self) {
        let draft = TransactionDraft {
            description: &self.state.form.description,
            amount: &self.state.form.amount,
            kind: self.state.form.kind.as_str(),
            date: &self.state.form.date,
        };

        match self.ledger.add(draft) {
            Ok(tx) => {
                tracing::info!(id = tx.id, "transaction added");
                self.state.form.reset();
                self.state.focus = Focus::Description;
                self.refresh_views();
            }
            Err(LedgerError::Validation(err)) => {
                self.notify(NoticeLevel::Error, err.to_string());
            }
            Err(err) => {
                tracing::error!("failed to save transaction: {err}");
                self.notify(NoticeLevel::Error, format!("Could not save: {err}"));
            }
        }
    }

    fn delete_selected(&mut self) {
        // The delete is bound to the selected row's id, never to an index
        // into some other collection.
        let Some(id) = self.state.rows.get(self.state.selected).map(|row| row.id) else {
            return;
        };

        match self.ledger.delete(id) {
            Ok(true) => {
                tracing::info!(id, "transaction deleted");
                self.refresh_views();
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!("failed to delete transaction: {err}");
                self.notify(NoticeLevel::Error, format!("Could not delete: {err}"));
            }
        }
    }

    fn toggle_dark_mode(&mut self) {
        let enabled = !self.state.dark_mode;
        if let Err(err) = self.ledger.set_dark_mode(enabled) {
            tracing::error!("failed to persist dark mode: {err}");
        }
        self.state.dark_mode = enabled;
    }

    fn export_csv(&mut self) {
        match csv_export(self.ledger.transactions()) {
            Ok(bytes) => self.write_export(CSV_FILENAME, &bytes),
            Err(err) => self.notify(NoticeLevel::Error, err.to_string()),
        }
    }

    fn export_pdf(&mut self) {
        match pdf_export(self.ledger.transactions()) {
            Ok(bytes) => self.write_export(PDF_FILENAME, &bytes),
            Err(err) => self.notify(NoticeLevel::Error, err.to_string()),
        }
    }

    fn write_export(&mut self, filename: &str, bytes: &[u8]) {
        let path = PathBuf::from(&self.config.export_dir).join(filename);
        match fs::write(&path, bytes) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "export written");
                self.notify(NoticeLevel::Success, format!("Saved {}", path.display()));
            }
            Err(err) => {
                tracing::error!(path = %path.display(), "export failed: {err}");
                self.notify(
                    NoticeLevel::Error,
                    format!("Could not write {}: {err}", path.display()),
                );
            }
        }
    }

    fn select_next(&mut self) {
        if self.state.rows.is_empty() {
            return;
        }
        self.state.selected = (self.state.selected + 1).min(self.state.rows.len() - 1);
    }

    fn select_prev(&mut self) {
        self.state.selected = self.state.selected.saturating_sub(1);
    }

    fn notify(&mut self, level: NoticeLevel, message: String) {
        self.state.notice = Some(Notice { message, level });
    }

    // One cycle of the read side: project the ledger into renderable state.
    fn refresh_views(&mut self) {
        let summary = self.ledger.summarize();
        self.state.rows = view::rows(self.ledger.transactions());
        self.state.summary = summary;
        self.state.summary_view = view::summary_view(&summary);
        if self.state.selected >= self.state.rows.len() {
            self.state.selected = self.state.rows.len().saturating_sub(1);
        }
    }
}
