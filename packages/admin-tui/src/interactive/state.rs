//! Screen state and key handling
//!
//! `App` owns the browser session plus everything that only matters to the
//! terminal: focus, text inputs, the filter draft, the row cursor and the
//! notification slot. Keys are translated into view events here; the view
//! state itself is only ever changed through `BrowserSession::dispatch`.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use provider_view::{
    BrowserSession, Notification, NotificationSlot, ProviderRecord, Severity, SortField,
    ViewConfig, ViewEvent,
};

use super::filters::FilterDraft;
use super::types::{Flow, Focus};

pub struct App {
    session: BrowserSession,
    toast: NotificationSlot,
    focus: Focus,
    search_input: String,
    goto_input: String,
    draft: FilterDraft,
    cursor: usize,
}

impl App {
    pub fn new(session: BrowserSession, config: &ViewConfig) -> Self {
        Self {
            session,
            toast: NotificationSlot::new(config.notification_duration),
            focus: Focus::Table,
            search_input: String::new(),
            goto_input: String::new(),
            draft: FilterDraft::default(),
            cursor: 0,
        }
    }

    pub fn session(&self) -> &BrowserSession {
        &self.session
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn goto_input(&self) -> &str {
        &self.goto_input
    }

    pub fn draft(&self) -> &FilterDraft {
        &self.draft
    }

    /// Row index of the cursor inside the visible page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn toast(&self) -> Option<&Notification> {
        self.toast.current()
    }

    pub fn toast_deadline(&self) -> Option<Instant> {
        self.toast.deadline()
    }

    /// Called when the auto-dismiss timer fires.
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.expire(now) {
            debug!("Notification expired");
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        match self.focus {
            Focus::Table => return self.handle_table_key(key, now),
            Focus::Search => self.handle_search_key(key, now),
            Focus::Filters => self.handle_filter_key(key, now),
            Focus::GoTo => self.handle_goto_key(key, now),
        }

        Flow::Continue
    }

    fn handle_table_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,

            KeyCode::Char('/') => {
                self.search_input = self.session.state().search_term.clone();
                self.focus = Focus::Search;
            }
            KeyCode::Char('f') => {
                self.draft = FilterDraft::from_committed(&self.session.state().filters);
                self.focus = Focus::Filters;
            }
            KeyCode::Char('c') => {
                self.search_input.clear();
                self.dispatch(ViewEvent::FiltersCleared, now);
            }
            KeyCode::Char('g') => {
                self.goto_input.clear();
                self.focus = Focus::GoTo;
            }

            KeyCode::Char(digit @ '1'..='7') => {
                let column = digit as usize - '1' as usize;
                if let Some(field) = SortField::all().get(column) {
                    self.dispatch(ViewEvent::SortRequested { field: *field }, now);
                }
            }

            KeyCode::Left => {
                self.dispatch(ViewEvent::PreviousPage, now);
            }
            KeyCode::Right => {
                self.dispatch(ViewEvent::NextPage, now);
            }

            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let rows = self.session.page().rows.len();
                if self.cursor + 1 < rows {
                    self.cursor += 1;
                }
            }

            KeyCode::Char(' ') => {
                if let Some(record) = self.cursor_record() {
                    let id = record.id.clone();
                    let checked = !self.session.state().selection.contains(&id);
                    self.dispatch(ViewEvent::SelectRow { id, checked }, now);
                }
            }
            KeyCode::Char('a') => {
                let checked = !self.session.is_all_selected();
                self.dispatch(ViewEvent::SelectAll { checked }, now);
            }

            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(record) = self.cursor_record() {
                    let id = record.id.clone();
                    self.dispatch(ViewEvent::EditRequested { id }, now);
                }
            }

            KeyCode::Char('x') => {
                self.toast.dismiss();
            }

            _ => {}
        }

        Flow::Continue
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Enter => {
                let term = self.search_input.trim().to_string();
                self.search_input = term.clone();
                self.dispatch(ViewEvent::SearchSubmitted { term }, now);
                self.focus = Focus::Table;
            }
            KeyCode::Esc => self.focus = Focus::Table,
            KeyCode::Backspace => {
                self.search_input.pop();
                let term = self.search_input.clone();
                self.dispatch(ViewEvent::SearchChanged { term }, now);
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                let term = self.search_input.clone();
                self.dispatch(ViewEvent::SearchChanged { term }, now);
            }
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Table,
            KeyCode::Up | KeyCode::BackTab => self.draft.previous_field(),
            KeyCode::Down | KeyCode::Tab => self.draft.next_field(),
            KeyCode::Left => self.draft.cycle(false),
            KeyCode::Right => self.draft.cycle(true),
            KeyCode::Backspace => self.draft.pop_char(),
            KeyCode::Char(c) => self.draft.push_char(c),
            KeyCode::Delete => {
                self.draft = FilterDraft::default();
                self.search_input.clear();
                self.dispatch(ViewEvent::FiltersCleared, now);
                self.focus = Focus::Table;
            }
            KeyCode::Enter => {
                let filters = self.draft.values().clone();
                let applied = self.dispatch(ViewEvent::FiltersApplied { filters }, now);
                // Invalid drafts stay open for correction
                if applied == Some(true) {
                    self.focus = Focus::Table;
                }
            }
            _ => {}
        }
    }

    fn handle_goto_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Table,
            KeyCode::Backspace => {
                self.goto_input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => self.goto_input.push(c),
            KeyCode::Enter => {
                if let Ok(page) = self.goto_input.parse::<usize>() {
                    self.dispatch(ViewEvent::PageRequested { page }, now);
                }
                self.goto_input.clear();
                self.focus = Focus::Table;
            }
            _ => {}
        }
    }

    /// Dispatch one event and surface its notification.
    ///
    /// Returns `Some(true)` for a success notification, `Some(false)` for an
    /// error, `None` when the transition was silent.
    fn dispatch(&mut self, event: ViewEvent, now: Instant) -> Option<bool> {
        let notification = self.session.dispatch(event);
        self.clamp_cursor();

        notification.map(|notification| {
            let ok = notification.severity == Severity::Success;
            self.toast.show(notification, now);
            ok
        })
    }

    fn cursor_record(&self) -> Option<&ProviderRecord> {
        self.session.page().rows.get(self.cursor).copied()
    }

    fn clamp_cursor(&mut self) {
        let rows = self.session.page().rows.len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }
}
