//! Application state and core logic

use crate::config::SignupConfig;
use crate::lookup::{PostalLookup, ViaCepClient};
use crate::state::{
    describe_validation_errors, validate, AppState, AutofillEffect, Form, LookupCompletion,
    LookupOutcome, LookupTicket, Notice, REGISTRATION_COMPLETE,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Postal code lookup service
    lookup: Arc<dyn PostalLookup>,
    /// Upper bound for a single lookup
    lookup_timeout: Duration,
    /// Lookup tasks report here; drained by the event loop
    completions_tx: UnboundedSender<LookupCompletion>,
    completions_rx: UnboundedReceiver<LookupCompletion>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured lookup service
    pub fn new(config: &SignupConfig) -> Result<Self> {
        let client = ViaCepClient::new(config.lookup_base_url(), config.lookup_timeout())?;
        tracing::info!(base_url = client.base_url(), "using postal code lookup service");
        Ok(Self::with_lookup(Arc::new(client), config.lookup_timeout()))
    }

    pub fn with_lookup(lookup: Arc<dyn PostalLookup>, lookup_timeout: Duration) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            lookup,
            lookup_timeout,
            completions_tx,
            completions_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notices are modal
        if self.state.has_notices() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        if self.state.state_picker.is_some() {
            self.handle_state_picker_key(key);
            return Ok(());
        }

        self.handle_form_key(key);
        Ok(())
    }

    fn handle_state_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.close_state_picker(),
            KeyCode::Enter => self.state.confirm_state_picker(),
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(picker) = self.state.state_picker.as_mut() {
                    picker.move_up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(picker) = self.state.state_picker.as_mut() {
                    picker.move_down();
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if let Some(picker) = self.state.state_picker.as_mut() {
                    picker.jump_to_letter(c);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            // Submit (Ctrl+S, or Cmd+S on macOS)
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(crate::platform::SUBMIT_MODIFIER | KeyModifiers::CONTROL) =>
            {
                self.submit();
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => {
                if form.is_state_selector_active() {
                    self.state.open_state_picker();
                } else if form.is_submit_active() {
                    self.submit();
                } else {
                    form.next_field();
                }
            }
            KeyCode::Char(' ') if form.is_state_selector_active() => {
                self.state.open_state_picker();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                let changed = form.get_active_field_mut().is_some_and(|f| f.push_char(c));
                if changed && form.is_postal_code_active() {
                    self.on_postal_code_edited();
                }
            }
            KeyCode::Backspace => {
                let changed = form.get_active_field_mut().is_some_and(|f| f.pop_char());
                if changed && form.is_postal_code_active() {
                    self.on_postal_code_edited();
                }
            }
            _ => {}
        }
    }

    /// Run the autofill controller after the postal code changed
    fn on_postal_code_edited(&mut self) {
        let form = &mut self.state.form;
        let effect = self
            .state
            .autofill
            .on_postal_code_changed(&mut form.address, form.postal_code.as_text());
        if let AutofillEffect::Lookup(ticket) = effect {
            self.spawn_lookup(ticket);
        }
    }

    /// Run a lookup in the background; its completion arrives on the channel
    fn spawn_lookup(&self, ticket: LookupTicket) {
        let lookup = Arc::clone(&self.lookup);
        let tx = self.completions_tx.clone();
        let timeout = self.lookup_timeout;
        tokio::spawn(async move {
            let outcome = match tokio::time::timeout(timeout, lookup.lookup(&ticket.postal_code)).await
            {
                Ok(outcome) => outcome,
                Err(_) => LookupOutcome::TransportError(format!(
                    "lookup timed out after {}ms",
                    timeout.as_millis()
                )),
            };
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(LookupCompletion::new(ticket, outcome));
        });
    }

    /// Apply every lookup that finished since the last call
    pub fn drain_lookup_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply_lookup_completion(completion);
        }
    }

    fn apply_lookup_completion(&mut self, completion: LookupCompletion) {
        let form = &mut self.state.form;
        let notice = self.state.autofill.on_lookup_completed(
            &mut form.address,
            form.postal_code.as_text(),
            completion,
        );
        if let Some(notice) = notice {
            self.state.push_notice(notice);
        }
    }

    /// Validate the form and report the result
    fn submit(&mut self) {
        let today = chrono::Local::now().date_naive();
        match validate(&self.state.form, today) {
            Ok(()) => {
                tracing::info!(
                    postal_code = self.state.form.postal_code.as_text(),
                    state = %self.state.form.address.state_code,
                    "registration submitted"
                );
                self.state.push_notice(Notice::info(REGISTRATION_COMPLETE));
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "registration rejected");
                self.state
                    .push_notice(Notice::error(describe_validation_errors(&errors)));
            }
        }
    }
}
