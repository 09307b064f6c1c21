//! Application state and core logic

use crate::config::TuiConfig;
use crate::model::LengthValidator;
use crate::platform::SUBMIT_MODIFIER;
use crate::registrar::{LocalRegistrar, Registrar};
use crate::state::{Alert, AppState, Form, RegisterFocus};
use crate::viewmodel::{FormCoordinator, FormOutputs};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use spark_signals::effect;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Main application struct
pub struct App {
    /// Widget state, shared with the output bindings
    state: Rc<RefCell<AppState>>,
    /// View model deriving labels, gate and results from field input
    coordinator: FormCoordinator,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Stop functions for the output bindings
    bindings: Vec<Box<dyn FnOnce()>>,
}

impl App {
    /// Create a new App backed by the in-process registrar
    pub fn new(config: TuiConfig) -> Self {
        Self::with_registrar(config, Box::new(LocalRegistrar::new()))
    }

    /// Create a new App with a specific registration backend
    pub fn with_registrar(config: TuiConfig, registrar: Box<dyn Registrar>) -> Self {
        let state = Rc::new(RefCell::new(AppState::default()));
        let coordinator = FormCoordinator::new(LengthValidator, registrar);
        let bindings = bind_outputs(&state, coordinator.outputs());

        Self {
            state,
            coordinator,
            config,
            quit: false,
            bindings,
        }
    }

    /// Borrow the widget state for rendering
    pub fn state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The alert is modal: only its OK action is live
        if self.state.borrow().has_alert() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.state.borrow_mut().acknowledge_alert();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('s')
            && (key.modifiers.contains(SUBMIT_MODIFIER)
                || key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return self.tap_register().await;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.borrow_mut().form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.borrow_mut().form.prev_field(),
            KeyCode::Enter => {
                let focus = self.state.borrow().form.focus();
                match focus {
                    RegisterFocus::Title => self.state.borrow_mut().form.next_field(),
                    RegisterFocus::Detail => self.edit_active_field(|f| f.push_char('\n')),
                    RegisterFocus::Button => return self.tap_register().await,
                }
            }
            KeyCode::Backspace => self.edit_active_field(|f| f.pop_char()),
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.edit_active_field(|f| f.push_char(c));
            }
            _ => {}
        }

        Ok(())
    }

    /// Apply a user edit to the focused field and forward the new text
    fn edit_active_field(&mut self, edit: impl FnOnce(&mut crate::state::FormField)) {
        // Release the borrow before forwarding; the bindings write to state
        let (focus, snapshot) = {
            let mut state = self.state.borrow_mut();
            let focus = state.form.focus();
            let Some(field) = state.form.get_active_field_mut() else {
                return;
            };
            edit(field);
            (focus, field.snapshot())
        };

        match focus {
            RegisterFocus::Title => self.coordinator.title_changed(snapshot),
            RegisterFocus::Detail => self.coordinator.detail_changed(snapshot),
            RegisterFocus::Button => {}
        }
    }

    /// Register button tap; a disabled button produces no tap
    async fn tap_register(&mut self) -> Result<()> {
        if !self.state.borrow().submit_enabled {
            tracing::debug!("Register tapped while disabled");
            return Ok(());
        }
        self.coordinator.submit().await;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for stop in self.bindings.drain(..) {
            stop();
        }
    }
}

/// Bind each view model output to the widget property it drives.
///
/// Called once at setup. Each binding is an effect that runs synchronously
/// when its output changes; the returned stop functions end the bindings.
fn bind_outputs(
    state: &Rc<RefCell<AppState>>,
    outputs: &FormOutputs,
) -> Vec<Box<dyn FnOnce()>> {
    let mut bindings: Vec<Box<dyn FnOnce()>> = Vec::with_capacity(4);

    let target = Rc::clone(state);
    let title_error = outputs.title_error.clone();
    bindings.push(Box::new(effect(move || {
        target.borrow_mut().title_error = title_error.get();
    })));

    let target = Rc::clone(state);
    let detail_error = outputs.detail_error.clone();
    bindings.push(Box::new(effect(move || {
        target.borrow_mut().detail_error = detail_error.get();
    })));

    let target = Rc::clone(state);
    let submit_enabled = outputs.submit_enabled.clone();
    bindings.push(Box::new(effect(move || {
        target.borrow_mut().submit_enabled = submit_enabled.get();
    })));

    let target = Rc::clone(state);
    let registration_result = outputs.registration_result.clone();
    bindings.push(Box::new(effect(move || {
        let Some(result) = registration_result.get() else {
            return;
        };
        let mut state = target.borrow_mut();
        if result.success {
            // Programmatic clear: not forwarded as a text change
            state.form.clear_fields();
        }
        state.alert = Some(Alert::for_registration(result.success));
    })));

    bindings
}
