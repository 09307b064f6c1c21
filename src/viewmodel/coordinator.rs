//! Form coordinator
//!
//! Owns the input signals fed by the form view and the derived outputs the
//! view binds to. Inputs start `Untouched`, so nothing is validated until the
//! user edits a field. Every output for an input is settled before the input
//! method returns.

use crate::model::{ValidationOutcome, Validator};
use crate::registrar::{Registrar, Registration};
use spark_signals::{derived, flush_sync, signal, Derived, Signal};
use std::cell::Cell;
use std::rc::Rc;

/// State of one field's input stream
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldInput {
    /// No user edit since the form opened or was reset
    #[default]
    Untouched,
    /// Latest text snapshot from the user
    Edited(Option<String>),
}

impl FieldInput {
    /// Latest text, empty when untouched or absent
    pub fn text(&self) -> &str {
        match self {
            FieldInput::Edited(Some(text)) => text,
            _ => "",
        }
    }
}

/// One registration outcome.
///
/// `seq` makes each emission distinct so two successes in a row both fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationResult {
    pub seq: u64,
    pub success: bool,
}

/// A derivation with its compute closure boxed, so it can sit in a struct
pub type Output<T> = Derived<T>;

/// Streams the view writes into
#[derive(Clone)]
pub struct FormInputs {
    pub title_text: Signal<FieldInput>,
    pub detail_text: Signal<FieldInput>,
}

/// Streams the view binds to
#[derive(Clone)]
pub struct FormOutputs {
    /// Message under the title field, empty when valid
    pub title_error: Output<String>,
    /// Message under the detail field, empty when valid
    pub detail_error: Output<String>,
    /// Whether the register button accepts taps
    pub submit_enabled: Output<bool>,
    /// Latest registration outcome, `None` before the first submit
    pub registration_result: Signal<Option<RegistrationResult>>,
}

fn error_text(outcome: Option<ValidationOutcome>) -> String {
    match outcome {
        Some(Err(err)) => err.to_string(),
        Some(Ok(())) | None => String::new(),
    }
}

/// Which field an input stream belongs to
#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    Detail,
}

/// Latest outcome of one field; `None` while the input is untouched
fn latest_outcome(
    field: Field,
    input: &Signal<FieldInput>,
    validator: &Rc<dyn Validator>,
) -> Output<Option<ValidationOutcome>> {
    let input = input.clone();
    let validator = Rc::clone(validator);
    derived(Box::new(move || match input.get() {
        FieldInput::Untouched => None,
        FieldInput::Edited(text) => {
            let outcome = match field {
                Field::Title => validator.validate_title(&text),
                Field::Detail => validator.validate_detail(&text),
            };
            tracing::debug!(?field, ?outcome, "Validated field");
            Some(outcome)
        }
    }) as Box<dyn Fn() -> Option<ValidationOutcome>>)
}

pub struct FormCoordinator {
    inputs: FormInputs,
    outputs: FormOutputs,
    registrar: Box<dyn Registrar>,
    submissions: Cell<u64>,
}

impl FormCoordinator {
    /// Build the input signals and derive the outputs from them
    pub fn new(validator: impl Validator + 'static, registrar: Box<dyn Registrar>) -> Self {
        let validator: Rc<dyn Validator> = Rc::new(validator);
        let inputs = FormInputs {
            title_text: signal(FieldInput::Untouched),
            detail_text: signal(FieldInput::Untouched),
        };

        let title_outcome = latest_outcome(Field::Title, &inputs.title_text, &validator);
        let detail_outcome = latest_outcome(Field::Detail, &inputs.detail_text, &validator);

        let title_error = {
            let outcome = title_outcome.clone();
            derived(Box::new(move || error_text(outcome.get())) as Box<dyn Fn() -> String>)
        };
        let detail_error = {
            let outcome = detail_outcome.clone();
            derived(Box::new(move || error_text(outcome.get())) as Box<dyn Fn() -> String>)
        };
        let submit_enabled = derived(Box::new(move || {
            matches!(
                (title_outcome.get(), detail_outcome.get()),
                (Some(Ok(())), Some(Ok(())))
            )
        }) as Box<dyn Fn() -> bool>);

        Self {
            inputs,
            outputs: FormOutputs {
                title_error,
                detail_error,
                submit_enabled,
                registration_result: signal(None),
            },
            registrar,
            submissions: Cell::new(0),
        }
    }

    pub fn outputs(&self) -> &FormOutputs {
        &self.outputs
    }

    /// Forward a title text snapshot
    pub fn title_changed(&self, text: Option<String>) {
        self.inputs.title_text.set(FieldInput::Edited(text));
        flush_sync();
    }

    /// Forward a detail text snapshot
    pub fn detail_changed(&self, text: Option<String>) {
        self.inputs.detail_text.set(FieldInput::Edited(text));
        flush_sync();
    }

    /// Handle a register tap.
    ///
    /// Emits the outcome on `registration_result`; a backend error counts as
    /// a failed registration. A successful registration resets the form.
    pub async fn submit(&self) -> bool {
        let registration = Registration::new(
            self.inputs.title_text.get().text().trim(),
            self.inputs.detail_text.get().text().trim(),
        );

        let success = match self.registrar.register(&registration).await {
            Ok(success) => success,
            Err(err) => {
                tracing::warn!("Registration failed: {err:#}");
                false
            }
        };
        tracing::info!(success, "Registration finished");

        let seq = self.submissions.get() + 1;
        self.submissions.set(seq);
        self.outputs
            .registration_result
            .set(Some(RegistrationResult { seq, success }));
        flush_sync();

        if success {
            self.reset();
        }
        success
    }

    /// Return the inputs to `Untouched`, which clears every derived output
    pub fn reset(&self) {
        self.inputs.title_text.set(FieldInput::Untouched);
        self.inputs.detail_text.set(FieldInput::Untouched);
        flush_sync();
    }
}
