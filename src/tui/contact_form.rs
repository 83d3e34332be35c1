//! Contact form editor with client-side validation and a simulated
//! submission.
//!
//! There is no network backend: a valid submission waits a fixed
//! latency, then reports success and clears the form. Validation runs
//! entirely on the trimmed field values, and the submit control is
//! disabled while a submission is in flight.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use regex::Regex;

/// Simulated network latency between submit and the success report.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(2000);
/// Validation message when any field is blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
/// Validation message for a malformed email address.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
/// Message reported when the simulated submission completes.
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Focusable controls of the form, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Sender name input.
    Name,
    /// Sender email input.
    Email,
    /// Subject line input.
    Subject,
    /// Message body input.
    Message,
    /// The submit button.
    Submit,
}

impl FormField {
    /// Next control in traversal order, wrapping after the button.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::Submit,
            Self::Submit => Self::Name,
        }
    }

    /// Previous control in traversal order, wrapping before the first.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Submit,
            Self::Email => Self::Name,
            Self::Subject => Self::Email,
            Self::Message => Self::Subject,
            Self::Submit => Self::Message,
        }
    }

    /// Display label for the control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
            Self::Submit => "Send Message",
        }
    }
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed; the simulated submission is now in flight.
    Started,
    /// Validation failed with this message.
    Invalid(&'static str),
    /// A submission is already in flight; the attempt was ignored.
    AlreadyPending,
}

/// What a key press inside the form editor asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Key handled; stay in the editor.
    Continue,
    /// Leave the editor without submitting.
    Exit,
    /// Attempt a submission.
    Submit,
}

/// Contact form state: field values, focus, and in-flight submission.
#[derive(Debug, Clone)]
pub struct ContactForm {
    /// Sender name value.
    pub name: String,
    /// Sender email value.
    pub email: String,
    /// Subject value.
    pub subject: String,
    /// Message body value.
    pub message: String,
    /// Currently focused control.
    pub active_field: FormField,
    /// Whether keystrokes are routed into the form.
    pub editing: bool,
    pending: Option<Duration>,
    email_pattern: Regex,
}

impl ContactForm {
    /// Creates an empty form focused on the name field.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            active_field: FormField::Name,
            editing: false,
            pending: None,
            email_pattern: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap(),
        }
    }

    /// Routes keystrokes into the form until the editor is left.
    pub fn begin_editing(&mut self) {
        self.editing = true;
    }

    /// Stops routing keystrokes into the form.
    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    /// Mutable access to the focused text field; `None` on the button.
    pub fn get_active_field_mut(&mut self) -> Option<&mut String> {
        match self.active_field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Subject => Some(&mut self.subject),
            FormField::Message => Some(&mut self.message),
            FormField::Submit => None,
        }
    }

    /// Value of a text field; empty for the button.
    #[must_use]
    pub fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
            FormField::Submit => "",
        }
    }

    /// Checks the trimmed field values: all four must be non-empty, and
    /// the email must look like an address. The blank check runs first,
    /// so a blank email reports the missing-fields message.
    pub fn validate(&self) -> Result<(), &'static str> {
        let all_filled = [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty());
        if !all_filled {
            return Err(MISSING_FIELDS_MESSAGE);
        }
        if !self.email_pattern.is_match(self.email.trim()) {
            return Err(INVALID_EMAIL_MESSAGE);
        }
        Ok(())
    }

    /// Attempts a submission. Invalid input reports why, a duplicate
    /// attempt while one is in flight is ignored, and a valid attempt
    /// starts the latency countdown.
    pub fn submit(&mut self) -> SubmitAttempt {
        if self.pending.is_some() {
            return SubmitAttempt::AlreadyPending;
        }
        match self.validate() {
            Err(message) => SubmitAttempt::Invalid(message),
            Ok(()) => {
                self.pending = Some(Duration::ZERO);
                SubmitAttempt::Started
            }
        }
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Label for the submit control, swapped while in flight.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.pending.is_some() {
            "⧗ Sending..."
        } else {
            FormField::Submit.label()
        }
    }

    /// Advances an in-flight submission by `dt`. Returns `true` exactly
    /// once, when the submission completes; completion clears every
    /// field and returns focus to the name input.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(elapsed) = self.pending.as_mut() else {
            return false;
        };
        *elapsed += dt;
        if *elapsed >= SUBMIT_LATENCY {
            self.pending = None;
            self.name.clear();
            self.email.clear();
            self.subject.clear();
            self.message.clear();
            self.active_field = FormField::Name;
            true
        } else {
            false
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles a key press while the form editor is active.
pub fn handle_form_input(form: &mut ContactForm, key: KeyEvent) -> FormAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => FormAction::Submit,
            _ => FormAction::Continue,
        };
    }
    match key.code {
        KeyCode::Esc => FormAction::Exit,
        KeyCode::Tab | KeyCode::Down => {
            form.active_field = form.active_field.next();
            FormAction::Continue
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.active_field = form.active_field.previous();
            FormAction::Continue
        }
        KeyCode::Enter => {
            if form.active_field == FormField::Submit {
                FormAction::Submit
            } else {
                form.active_field = form.active_field.next();
                FormAction::Continue
            }
        }
        KeyCode::Backspace => {
            if let Some(value) = form.get_active_field_mut() {
                value.pop();
            }
            FormAction::Continue
        }
        KeyCode::Char(c) => {
            if let Some(value) = form.get_active_field_mut() {
                value.push(c);
            }
            FormAction::Continue
        }
        _ => FormAction::Continue,
    }
}
