//! Field and form validation.
//!
//! Field rules are static per field name. A [`FormState`] keeps the current
//! values, the errors that are on display, and derives whether the submit
//! button is disabled from the values alone, so the button can never disagree
//! with the fields.

use std::fmt;
use thiserror::Error;
use url::Url;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const URL_MESSAGE: &str = "Enter a valid URL (for example: https://example.com)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Title,
    Link,
    Avatar,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Description,
        Field::Title,
        Field::Link,
        Field::Avatar,
    ];

    /// The input's `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Title => "title",
            Field::Link => "link",
            Field::Avatar => "avatar",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// Id of the element that shows this field's message.
    pub fn error_slot_id(self) -> String {
        format!("{}-error", self.as_str())
    }

    pub fn rule(self) -> FieldRule {
        match self {
            Field::Name => FieldRule::text(2, 40, "Name must be between 2 and 40 characters."),
            Field::Description => FieldRule::text(
                2,
                200,
                "Description must be between 2 and 200 characters.",
            ),
            Field::Title => FieldRule::text(2, 30, "Title must be between 2 and 30 characters."),
            Field::Link | Field::Avatar => FieldRule::url(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character-level constraint, the equivalent of an input's `pattern` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Latin and Cyrillic letters, spaces and hyphens.
    LettersSpacesHyphens,
}

impl Pattern {
    pub fn matches(self, value: &str) -> bool {
        match self {
            Pattern::LettersSpacesHyphens => value.chars().all(|c| {
                c.is_ascii_alphabetic()
                    || matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
                    || c == ' '
                    || c == '-'
            }),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Pattern::LettersSpacesHyphens => {
                "Only Latin or Cyrillic letters, hyphens and spaces are allowed."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text {
        min_len: usize,
        max_len: usize,
        message: &'static str,
    },
    Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub required: bool,
    pub pattern: Option<Pattern>,
    pub kind: FieldKind,
}

impl FieldRule {
    pub fn text(min_len: usize, max_len: usize, message: &'static str) -> Self {
        Self {
            required: true,
            pattern: None,
            kind: FieldKind::Text {
                min_len,
                max_len,
                message,
            },
        }
    }

    pub fn url() -> Self {
        Self {
            required: true,
            pattern: None,
            kind: FieldKind::Url,
        }
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// First failing check for a raw input value, in display order.
    pub fn check(&self, field: Field, raw: &str) -> Result<(), ValidationError> {
        let value = raw.trim();
        let fail = |message: &str| -> Result<(), ValidationError> {
            Err(ValidationError::new(field, message))
        };

        if value.is_empty() {
            return if self.required { fail(REQUIRED_MESSAGE) } else { Ok(()) };
        }

        if let Some(pattern) = self.pattern {
            if !pattern.matches(value) {
                return fail(pattern.message());
            }
        }

        match &self.kind {
            FieldKind::Text {
                min_len,
                max_len,
                message,
            } => {
                let len = value.chars().count();
                if len < *min_len || len > *max_len {
                    return fail(message);
                }
            }
            FieldKind::Url => {
                if !is_valid_url(value) {
                    return fail(URL_MESSAGE);
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationState {
    pub is_valid: bool,
    pub message: String,
}

impl From<Result<(), ValidationError>> for ValidationState {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: true,
                message: String::new(),
            },
            Err(err) => Self {
                is_valid: false,
                message: err.message,
            },
        }
    }
}

/// Validates `value` against the built-in rule for `field`.
pub fn validate(field: Field, value: &str) -> ValidationState {
    field.rule().check(field, value).into()
}

/// Absolute http(s) URL whose host has a dot but does not start or end with one.
pub fn is_valid_url(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let Ok(parsed) = Url::parse(value) else {
        return false;
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    match parsed.host_str() {
        Some(host) => {
            !host.is_empty() && host.contains('.') && !host.starts_with('.') && !host.ends_with('.')
        }
        None => false,
    }
}

/// CSS classes the view applies for validation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSettings {
    pub inactive_button_class: String,
    pub input_error_class: String,
    pub error_class: String,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            inactive_button_class: "popup__button_disabled".to_string(),
            input_error_class: "popup__input_type_error".to_string(),
            error_class: "popup__error_visible".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Working,
}

#[derive(Debug, Clone, PartialEq)]
struct FieldState {
    field: Field,
    rule: FieldRule,
    value: String,
    shown_error: Option<ValidationError>,
}

impl FieldState {
    fn check(&self) -> Result<(), ValidationError> {
        self.rule.check(self.field, &self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    fields: Vec<FieldState>,
    submit: SubmitState,
    idle_label: &'static str,
    working_label: &'static str,
}

impl FormState {
    pub fn new(fields: &[Field]) -> Self {
        Self::with_rules(fields.iter().map(|field| (*field, field.rule())))
    }

    pub fn with_rules(rules: impl IntoIterator<Item = (Field, FieldRule)>) -> Self {
        Self {
            fields: rules
                .into_iter()
                .map(|(field, rule)| FieldState {
                    field,
                    rule,
                    value: String::new(),
                    shown_error: None,
                })
                .collect(),
            submit: SubmitState::Idle,
            idle_label: "Save",
            working_label: "Saving...",
        }
    }

    pub fn with_labels(mut self, idle: &'static str, working: &'static str) -> Self {
        self.idle_label = idle;
        self.working_label = working;
        self
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|state| state.field == field)
    }

    fn field(&self, field: Field) -> Option<&FieldState> {
        self.fields.iter().find(|state| state.field == field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().map(|state| state.field)
    }

    /// Handles a value change: validates the field and updates its error slot.
    pub fn input(&mut self, field: Field, value: impl Into<String>) -> Option<&ValidationError> {
        let state = self.field_mut(field)?;
        state.value = value.into();
        state.shown_error = state.check().err();
        state.shown_error.as_ref()
    }

    /// Sets a value without showing its error, as when a popup is prefilled.
    pub fn prefill(&mut self, field: Field, value: impl Into<String>) {
        if let Some(state) = self.field_mut(field) {
            state.value = value.into();
            state.shown_error = None;
        }
    }

    pub fn raw_value(&self, field: Field) -> &str {
        self.field(field).map(|state| state.value.as_str()).unwrap_or("")
    }

    pub fn value(&self, field: Field) -> &str {
        self.raw_value(field).trim()
    }

    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.field(field).and_then(|state| state.shown_error.as_ref())
    }

    pub fn has_shown_errors(&self) -> bool {
        self.fields.iter().any(|state| state.shown_error.is_some())
    }

    pub fn has_invalid_input(&self) -> bool {
        self.fields.iter().any(|state| state.check().is_err())
    }

    pub fn is_valid(&self) -> bool {
        !self.has_invalid_input()
    }

    pub fn is_working(&self) -> bool {
        self.submit == SubmitState::Working
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.is_working() || self.has_invalid_input()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.submit {
            SubmitState::Idle => self.idle_label,
            SubmitState::Working => self.working_label,
        }
    }

    /// Moves to `Working` if the form may be submitted right now.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submit_disabled() {
            return false;
        }
        self.submit = SubmitState::Working;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submit = SubmitState::Idle;
    }

    pub fn clear_errors(&mut self) {
        for state in &mut self.fields {
            state.shown_error = None;
        }
    }

    pub fn reset(&mut self) {
        for state in &mut self.fields {
            state.value.clear();
            state.shown_error = None;
        }
    }
}
