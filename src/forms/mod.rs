pub mod fields;
pub mod login;
pub mod register;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::strength::StrengthResult;

/// A single failed rule, tied to the form field that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Violations of one form submission, grouped per field.
///
/// Fields keep the order in which they were recorded, which is the order
/// the screen declares them in. Serializes as a JSON object
/// `{ "field": ["message", ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: Vec<(&'static str, Vec<String>)>,
}

pub type FormResult<T> = Result<T, FormErrors>;

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with at least one violation.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field, vec![message])),
        }
    }

    /// Records the outcome of a field validator and hands back the cleaned
    /// value when the field passed.
    pub fn collect<T>(&mut self, field: &'static str, outcome: Result<T, Vec<String>>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(messages) => {
                for message in messages {
                    self.add(field, message);
                }
                None
            }
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    /// The message shown inline next to `field`: its first violated rule.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.messages(field).first().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn violations(&self) -> impl Iterator<Item = FieldViolation> + '_ {
        self.entries.iter().flat_map(|(field, messages)| {
            let field = *field;
            messages.iter().map(move |message| FieldViolation {
                field,
                message: message.clone(),
            })
        })
    }

    pub(crate) fn into_result<T>(self, value: Option<T>) -> FormResult<T> {
        match value {
            Some(value) if self.is_empty() => Ok(value),
            _ => Err(self),
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for violation in self.violations() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for FormErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

/// Result of re-validating a form after an input changed. `valid` is what
/// enables the submit button.
#[derive(Debug, Clone, Serialize)]
pub struct FormFeedback {
    pub valid: bool,
    pub errors: FormErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<StrengthResult>,
}

impl FormFeedback {
    pub fn from_result<T>(result: FormResult<T>) -> Self {
        let errors = result.err().unwrap_or_default();
        Self {
            valid: errors.is_empty(),
            errors,
            strength: None,
        }
    }

    pub fn with_strength(mut self, strength: StrengthResult) -> Self {
        self.strength = Some(strength);
        self
    }

    /// The submit button is live only for a valid form with no submission
    /// in flight.
    pub fn can_submit(&self, submitting: bool) -> bool {
        self.valid && !submitting
    }
}

/// A pure check paired with the message reported when it fails.
#[derive(Clone, Copy)]
pub(crate) struct Rule {
    check: fn(&str) -> bool,
    message: &'static str,
}

impl Rule {
    pub(crate) const fn new(check: fn(&str) -> bool, message: &'static str) -> Self {
        Self { check, message }
    }
}

/// Runs every rule against `value` and returns the messages of the ones
/// that failed, in rule order.
pub(crate) fn failed_rules(value: &str, rules: &[Rule]) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| !(rule.check)(value))
        .map(|rule| rule.message.to_string())
        .collect()
}
