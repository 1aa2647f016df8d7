//! Contact form validation and submission.
//!
//! DESIGN
//! ======
//! Validation is pure: raw field text goes in, one verdict per field comes
//! out. All four verdicts are always recomputed together so the view never
//! mixes fresh and stale errors. Failures are returned as data, not errors.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// One-or-more non-space-non-@ chars, `@`, the same, `.`, the same.
///
/// `regex_lite` only knows ASCII `\s`, so [`is_valid_email`] rejects other
/// whitespace before matching.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Result<Regex, regex_lite::Error>> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN).inspect_err(|e| log::error!("email pattern failed to compile: {e}"))
});

/// Error returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contact field: {0}")]
pub struct ParseFieldError(pub String);

/// Fields on the contact form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

/// Second-stage check applied after the non-empty check passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rule {
    MinLength(usize),
    Email,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    fn rule(self) -> Rule {
        match self {
            Self::Name => Rule::MinLength(2),
            Self::Email => Rule::Email,
            Self::Subject => Rule::MinLength(3),
            Self::Message => Rule::MinLength(10),
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            Self::Name => "Please enter your name",
            Self::Email => "Please enter your email",
            Self::Subject => "Please enter a subject",
            Self::Message => "Please enter your message",
        }
    }

    fn rule_message(self) -> &'static str {
        match self {
            Self::Name => "Name must be at least 2 characters",
            Self::Email => "Please enter a valid email address",
            Self::Subject => "Subject must be at least 3 characters",
            Self::Message => "Message must be at least 10 characters",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseFieldError(s.to_owned()))
    }
}

/// A single raw field value as typed by the visitor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub raw_value: String,
}

/// Current contents of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Raw text of one field.
    #[must_use]
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    /// Mutable access to one field, used by input handlers.
    pub fn value_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Subject => &mut self.subject,
            FieldName::Message => &mut self.message,
        }
    }

    /// All four fields in display order.
    #[must_use]
    pub fn fields(&self) -> [FormField; 4] {
        FieldName::ALL.map(|name| FormField { name, raw_value: self.value(name).to_owned() })
    }
}

/// Pass/fail result for one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationVerdict {
    pub field: FieldName,
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl ValidationVerdict {
    fn pass(field: FieldName) -> Self {
        Self { field, valid: true, message: None }
    }

    fn fail(field: FieldName, message: &'static str) -> Self {
        Self { field, valid: false, message: Some(message) }
    }
}

/// Verdicts for every field from a single validation pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub verdicts: Vec<ValidationVerdict>,
    pub all_valid: bool,
}

impl ValidationReport {
    /// Verdict for `field`, if it was part of this pass.
    #[must_use]
    pub fn verdict(&self, field: FieldName) -> Option<&ValidationVerdict> {
        self.verdicts.iter().find(|v| v.field == field)
    }

    /// Error message for `field`, or `None` when it passed.
    #[must_use]
    pub fn message(&self, field: FieldName) -> Option<&'static str> {
        self.verdict(field).and_then(|v| v.message)
    }

    /// Failing fields with their messages, in display order.
    pub fn errors(&self) -> impl Iterator<Item = (FieldName, &'static str)> + '_ {
        self.verdicts
            .iter()
            .filter(|v| !v.valid)
            .filter_map(|v| v.message.map(|m| (v.field, m)))
    }
}

/// Accepted submission, ready to hand to whatever dispatches it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Returns whether `email` has the `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(email))
}

/// Length as a browser reports it: UTF-16 code units.
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Apply the rules for one field. The first failing rule wins.
#[must_use]
pub fn validate_field(field: &FormField) -> ValidationVerdict {
    let name = field.name;
    let trimmed = field.raw_value.trim();
    if trimmed.is_empty() {
        return ValidationVerdict::fail(name, name.empty_message());
    }
    let ok = match name.rule() {
        Rule::MinLength(min) => text_length(trimmed) >= min,
        Rule::Email => is_valid_email(trimmed),
    };
    if ok { ValidationVerdict::pass(name) } else { ValidationVerdict::fail(name, name.rule_message()) }
}

/// Validate every field of `form`.
#[must_use]
pub fn validate(form: &ContactForm) -> ValidationReport {
    let verdicts: Vec<ValidationVerdict> = form.fields().iter().map(validate_field).collect();
    let all_valid = verdicts.iter().all(|v| v.valid);
    ValidationReport { verdicts, all_valid }
}

/// Validate `form` and, if every field passes, produce the accepted record.
///
/// The record keeps values exactly as typed. No dispatch happens here.
///
/// # Errors
///
/// Returns the full [`ValidationReport`] when any field fails.
pub fn submit(form: &ContactForm) -> Result<ContactSubmission, ValidationReport> {
    let report = validate(form);
    if !report.all_valid {
        let failed: Vec<&str> = report.errors().map(|(field, _)| field.as_str()).collect();
        log::debug!("contact form rejected: {}", failed.join(", "));
        return Err(report);
    }

    let submission = ContactSubmission {
        name: form.name.clone(),
        email: form.email.clone(),
        subject: form.subject.clone(),
        message: form.message.clone(),
    };
    log::info!("contact form accepted: subject={:?}", submission.subject);
    Ok(submission)
}
