use std::fmt;

use thiserror::Error;
use validator::ValidateEmail;

pub const NAME_MAX_LENGTH: usize = 20;
pub const AGE_MIN: i32 = 1;
pub const AGE_MAX: i32 = 100;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Read access to the fields the validation rules inspect.
///
/// Implemented by every inbound customer view so that creation and update
/// payloads share one rule set.
pub trait CustomerFields {
    fn name(&self) -> &str;
    fn age(&self) -> Option<i64>;
    fn email(&self) -> Option<&str>;
    fn phone(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    Name,
    Age,
    Email,
    Phone,
}

impl CustomerField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerField::Name => "name",
            CustomerField::Age => "age",
            CustomerField::Email => "email",
            CustomerField::Phone => "phone",
        }
    }
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViolationReason {
    #[error("is required")]
    Required,

    #[error("has a maximum of {max} characters")]
    TooLong { max: usize },

    #[error("must be between {min} and {max}")]
    OutOfRange { min: i32, max: i32 },

    #[error("is not a valid email address")]
    InvalidEmail,

    #[error("is not a valid phone number")]
    InvalidPhone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: CustomerField,
    pub reason: ViolationReason,
}

impl FieldViolation {
    pub fn new(field: CustomerField, reason: ViolationReason) -> Self {
        Self { field, reason }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// A non-empty set of field violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    /// Returns `None` when there is nothing to report.
    pub fn from_violations(violations: Vec<FieldViolation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self(violations))
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn has_field(&self, field: CustomerField) -> bool {
        self.0.iter().any(|violation| violation.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

pub type ValidationResult = Result<(), ValidationErrors>;

/// Runs every customer rule against `candidate` and collects all violations.
pub fn validate<T: CustomerFields + ?Sized>(candidate: &T) -> ValidationResult {
    let violations: Vec<FieldViolation> = [
        validate_name(candidate.name()),
        validate_age(candidate.age()),
        validate_email(candidate.email()),
        validate_phone(candidate.phone()),
    ]
    .into_iter()
    .flatten()
    .collect();

    match ValidationErrors::from_violations(violations) {
        Some(errors) => Err(errors),
        None => Ok(()),
    }
}

pub fn validate_name(name: &str) -> Option<FieldViolation> {
    if name.trim().is_empty() {
        return Some(FieldViolation::new(CustomerField::Name, ViolationReason::Required));
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Some(FieldViolation::new(
            CustomerField::Name,
            ViolationReason::TooLong { max: NAME_MAX_LENGTH },
        ));
    }
    None
}

pub fn validate_age(age: Option<i64>) -> Option<FieldViolation> {
    match age {
        Some(age) if !(i64::from(AGE_MIN)..=i64::from(AGE_MAX)).contains(&age) => Some(FieldViolation::new(
            CustomerField::Age,
            ViolationReason::OutOfRange {
                min: AGE_MIN,
                max: AGE_MAX,
            },
        )),
        _ => None,
    }
}

pub fn validate_email(email: Option<&str>) -> Option<FieldViolation> {
    let email = email.filter(|value| !value.trim().is_empty())?;
    if email.to_owned().validate_email() {
        None
    } else {
        Some(FieldViolation::new(CustomerField::Email, ViolationReason::InvalidEmail))
    }
}

pub fn validate_phone(phone: Option<&str>) -> Option<FieldViolation> {
    let phone = phone.filter(|value| !value.trim().is_empty())?;
    if is_phone_number(phone) {
        None
    } else {
        Some(FieldViolation::new(CustomerField::Phone, ViolationReason::InvalidPhone))
    }
}

/// Optional leading `+`, then digits separated by spaces, `-`, `.` or a
/// single level of parentheses.
fn is_phone_number(value: &str) -> bool {
    let body = value.strip_prefix('+').unwrap_or(value);
    let mut digits = 0usize;
    let mut open_paren = false;

    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' => {}
            '(' if !open_paren => open_paren = true,
            ')' if open_paren => open_paren = false,
            _ => return false,
        }
    }

    !open_paren && (1..=PHONE_MAX_DIGITS).contains(&digits)
}
