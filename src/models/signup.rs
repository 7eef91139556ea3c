use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LENGTH: usize = 11;

lazy_static::lazy_static! {
    // Loose on purpose: local part, '@', domain, 2-4 letter suffix
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,4}$").unwrap();
}

/// One of the four checks a password must pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequirement {
    HasUppercase,
    HasLowercase,
    /// Only 1-9 count, a password whose only digits are zeros fails this check
    HasDigit,
    MinLength,
}

impl PasswordRequirement {
    pub fn all() -> [PasswordRequirement; 4] {
        [
            PasswordRequirement::HasUppercase,
            PasswordRequirement::HasLowercase,
            PasswordRequirement::HasDigit,
            PasswordRequirement::MinLength,
        ]
    }

    pub fn is_met(self, password: &str) -> bool {
        match self {
            PasswordRequirement::HasUppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRequirement::HasLowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRequirement::HasDigit => password.chars().any(|c| ('1'..='9').contains(&c)),
            // Counted in UTF-16 units, the way browsers measure input length
            PasswordRequirement::MinLength => password.encode_utf16().count() >= MIN_PASSWORD_LENGTH,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordRequirement::HasUppercase => "contient une majuscule",
            PasswordRequirement::HasLowercase => "contient une minuscule",
            PasswordRequirement::HasDigit => "contient un chiffre",
            PasswordRequirement::MinLength => "contient au moins 11 caractères",
        }
    }
}

pub fn password_is_valid(password: &str) -> bool {
    PasswordRequirement::all()
        .into_iter()
        .all(|requirement| requirement.is_met(password))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DisplayName,
    Email,
    Password,
}

impl Field {
    pub fn all() -> [Field; 3] {
        [Field::DisplayName, Field::Email, Field::Password]
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::DisplayName => "display_name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Checks a single value against this field's rules
    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        if value.is_empty() {
            return Err(FieldError::Required);
        }
        let valid = match self {
            Field::DisplayName => true,
            Field::Email => is_valid_email(value),
            Field::Password => password_is_valid(value),
        };
        if valid {
            Ok(())
        } else {
            Err(FieldError::Invalid)
        }
    }

    /// Inline message shown under an invalid input
    pub fn error_message(self, error: FieldError) -> &'static str {
        match (self, error) {
            (Field::DisplayName, _) => "Le pseudonyme doit être renseigné !",
            (Field::Email, FieldError::Required) => "L'adresse e-mail doit être renseignée !",
            (Field::Email, FieldError::Invalid) => "L'adresse e-mail n'est pas valide !",
            (Field::Password, _) => "Les conditions ci-dessous doivent être respectées !",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    Invalid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupFields {
    pub display_name: String,
    pub email: String,
    pub password: String,
}

impl SignupFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::DisplayName => &self.display_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::DisplayName => self.display_name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    /// First failing field, if any
    pub fn first_error(&self) -> Option<(Field, FieldError)> {
        Field::all()
            .into_iter()
            .find_map(|field| field.validate(self.get(field)).err().map(|e| (field, e)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    display_name: Option<FieldError>,
    email: Option<FieldError>,
    password: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::DisplayName => self.display_name,
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    fn set(&mut self, field: Field, error: Option<FieldError>) {
        match field {
            Field::DisplayName => self.display_name = error,
            Field::Email => self.email = error,
            Field::Password => self.password = error,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::all().into_iter().all(|field| self.get(field).is_none())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
}

/// Everything the signup form owns for one session.
///
/// Each user event maps to one method; the view re-renders from the
/// resulting state. Field values survive failed submissions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupFormState {
    pub fields: SignupFields,
    pub errors: FieldErrors,
    pub submission: SubmissionState,
    pub error_message: Option<String>,
}

impl SignupFormState {
    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.validate_field(field);
    }

    pub fn validate_field(&mut self, field: Field) -> bool {
        let error = field.validate(self.fields.get(field)).err();
        self.errors.set(field, error);
        error.is_none()
    }

    pub fn validate_all(&mut self) -> bool {
        Field::all()
            .into_iter()
            .fold(true, |valid, field| self.validate_field(field) && valid)
    }

    pub fn is_sending(&self) -> bool {
        self.submission == SubmissionState::Sending
    }

    pub fn requirement_met(&self, requirement: PasswordRequirement) -> bool {
        requirement.is_met(&self.fields.password)
    }

    /// Gate in front of the account creation call. Returns the values to
    /// send, or `None` when a field is invalid or a request is in flight.
    pub fn begin_submit(&mut self) -> Option<SignupFields> {
        if self.is_sending() || !self.validate_all() {
            return None;
        }
        self.submission = SubmissionState::Sending;
        self.error_message = None;
        Some(self.fields.clone())
    }

    pub fn finish_success(&mut self) {
        self.submission = SubmissionState::Idle;
    }

    pub fn finish_failure(&mut self, message: String) {
        self.error_message = Some(message);
        self.submission = SubmissionState::Idle;
    }
}
