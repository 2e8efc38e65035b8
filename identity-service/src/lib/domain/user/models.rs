use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::FullNameError;
use crate::domain::user::errors::PhoneNumberError;
use crate::domain::user::errors::UserError;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9]{8,15}$").unwrap();
}

/// Full name value type
///
/// Trimmed of surrounding whitespace; 4 to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    const MIN_LENGTH: usize = 4;
    const MAX_LENGTH: usize = 100;

    /// Create a new valid full name.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 4 characters after trimming
    /// * `TooLong` - More than 100 characters after trimming
    pub fn new(full_name: String) -> Result<Self, FullNameError> {
        let trimmed = full_name.trim();
        let length = trimmed.chars().count();

        if length < Self::MIN_LENGTH {
            Err(FullNameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(FullNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value type
///
/// Validated against a `local-part@domain.tld` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Value does not match the expected shape
    pub fn new(email: String) -> Result<Self, EmailError> {
        if EMAIL_RE.is_match(&email) {
            Ok(Self(email))
        } else {
            Err(EmailError::InvalidFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the `@`, used to derive the username at creation.
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or_default()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Phone number value type
///
/// An optional leading `+` followed by 8 to 15 digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new validated phone number.
    ///
    /// # Errors
    /// * `InvalidFormat` - Value does not match the expected shape
    pub fn new(phone_number: String) -> Result<Self, PhoneNumberError> {
        if PHONE_RE.is_match(&phone_number) {
            Ok(Self(phone_number))
        } else {
            Err(PhoneNumberError::InvalidFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Registration input.
///
/// Construction runs the validation pipeline in a fixed order (full name,
/// email, phone number) and stops at the first violated rule, so only that
/// rule's message surfaces. A value of this type is always fully validated.
#[derive(Debug, Clone)]
pub struct UserRegistration {
    full_name: FullName,
    email: EmailAddress,
    password: Option<String>,
    phone_number: PhoneNumber,
}

impl UserRegistration {
    /// Validate raw registration input.
    ///
    /// # Arguments
    /// * `full_name` - Raw full name
    /// * `email` - Raw email address
    /// * `password` - Plaintext password; `None` means no credential is set
    /// * `phone_number` - Raw phone number
    ///
    /// # Errors
    /// The first violated rule, as `InvalidFullName`, `InvalidEmail` or
    /// `InvalidPhoneNumber`
    pub fn new(
        full_name: String,
        email: String,
        password: Option<String>,
        phone_number: String,
    ) -> Result<Self, UserError> {
        let full_name = FullName::new(full_name)?;
        let email = EmailAddress::new(email)?;
        let phone_number = PhoneNumber::new(phone_number)?;

        Ok(Self {
            full_name,
            email,
            password,
            phone_number,
        })
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }
}

/// A registered user as returned by the store.
///
/// There is no password field on this type, so credential material cannot
/// escape through it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Login projection: the stored credential of an eligible account.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub user_id: i32,
    /// `None` when the account was registered without a password.
    pub password_hash: Option<String>,
}

/// Profile projection returned to the account owner.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
