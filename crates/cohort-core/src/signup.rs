//! Student sign-up form.

use serde::Serialize;

use crate::errors::CoreError;

/// Fields collected when a student registers.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    /// School registration number.
    pub registration: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// The student row written after the account is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewStudent {
    pub name: String,
    pub registration: String,
    pub email: String,
}

impl SignUpForm {
    /// Check that every field is filled in and both passwords match.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] describing the first failed check.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            &self.name,
            &self.registration,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(CoreError::Validation("please fill in all fields".into()));
        }
        if self.password != self.confirm_password {
            return Err(CoreError::Validation("passwords do not match".into()));
        }
        Ok(())
    }

    /// The student row for this form, with surrounding whitespace removed.
    #[must_use]
    pub fn student(&self) -> NewStudent {
        NewStudent {
            name: self.name.trim().to_string(),
            registration: self.registration.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}
