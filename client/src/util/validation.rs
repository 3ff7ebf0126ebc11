//! Form validation for the profile screen.
//!
//! Pure functions so page components stay thin and the rules are testable
//! without a browser. Messages are user-facing and shown under the field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const MSG_NAME_TOO_SHORT: &str = "Nome deve ter pelo menos 2 caracteres";
pub const MSG_EMAIL_INVALID: &str = "Email inválido";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Senha deve ter pelo menos 8 caracteres";
pub const MSG_PASSWORD_MISMATCH: &str = "As senhas não conferem";

const MIN_NAME_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 8;

/// Per-field errors for the profile form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl ProfileErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Per-field errors for the new-password form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordErrors {
    pub password: Option<&'static str>,
    pub confirm: Option<&'static str>,
}

impl PasswordErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.confirm.is_none()
    }
}

/// Whether `email` looks like a deliverable address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Validate the email step of the password flow.
///
/// # Errors
///
/// Returns the field message when the email is malformed.
pub fn validate_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if is_valid_email(email) { Ok(email.to_owned()) } else { Err(MSG_EMAIL_INVALID) }
}

/// Validate the profile form fields.
#[must_use]
pub fn validate_profile(name: &str, email: &str) -> ProfileErrors {
    ProfileErrors {
        name: (name.chars().count() < MIN_NAME_CHARS).then_some(MSG_NAME_TOO_SHORT),
        email: validate_email(email).err(),
    }
}

/// Validate the new-password form. The mismatch error belongs to the
/// confirmation field.
#[must_use]
pub fn validate_new_password(password: &str, confirm: &str) -> PasswordErrors {
    PasswordErrors {
        password: (password.chars().count() < MIN_PASSWORD_CHARS).then_some(MSG_PASSWORD_TOO_SHORT),
        confirm: (password != confirm).then_some(MSG_PASSWORD_MISMATCH),
    }
}
