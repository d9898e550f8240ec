pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("Password is too long")]
    TooLong,
    #[error("Password must be at least 8 characters long")]
    TooShort,
    #[error("Password contains invalid characters")]
    InvalidCharacters,
    #[error("Password must contain Latin letters and digits")]
    MissingLetterOrDigit,
}

/// Checks the password policy of the gateway before anything is sent.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    let len = password.chars().count();
    if len > PASSWORD_MAX_LEN {
        return Err(PasswordError::TooLong);
    }
    if len < PASSWORD_MIN_LEN {
        return Err(PasswordError::TooShort);
    }

    let mut has_letter = false;
    let mut has_digit = false;
    for c in password.chars() {
        if !c.is_ascii() {
            return Err(PasswordError::InvalidCharacters);
        }
        has_letter |= c.is_ascii_alphabetic();
        has_digit |= c.is_ascii_digit();
    }

    if !has_letter || !has_digit {
        return Err(PasswordError::MissingLetterOrDigit);
    }
    Ok(())
}
