//! Input validation helpers

use once_cell::sync::Lazy;
use regex::Regex;

/// Permissive email shape check: local part, one @, dotted domain.
/// Deliverability is the mail server's problem, not ours.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
        .expect("invalid email regex")
});

/// Usernames: 3-32 chars, alphanumeric plus underscore and hyphen.
static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,32}$").expect("invalid username regex"));

/// Check that a string looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Check that a string is an acceptable display name
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}
