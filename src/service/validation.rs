//! Input validation predicates for user registration.

use std::sync::LazyLock;

use regex::Regex;

/// Message returned whenever a password fails the policy.
pub const PASSWORD_POLICY_MESSAGE: &str = "password is not secure: it must be at least 6 \
     characters long and contain at least one letter, one digit and one symbol";

/// Symbols the password policy accepts.
const PASSWORD_SYMBOLS: [char; 7] = ['@', '$', '!', '%', '*', '?', '&'];

/// Full-match shape `local@domain.tld`: leading letter, an `@`, and a
/// dot inside the domain with at least one character on each side.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z].*@.+\..+$").expect("email pattern is valid"));

/// Returns `true` when `email` has the accepted `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns `true` when `password` satisfies the policy: minimum length 6,
/// at least one letter, one digit and one symbol, drawn only from the
/// allowed alphabet (ASCII letters, digits, `@$!%*?&`).
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 6
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(&c))
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_plain_address() {
        assert!(is_valid_email("vespasoft@gmail.com"));
    }

    #[test]
    fn rejects_empty_and_domainless_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("vespaso"));
    }

    #[test]
    fn rejects_address_without_tld_dot() {
        assert!(!is_valid_email("someone@localhost"));
    }

    #[test]
    fn rejects_address_with_leading_digit() {
        assert!(!is_valid_email("1user@example.com"));
    }

    #[test]
    fn accepts_a_policy_conforming_password() {
        assert!(is_valid_password("1m4*5Aa78@"));
    }

    #[test]
    fn rejects_digits_only() {
        assert!(!is_valid_password("123456"));
    }

    #[test]
    fn rejects_too_short() {
        assert!(!is_valid_password("1a@"));
    }

    #[test]
    fn rejects_missing_symbol() {
        assert!(!is_valid_password("abc123"));
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        // '#' is not in the allowed symbol set.
        assert!(!is_valid_password("abc12#"));
    }
}
