//! Form Validation Helpers
//!
//! Pure input checks and derivations shared by the auth and settings forms.

pub const MIN_PASSWORD_LEN: usize = 6;

/// Identity derived from the single credentials field on the register form.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub username: String,
    pub email: Option<String>,
}

/// An email-shaped credentials string is stored verbatim as the email and
/// the username is the part before the first `@`. Anything else is a plain
/// username with no email.
pub fn derive_identity(credentials: &str) -> Identity {
    let trimmed = credentials.trim();
    match trimmed.find('@') {
        Some(at) => Identity {
            username: trimmed[..at].to_string(),
            email: Some(trimmed.to_string()),
        },
        None => Identity {
            username: trimmed.to_string(),
            email: None,
        },
    }
}

pub fn looks_like_email(value: &str) -> bool {
    value.contains('@')
}

pub fn check_new_password(password: &str, confirm: &str) -> Result<(), String> {
    if password != confirm {
        return Err("Passwords do not match.".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters long.".to_string());
    }
    Ok(())
}

/// Date and time inputs combined into the backend's stored string form.
pub fn combine_date_time(date: &str, time: &str) -> String {
    if date.is_empty() {
        String::new()
    } else if time.is_empty() {
        date.to_string()
    } else {
        format!("{date}T{time}")
    }
}

/// Inverse of [`combine_date_time`], for prefilling the edit modal.
pub fn split_date_time(raw: &str) -> (String, String) {
    match raw.split_once('T') {
        Some((date, time)) => (date.to_string(), time.to_string()),
        None => (raw.to_string(), String::new()),
    }
}

/// First letter of the display name, falling back to the username, then "U".
pub fn avatar_initial(name: Option<&str>, username: &str) -> String {
    name.filter(|n| !n.is_empty())
        .or(Some(username))
        .filter(|s| !s.is_empty())
        .and_then(|s| s.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_credentials_keep_email_and_derive_username() {
        let identity = derive_identity("user@x.com");
        assert_eq!(identity.username, "user");
        assert_eq!(identity.email.as_deref(), Some("user@x.com"));
    }

    #[test]
    fn plain_credentials_are_a_username_without_email() {
        let identity = derive_identity("  somebody ");
        assert_eq!(identity.username, "somebody");
        assert_eq!(identity.email, None);
    }

    #[test]
    fn password_rules() {
        assert!(check_new_password("secret1", "secret1").is_ok());
        assert_eq!(
            check_new_password("secret1", "secret2"),
            Err("Passwords do not match.".to_string())
        );
        assert_eq!(
            check_new_password("abc", "abc"),
            Err("Password must be at least 6 characters long.".to_string())
        );
    }

    #[test]
    fn date_time_combination() {
        assert_eq!(combine_date_time("", "14:00"), "");
        assert_eq!(combine_date_time("2024-03-15", ""), "2024-03-15");
        assert_eq!(combine_date_time("2024-03-15", "14:00"), "2024-03-15T14:00");
        assert_eq!(
            split_date_time("2024-03-15T14:00"),
            ("2024-03-15".to_string(), "14:00".to_string())
        );
        assert_eq!(
            split_date_time("2024-03-15"),
            ("2024-03-15".to_string(), String::new())
        );
    }

    #[test]
    fn avatar_initial_fallbacks() {
        assert_eq!(avatar_initial(Some("alice"), "zed"), "A");
        assert_eq!(avatar_initial(None, "zed"), "Z");
        assert_eq!(avatar_initial(Some(""), ""), "U");
    }
}
