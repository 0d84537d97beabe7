//! User profiles and the active user of a session
//!
//! Profiles carry no credentials. The password typed on the identity step
//! only feeds the strength hint and is dropped with the form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier of a stored profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(Uuid);

impl ProfileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "usr-{}", &self.0.to_string()[..8])
    }
}

impl FromStr for ProfileId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("usr-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A stored user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: ProfileId,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    pub email: String,

    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: ProfileId::new(),
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            created_at: Utc::now(),
        }
    }

    /// "first last", trimmed; empty when neither name is set
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Case-insensitive email comparison
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}

/// Check that an email has the shape `local@domain`
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// The profile the wizard is running for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveUser {
    pub profile: UserProfile,

    /// Found by sign-in rather than newly created
    #[serde(default)]
    pub returning: bool,
}

impl ActiveUser {
    pub fn created(profile: UserProfile) -> Self {
        Self {
            profile,
            returning: false,
        }
    }

    pub fn returning(profile: UserProfile) -> Self {
        Self {
            profile,
            returning: true,
        }
    }

    /// Name shown on the summary and used for report file names
    ///
    /// Returning users are shown by email; new users by name, falling back to
    /// "Guest User" when no name was given.
    pub fn display_name(&self) -> String {
        if self.returning {
            return self.profile.email.clone();
        }
        let name = self.profile.full_name();
        if name.is_empty() {
            "Guest User".to_string()
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_id_display_and_parse() {
        let id = ProfileId::new();
        assert!(id.to_string().starts_with("usr-"));
        let parsed: ProfileId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("sam@example.com"));
        assert!(is_valid_email("  a@b  "));
        assert!(!is_valid_email("sam"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("sam@"));
        assert!(!is_valid_email("sam@ex@ample"));
        assert!(!is_valid_email("sa m@example.com"));
    }

    #[test]
    fn test_email_matches_ignores_case() {
        let profile = UserProfile::new("Sam", "Lee", "Sam@Example.com");
        assert!(profile.email_matches("sam@example.COM"));
        assert!(!profile.email_matches("other@example.com"));
    }

    #[test]
    fn test_display_name() {
        let profile = UserProfile::new(" Sam ", "Lee", "sam@example.com");
        assert_eq!(ActiveUser::created(profile.clone()).display_name(), "Sam Lee");
        assert_eq!(
            ActiveUser::returning(profile).display_name(),
            "sam@example.com"
        );

        let nameless = UserProfile::new("", "", "x@y.z");
        assert_eq!(ActiveUser::created(nameless).display_name(), "Guest User");

        let first_only = UserProfile::new("Ana", "", "a@b.c");
        assert_eq!(ActiveUser::created(first_only).display_name(), "Ana");
    }
}
