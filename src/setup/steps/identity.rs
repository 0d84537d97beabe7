//! Identity step
//!
//! Either creates a profile or signs a returning user in by email. The
//! password field only drives the strength hint; it is never stored.

use crate::error::{BudgetError, BudgetResult};
use crate::models::profile::is_valid_email;
use crate::models::ActiveUser;
use crate::services::ProfileService;

/// Which of the two identity forms is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityMode {
    #[default]
    CreateProfile,
    SignIn,
}

impl IdentityMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::CreateProfile => "Create your profile",
            Self::SignIn => "Welcome back",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::CreateProfile => Self::SignIn,
            Self::SignIn => Self::CreateProfile,
        }
    }
}

/// Strength hint for the password field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// No hint for an empty password
    pub fn assess(password: &str) -> Option<Self> {
        match password.chars().count() {
            0 => None,
            1..=4 => Some(Self::Weak),
            5..=7 => Some(Self::Medium),
            _ => Some(Self::Strong),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

/// Editable fields of the identity form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    FirstName,
    LastName,
    Email,
    Password,
}

impl IdentityField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentityForm {
    mode: IdentityMode,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub accepted_terms: bool,
}

impl IdentityForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> IdentityMode {
        self.mode
    }

    /// Switch between create and sign-in, clearing every text field
    pub fn switch_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.password.clear();
    }

    /// Fields shown in the current mode, in tab order
    pub fn fields(&self) -> &'static [IdentityField] {
        match self.mode {
            IdentityMode::CreateProfile => &[
                IdentityField::FirstName,
                IdentityField::LastName,
                IdentityField::Email,
                IdentityField::Password,
            ],
            IdentityMode::SignIn => &[IdentityField::Email, IdentityField::Password],
        }
    }

    pub fn value(&self, field: IdentityField) -> &str {
        match field {
            IdentityField::FirstName => &self.first_name,
            IdentityField::LastName => &self.last_name,
            IdentityField::Email => &self.email,
            IdentityField::Password => &self.password,
        }
    }

    pub fn value_mut(&mut self, field: IdentityField) -> &mut String {
        match field {
            IdentityField::FirstName => &mut self.first_name,
            IdentityField::LastName => &mut self.last_name,
            IdentityField::Email => &mut self.email,
            IdentityField::Password => &mut self.password,
        }
    }

    pub fn strength(&self) -> Option<PasswordStrength> {
        PasswordStrength::assess(&self.password)
    }

    /// First reason the form cannot be submitted yet
    pub fn blocker(&self) -> Option<&'static str> {
        if !self.accepted_terms {
            return Some("Accept the Terms and Privacy Policy to continue");
        }
        if self.mode == IdentityMode::CreateProfile
            && (self.first_name.trim().is_empty() || self.last_name.trim().is_empty())
        {
            return Some("Enter your first and last name");
        }
        if !is_valid_email(&self.email) {
            return Some("Enter an email like name@example.com");
        }
        None
    }

    pub fn can_submit(&self) -> bool {
        self.blocker().is_none()
    }

    /// Create the profile or look the user up, depending on the mode
    pub fn submit(&self, profiles: &ProfileService) -> BudgetResult<ActiveUser> {
        if let Some(reason) = self.blocker() {
            return Err(BudgetError::Validation(reason.into()));
        }
        match self.mode {
            IdentityMode::CreateProfile => {
                profiles.register(&self.first_name, &self.last_name, &self.email)
            }
            IdentityMode::SignIn => profiles.sign_in(&self.email),
        }
    }

    /// Notice shown for "forgot password"; no mail is sent
    pub fn reset_link_notice(&self) -> String {
        let email = self.email.trim();
        let target = if email.is_empty() {
            "your email address"
        } else {
            email
        };
        format!("A reset link has been sent to {}!", target)
    }
}
