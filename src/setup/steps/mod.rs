//! Individual wizard steps with their own form state

pub mod configuration;
pub mod identity;

pub use configuration::ConfigurationForm;
pub use identity::{IdentityField, IdentityForm, IdentityMode, PasswordStrength};
