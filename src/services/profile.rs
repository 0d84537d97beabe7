//! Profile service
//!
//! Creates profiles and signs returning users in, recording both in the
//! audit log.

use crate::audit::{AuditEntry, AuditEvent};
use crate::error::{BudgetError, BudgetResult};
use crate::models::profile::is_valid_email;
use crate::models::{ActiveUser, UserProfile};
use crate::storage::Storage;

/// Service for profile management
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and store a new profile
    pub fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> BudgetResult<ActiveUser> {
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(BudgetError::Validation(
                "First and last name are required".into(),
            ));
        }
        if !is_valid_email(email) {
            return Err(BudgetError::Validation(format!(
                "'{}' is not a valid email address",
                email.trim()
            )));
        }

        let profile = UserProfile::new(first_name, last_name, email);
        self.storage.profiles.append(profile.clone())?;

        self.storage.record_audit(
            &AuditEntry::new(AuditEvent::ProfileCreated, profile.email.clone())
                .with_detail(profile.id.to_string()),
        );

        Ok(ActiveUser::created(profile))
    }

    /// Look up a returning user by email, ignoring case
    pub fn sign_in(&self, email: &str) -> BudgetResult<ActiveUser> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(BudgetError::Validation(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        match self.storage.profiles.find_by_email(email)? {
            Some(profile) => {
                self.storage
                    .log_audit(&AuditEntry::new(AuditEvent::SignedIn, profile.email.clone()))?;
                Ok(ActiveUser::returning(profile))
            }
            None => {
                self.storage
                    .log_audit(&AuditEntry::new(AuditEvent::SignInFailed, email))?;
                Err(BudgetError::lookup_failed(email))
            }
        }
    }

    pub fn find(&self, email: &str) -> BudgetResult<Option<UserProfile>> {
        self.storage.profiles.find_by_email(email)
    }

    pub fn list(&self) -> BudgetResult<Vec<UserProfile>> {
        self.storage.profiles.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_register_then_sign_in() {
        let (_temp, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        let created = service.register("Sam", "Lee", "sam@example.com").unwrap();
        assert!(!created.returning);
        assert_eq!(created.display_name(), "Sam Lee");

        let returning = service.sign_in("SAM@example.com").unwrap();
        assert!(returning.returning);
        assert_eq!(returning.profile.id, created.profile.id);
        assert_eq!(returning.display_name(), "sam@example.com");
    }

    #[test]
    fn test_sign_in_unknown_is_lookup_failed() {
        let (_temp, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        let err = service.sign_in("ghost@example.com").unwrap_err();
        assert!(err.is_lookup_failed());

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log.last().unwrap().event, AuditEvent::SignInFailed);
    }

    #[test]
    fn test_register_validation() {
        let (_temp, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        assert!(matches!(
            service.register("", "Lee", "sam@example.com"),
            Err(BudgetError::Validation(_))
        ));
        assert!(matches!(
            service.register("Sam", "Lee", "not-an-email"),
            Err(BudgetError::Validation(_))
        ));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_register_same_email_twice() {
        let (_temp, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        let first = service.register("Sam", "Lee", "sam@example.com").unwrap();
        let second = service.register("Samuel", "Lee", "Sam@Example.com").unwrap();
        assert_ne!(first.profile.id, second.profile.id);
        assert_eq!(service.list().unwrap().len(), 2);

        let returning = service.sign_in("SAM@EXAMPLE.COM").unwrap();
        assert_eq!(returning.profile.id, first.profile.id);
        assert_eq!(
            service.find("sam@example.com").unwrap().unwrap().first_name,
            "Sam"
        );
    }
}
