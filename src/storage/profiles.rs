//! Profile repository for JSON storage
//!
//! Profiles are only ever appended. There is no update or delete, and
//! lookups compare emails without regard to case.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};
use crate::models::UserProfile;

use super::file_io::{read_json, write_json_atomic};

/// Serializable profile list
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ProfileData {
    profiles: Vec<UserProfile>,
}

/// Repository for profile persistence
pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<Vec<UserProfile>>,
}

impl ProfileRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load profiles from disk
    pub fn load(&self) -> BudgetResult<()> {
        let file_data: ProfileData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.profiles;
        Ok(())
    }

    fn save_locked(&self, profiles: &[UserProfile]) -> BudgetResult<()> {
        let file_data = ProfileData {
            profiles: profiles.to_vec(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Find a profile by email, ignoring case
    pub fn find_by_email(&self, email: &str) -> BudgetResult<Option<UserProfile>> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|p| p.email_matches(email)).cloned())
    }

    /// All profiles in the order they were created
    pub fn get_all(&self) -> BudgetResult<Vec<UserProfile>> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Append a profile and persist the list
    ///
    /// Emails already on the list are appended again; lookups return the
    /// earliest match.
    pub fn append(&self, profile: UserProfile) -> BudgetResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(profile);
        if let Err(e) = self.save_locked(&data) {
            data.pop();
            return Err(e);
        }
        Ok(())
    }

    pub fn count(&self) -> BudgetResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ProfileRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profiles.json");
        let repo = ProfileRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_find_ignores_case() {
        let (_temp, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(UserProfile::new("Sam", "Lee", "Sam@Example.com"))
            .unwrap();

        let found = repo.find_by_email("sam@EXAMPLE.com").unwrap().unwrap();
        assert_eq!(found.first_name, "Sam");
        assert!(repo.find_by_email("other@example.com").unwrap().is_none());
    }

    #[test]
    fn test_repeated_email_appends_and_first_wins() {
        let (temp, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(UserProfile::new("Sam", "Lee", "sam@example.com"))
            .unwrap();
        repo.append(UserProfile::new("Other", "Person", "SAM@example.com"))
            .unwrap();
        assert_eq!(repo.count().unwrap(), 2);

        let found = repo.find_by_email("Sam@Example.COM").unwrap().unwrap();
        assert_eq!(found.first_name, "Sam");

        let reopened = ProfileRepository::new(temp.path().join("profiles.json"));
        reopened.load().unwrap();
        assert_eq!(reopened.count().unwrap(), 2);
        assert_eq!(
            reopened.find_by_email("sam@example.com").unwrap().unwrap().first_name,
            "Sam"
        );
    }

    #[test]
    fn test_survives_reload() {
        let (temp, repo) = create_test_repo();
        repo.load().unwrap();
        repo.append(UserProfile::new("Ana", "Ruiz", "ana@example.com"))
            .unwrap();
        repo.append(UserProfile::new("Bo", "Chen", "bo@example.com"))
            .unwrap();

        let reopened = ProfileRepository::new(temp.path().join("profiles.json"));
        reopened.load().unwrap();

        let all = reopened.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].email, "ana@example.com");
        assert_eq!(all[1].email, "bo@example.com");
    }
}
