//! Storage layer for Go Budgeting
//!
//! Provides JSON file storage with atomic writes for the profile list and
//! the plan draft, plus the audit log that records what changed.

pub mod draft;
pub mod file_io;
pub mod profiles;

pub use draft::{DraftRepository, PlanDraft};
pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use profiles::ProfileRepository;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BudgetPaths,
    pub profiles: ProfileRepository,
    pub drafts: DraftRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a Storage instance, creating directories as needed
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            profiles: ProfileRepository::new(paths.profiles_file()),
            drafts: DraftRepository::new(paths.draft_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), BudgetError> {
        self.profiles.load()
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record an audit entry
    pub fn log_audit(&self, entry: &AuditEntry) -> Result<(), BudgetError> {
        self.audit.log(entry)
    }

    /// Record an audit entry for a change that has already been made
    ///
    /// A write failure neither undoes nor fails the change; it is returned
    /// only for callers that want to report it.
    pub fn record_audit(&self, entry: &AuditEntry) -> Option<BudgetError> {
        self.audit.log(entry).err()
    }
}
