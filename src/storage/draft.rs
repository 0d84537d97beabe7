//! Saved plan draft
//!
//! The draft is the snapshot written by "save progress": who the plan is
//! for, the committed configuration and the budget sheet.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{ActiveUser, BudgetSheet, PlanningConfig};

use super::file_io::{read_json_required, write_json_atomic};

/// A saved snapshot of a plan in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDraft {
    pub user: ActiveUser,
    pub config: PlanningConfig,
    pub sheet: BudgetSheet,
    pub saved_at: DateTime<Utc>,
}

impl PlanDraft {
    pub fn new(user: ActiveUser, config: PlanningConfig, sheet: BudgetSheet) -> Self {
        Self {
            user,
            config,
            sheet,
            saved_at: Utc::now(),
        }
    }
}

/// Reads and writes the draft file
pub struct DraftRepository {
    path: PathBuf,
}

impl DraftRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Replace the saved draft
    pub fn save(&self, draft: &PlanDraft) -> BudgetResult<()> {
        write_json_atomic(&self.path, draft)
    }

    /// Load the saved draft, failing with not-found when none was saved
    pub fn load(&self) -> BudgetResult<PlanDraft> {
        if !self.path.exists() {
            return Err(BudgetError::draft_not_found(self.path.display().to_string()));
        }
        read_json_required(&self.path)
    }

    /// Delete the saved draft; false when there was none
    pub fn remove(&self) -> BudgetResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .map_err(|e| BudgetError::Io(format!("Failed to remove {}: {}", self.path.display(), e)))?;
        Ok(true)
    }
}
