//! Planning wizard orchestration
//!
//! Five ordered steps: landing, identity, configuration, allocation and
//! summary. Moving forward is gated by each step's own check; moving back
//! is always allowed and keeps everything entered so far.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::audit::{AuditEntry, AuditEvent};
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_report, BudgetReport, ExportFormat};
use crate::models::{ActiveUser, BudgetSheet, PlanningConfig};
use crate::services::ProfileService;
use crate::storage::{PlanDraft, Storage};

use super::steps::configuration::ConfigurationForm;
use super::steps::identity::IdentityForm;

/// A wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Landing,
    Identity,
    Configuration,
    Allocation,
    Summary,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Landing,
        Step::Identity,
        Step::Configuration,
        Step::Allocation,
        Step::Summary,
    ];

    /// 1-based position for display
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Landing => "Welcome",
            Step::Identity => "Your Profile",
            Step::Configuration => "Plan Setup",
            Step::Allocation => "Smart Allocation",
            Step::Summary => "Dashboard",
        }
    }

    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::Landing => None,
            Step::Identity => Some(Step::Landing),
            Step::Configuration => Some(Step::Identity),
            Step::Allocation => Some(Step::Configuration),
            Step::Summary => Some(Step::Allocation),
        }
    }
}

/// What committing the configuration did to the budget sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The interval kind changed and every category was reset
    SheetReset,
    /// The sheet was left as it was
    SheetKept,
}

/// The wizard state machine
pub struct Wizard {
    step: Step,
    identity: IdentityForm,
    user: Option<ActiveUser>,
    committed: PlanningConfig,
    configuration: ConfigurationForm,
    sheet: BudgetSheet,
    dismiss_after: Duration,
}

impl Wizard {
    /// Create a wizard on the landing step
    pub fn new(initial: PlanningConfig, dismiss_after: Duration) -> Self {
        Self {
            step: Step::Landing,
            identity: IdentityForm::new(),
            user: None,
            committed: initial,
            configuration: ConfigurationForm::new(initial, dismiss_after),
            sheet: BudgetSheet::default(),
            dismiss_after,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn identity(&self) -> &IdentityForm {
        &self.identity
    }

    pub fn identity_mut(&mut self) -> &mut IdentityForm {
        &mut self.identity
    }

    pub fn user(&self) -> Option<&ActiveUser> {
        self.user.as_ref()
    }

    /// The configuration as last committed
    pub fn committed(&self) -> &PlanningConfig {
        &self.committed
    }

    pub fn configuration(&self) -> &ConfigurationForm {
        &self.configuration
    }

    pub fn configuration_mut(&mut self) -> &mut ConfigurationForm {
        &mut self.configuration
    }

    pub fn sheet(&self) -> &BudgetSheet {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut BudgetSheet {
        &mut self.sheet
    }

    /// Landing to identity
    pub fn begin(&mut self) {
        if self.step == Step::Landing {
            self.step = Step::Identity;
        }
    }

    /// Step back; always allowed except from the landing page
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.step.previous() else {
            return false;
        };
        if previous == Step::Configuration {
            self.enter_configuration();
        }
        self.step = previous;
        true
    }

    fn enter_configuration(&mut self) {
        self.configuration = ConfigurationForm::new(self.committed, self.dismiss_after);
    }

    /// Submit the identity form and continue to the configuration step
    ///
    /// A failed sign-in lookup keeps the wizard on the identity step.
    pub fn submit_identity(&mut self, storage: &Storage) -> BudgetResult<&ActiveUser> {
        let user = self.identity.submit(&ProfileService::new(storage))?;
        self.identity.password.clear();
        self.enter_configuration();
        self.step = Step::Configuration;
        Ok(&*self.user.insert(user))
    }

    /// Commit the configuration and continue to the allocation step
    ///
    /// A change of interval kind resets the budget sheet; other edits keep
    /// it.
    pub fn commit_configuration(&mut self, storage: &Storage) -> BudgetResult<CommitOutcome> {
        if let Some(warning) = self.configuration.span_warning() {
            return Err(BudgetError::RangeInvalid(warning));
        }
        if !self.configuration.is_ready() {
            let missing = crate::services::validation::missing_fields(self.configuration.config());
            return Err(BudgetError::Validation(format!(
                "Choose {} to continue",
                missing.join(", ")
            )));
        }

        let config = *self.configuration.config();
        let outcome = if config.interval != self.committed.interval {
            self.sheet.reset();
            CommitOutcome::SheetReset
        } else {
            CommitOutcome::SheetKept
        };
        self.committed = config;
        self.step = Step::Allocation;

        let subject = self.subject();
        storage.record_audit(
            &AuditEntry::new(AuditEvent::ConfigurationCommitted, subject.clone()).with_data(&config),
        );
        if outcome == CommitOutcome::SheetReset {
            storage.record_audit(
                &AuditEntry::new(AuditEvent::BudgetReset, subject)
                    .with_detail(config.interval_label()),
            );
        }

        Ok(outcome)
    }

    /// Continue to the summary once the sheet holds meaningful data
    pub fn show_summary(&mut self) -> BudgetResult<()> {
        if !self.sheet.has_meaningful_data() {
            return Err(BudgetError::Validation(
                "Add at least one item with a description and an amount".into(),
            ));
        }
        self.step = Step::Summary;
        Ok(())
    }

    /// Snapshot of the current plan, once a user is known
    pub fn draft(&self) -> BudgetResult<PlanDraft> {
        let user = self
            .user
            .clone()
            .ok_or_else(|| BudgetError::Validation("No profile selected".into()))?;
        Ok(PlanDraft::new(user, self.committed, self.sheet.clone()))
    }

    /// Save the plan draft; only allowed once the sheet has meaningful data
    pub fn save_progress(&self, storage: &Storage) -> BudgetResult<PathBuf> {
        if !self.sheet.has_meaningful_data() {
            return Err(BudgetError::Validation(
                "Nothing to save yet: add an item with a description and an amount".into(),
            ));
        }
        let draft = self.draft()?;
        storage.drafts.save(&draft)?;
        storage.record_audit(
            &AuditEntry::new(AuditEvent::ProgressSaved, self.subject())
                .with_detail(format!("{} rows", draft.sheet.row_count())),
        );
        Ok(storage.drafts.path().to_path_buf())
    }

    /// Resume from a saved draft, landing on the allocation step
    pub fn restore(&mut self, draft: PlanDraft) {
        self.user = Some(draft.user);
        self.committed = draft.config;
        self.enter_configuration();
        self.sheet = draft.sheet;
        self.step = Step::Allocation;
    }

    pub fn report(&self) -> BudgetResult<BudgetReport> {
        let user = self
            .user
            .as_ref()
            .ok_or_else(|| BudgetError::Validation("No profile selected".into()))?;
        Ok(BudgetReport::new(user, &self.committed, &self.sheet))
    }

    /// Export the summary; the wizard state is untouched either way
    pub fn export(&self, storage: &Storage, format: ExportFormat, dir: &Path) -> BudgetResult<PathBuf> {
        let report = self.report()?;
        export_report(storage, &report, format, dir)
    }

    fn subject(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.profile.email.clone())
            .unwrap_or_else(|| "anonymous".to_string())
    }
}
