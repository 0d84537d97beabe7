//! Audit entry data structures
//!
//! Defines the events the wizard records and the shape of one log line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Events that are written to the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEvent {
    /// A new profile was appended to the profile list
    ProfileCreated,
    /// A returning user was found by email
    SignedIn,
    /// A returning-user lookup found nothing
    SignInFailed,
    /// The configuration step was committed
    ConfigurationCommitted,
    /// The budget sheet was cleared because the interval changed
    BudgetReset,
    /// The plan draft was saved
    ProgressSaved,
    /// A report was written
    ReportExported,
    /// A report could not be written
    ExportFailed,
}

impl std::fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AuditEvent::ProfileCreated => "PROFILE_CREATED",
            AuditEvent::SignedIn => "SIGNED_IN",
            AuditEvent::SignInFailed => "SIGN_IN_FAILED",
            AuditEvent::ConfigurationCommitted => "CONFIG_COMMITTED",
            AuditEvent::BudgetReset => "BUDGET_RESET",
            AuditEvent::ProgressSaved => "PROGRESS_SAVED",
            AuditEvent::ReportExported => "REPORT_EXPORTED",
            AuditEvent::ExportFailed => "EXPORT_FAILED",
        };
        write!(f, "{}", label)
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub event: AuditEvent,

    /// Who or what the event concerns (an email, a file name)
    pub subject: String,

    /// Short free-text note, such as an error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// JSON snapshot of the affected value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl AuditEntry {
    pub fn new(event: AuditEvent, subject: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            subject: subject.into(),
            detail: None,
            data: None,
        }
    }

    /// Attach a free-text note
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach a JSON snapshot of a value
    pub fn with_data<T: Serialize>(mut self, value: &T) -> Self {
        self.data = serde_json::to_value(value).ok();
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event,
            self.subject
        );

        if let Some(detail) = &self.detail {
            output.push_str(&format!(" ({})", detail));
        }

        output
    }
}
