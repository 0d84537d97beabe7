//! Audit logging for Go Budgeting
//!
//! Records what happened during a session (profiles created, sign-ins,
//! configuration commits, saves and exports) in an append-only log.
//!
//! - `AuditEntry`: one event with a timestamp, a subject and optional detail.
//! - `AuditLogger`: appends entries to the log file as JSON lines.
//!
//! # Example
//!
//! ```rust,ignore
//! use go_budgeting::audit::{AuditEntry, AuditEvent, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::new(AuditEvent::SignedIn, "sam@example.com"))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, AuditEvent};
pub use logger::AuditLogger;
