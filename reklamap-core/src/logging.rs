//! Logging Standards and Conventions
//!
//! Every ReklaMap crate logs through `tracing` with structured fields.
//!
//! # Log Levels
//!
//! | Level | Usage | Examples |
//! |-------|-------|----------|
//! | ERROR | Unrecoverable errors | Schema init failure, transaction commit failure |
//! | WARN  | Degraded operation, swallowed read failures | Listing query failed, rejected token |
//! | INFO  | State changes | Complaint submitted, action recorded |
//! | DEBUG | Operation parameters | Listing filter, resolved area |
//! | TRACE | Full payloads | Questionnaire bodies |
//!
//! # Structured Logging Fields
//!
//! Use the names in [`fields`] so log lines can be grepped across crates:
//!
//! ```ignore
//! use tracing::info;
//! use reklamap_core::logging::{fields, operations};
//!
//! info!(
//!     complaint_id = id,
//!     operation = operations::RECORD_ACTION,
//!     action = %kind,
//!     "Action recorded"
//! );
//! ```

use serde::{Deserialize, Serialize};

/// Log level enumeration matching tracing levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Parse from string, accepting `warning` as an alias
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }

    /// Default `EnvFilter` directive for the ReklaMap crates at this level
    pub fn filter_directive(&self) -> String {
        let level = self.as_str();
        format!(
            "reklamap_cli={level},reklamap_api={level},reklamap_db={level},tower_http={level}"
        )
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Standard log field names
pub mod fields {
    pub const COMPLAINT_ID: &str = "complaint_id";
    pub const REGISTRATION_ID: &str = "registration_id";
    pub const HISTORY_ID: &str = "history_id";
    pub const COMPLAINT_TYPE: &str = "complaint_type";
    pub const ACTION: &str = "action";
    pub const STAGE: &str = "stage";
    pub const ASSIGNED_TO: &str = "assigned_to";
    pub const USER_ID: &str = "user_id";
    pub const ROLE: &str = "role";
    pub const VIEW: &str = "view";
    pub const OPERATION: &str = "operation";
    pub const COUNT: &str = "count";
    pub const ERROR: &str = "error";
    pub const REQUEST_ID: &str = "request_id";
}

/// Operation names
pub mod operations {
    pub const CREATE_REGISTRATION: &str = "create_registration";
    pub const SUBMIT_COMPLAINT: &str = "submit_complaint";
    pub const RECORD_ACTION: &str = "record_action";
    pub const RESOLVE: &str = "resolve";
    pub const MARK_UNRESOLVED: &str = "mark_unresolved";
    pub const LIST_COMPLAINTS: &str = "list_complaints";
    pub const STAGE_LOOKUP: &str = "stage_lookup";
    pub const TIMELINE: &str = "timeline";
    pub const SEED: &str = "seed";
    pub const INIT_SCHEMA: &str = "init_schema";
    pub const HEALTH_CHECK: &str = "health_check";
}

/// Context for structured logging in request handlers
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    pub user_id: Option<String>,
    pub role: Option<String>,
    pub operation: Option<String>,
    pub complaint_id: Option<i64>,
    pub tags: Vec<(String, String)>,
}

impl LogContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: impl Into<String>, role: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self.role = Some(role.into());
        self
    }

    pub fn with_operation(mut self, op: impl Into<String>) -> Self {
        self.operation = Some(op.into());
        self
    }

    pub fn with_complaint(mut self, complaint_id: i64) -> Self {
        self.complaint_id = Some(complaint_id);
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }

    /// Span carrying the context fields, entered by handlers around service calls
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!(
            "request",
            user_id = self.user_id.as_deref().unwrap_or("-"),
            role = self.role.as_deref().unwrap_or("-"),
            operation = self.operation.as_deref().unwrap_or("-"),
            complaint_id = self.complaint_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::parse("error"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("INFO"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("invalid"), None);
    }

    #[test]
    fn test_filter_directive_covers_crates() {
        let directive = LogLevel::Debug.filter_directive();
        assert!(directive.contains("reklamap_api=debug"));
        assert!(directive.contains("reklamap_db=debug"));
    }

    #[test]
    fn test_log_context() {
        let ctx = LogContext::new()
            .with_user("user-9", "complainant")
            .with_operation(operations::TIMELINE)
            .with_complaint(42)
            .with_tag(fields::VIEW, "pending");

        assert_eq!(ctx.user_id.as_deref(), Some("user-9"));
        assert_eq!(ctx.role.as_deref(), Some("complainant"));
        assert_eq!(ctx.operation.as_deref(), Some("timeline"));
        assert_eq!(ctx.complaint_id, Some(42));
        assert_eq!(ctx.tags.len(), 1);
    }
}
