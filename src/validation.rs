//! Input validation for process sets.
//!
//! The scheduler fails fast on the first bad process. This module is the
//! caller-facing check that reports every problem at once:
//! - Empty input
//! - Zero pids
//! - Duplicate pids
//! - Non-positive burst times
//! - Negative arrival times

use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// A pid is zero; pids are positive.
    NonPositivePid,
    /// Two processes share the same pid.
    DuplicatePid,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Arrival time is negative.
    NegativeArrival,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process set before scheduling.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes supplied",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if p.pid == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositivePid,
                "Process pid must be positive, got 0",
            ));
        }
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has burst time {}", p.pid, p.burst_time),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has arrival time {}", p.pid, p.arrival_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
