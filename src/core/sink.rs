//! Per-severity sink prefixes

use super::severity::Severity;

/// The literal prefix one severity writes after the line header.
///
/// Every sink of a logger shares that logger's destination and flags; only
/// the `[name] TAG` prefix differs between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sink {
    severity: Severity,
    prefix: String,
}

impl Sink {
    pub fn new(name: &str, severity: Severity) -> Self {
        Self {
            severity,
            prefix: format!("[{}] {}", name, severity.tag()),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// One sink per severity, indexed by severity
    pub(crate) fn for_all(name: &str) -> [Sink; 5] {
        Severity::ALL.map(|severity| Sink::new(name, severity))
    }
}
