//! Error types for ticket assignment

use thiserror::Error;

/// Assignment error type
#[derive(Error, Debug)]
pub enum AssignError {
    /// The request carried no agents to assign to
    #[error("agent list is empty")]
    EmptyAgentList,

    /// An agent entry failed validation
    #[error("invalid agent '{id}': {reason}")]
    InvalidAgent {
        /// Offending agent identifier (may be blank)
        id: String,
        /// What was wrong with the entry
        reason: String,
    },

    /// A ticket entry failed validation
    #[error("invalid ticket '{id}': {reason}")]
    InvalidTicket {
        /// Offending ticket identifier (may be blank)
        id: String,
        /// What was wrong with the entry
        reason: String,
    },

    /// The workload snapshot could not be written
    #[error("workload snapshot error: {0}")]
    Snapshot(#[from] std::io::Error),
}

impl AssignError {
    /// True for errors caused by the request payload rather than the service.
    pub fn is_validation(&self) -> bool {
        !matches!(self, AssignError::Snapshot(_))
    }
}

/// Result type for ticket assignment
pub type Result<T> = std::result::Result<T, AssignError>;
