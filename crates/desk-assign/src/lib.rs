//! Desk Assign - rule-based ticket-to-agent assignment
//!
//! Core engine for the OpenDesk support platform:
//! - Urgency-weighted ticket priority ranking
//! - Skill, workload, and experience suitability scoring
//! - Greedy single-pass assignment with rationale strings
//! - Per-agent workload snapshots persisted between runs

#![warn(missing_docs)]

pub mod domain;
pub mod engine;
pub mod error;
pub mod keywords;
pub mod ranker;
pub mod scorer;
pub mod service;
pub mod store;

pub use domain::{Agent, Assignment, Availability, Ticket, WorkloadEntry, WorkloadSnapshot};
pub use engine::{AssignmentEngine, AssignmentOutcome};
pub use error::{AssignError, Result};
pub use keywords::KeywordMatcher;
pub use ranker::TicketRanker;
pub use scorer::{ScoreWeights, SuitabilityScore, SuitabilityScorer};
pub use service::DispatchService;
pub use store::{FileWorkloadStore, MemoryWorkloadStore, WorkloadStore};
