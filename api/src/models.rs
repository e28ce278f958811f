//! API request/response models

use desk_assign::{Agent, Assignment, Availability, Ticket};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Assignment request: the full dataset for one run
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentRequest {
    /// Agent roster
    pub agents: Vec<AgentPayload>,
    /// Tickets to assign
    pub tickets: Vec<TicketPayload>,
}

/// Agent as submitted by the caller
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AgentPayload {
    /// Unique agent identifier
    pub agent_id: String,
    /// Display name
    pub name: String,
    /// Roster status; only `"Available"` makes the agent assignable
    pub availability_status: String,
    /// Experience level, non-negative
    pub experience_level: f64,
    /// Ticket load as known to the caller
    pub current_load: u32,
    /// Skill name -> proficiency weight; missing means no declared skills
    #[serde(default)]
    pub skills: HashMap<String, f64>,
}

impl From<AgentPayload> for Agent {
    fn from(payload: AgentPayload) -> Self {
        Agent {
            id: payload.agent_id,
            name: payload.name,
            availability: Availability::from_status(&payload.availability_status),
            experience_level: payload.experience_level,
            current_load: payload.current_load,
            skills: payload.skills,
        }
    }
}

/// Ticket as submitted by the caller
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketPayload {
    /// Unique ticket identifier
    pub ticket_id: String,
    /// Short summary
    pub title: String,
    /// Full problem description
    pub description: String,
    /// Creation timestamp; larger means more recent
    pub creation_timestamp: f64,
}

impl From<TicketPayload> for Ticket {
    fn from(payload: TicketPayload) -> Self {
        Ticket {
            id: payload.ticket_id,
            title: payload.title,
            description: payload.description,
            created_at: payload.creation_timestamp,
        }
    }
}

/// Successful assignment response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentResponse {
    /// Committed assignments, in processing order
    pub assignments: Vec<AssignmentDto>,
}

/// One committed assignment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentDto {
    /// Ticket that was assigned
    pub ticket_id: String,
    /// Agent receiving it
    pub assigned_agent_id: String,
    /// Why the agent was picked
    pub rationale: String,
}

impl From<Assignment> for AssignmentDto {
    fn from(a: Assignment) -> Self {
        Self {
            ticket_id: a.ticket_id,
            assigned_agent_id: a.assigned_agent_id,
            rationale: a.rationale,
        }
    }
}

/// Error response envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Error details
    pub error: ErrorBody,
}

/// Error details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Stable machine-readable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl ApiError {
    /// New error envelope.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }
}
