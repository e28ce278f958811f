//! Domain types: agents, tickets, assignments, workload snapshots

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether an agent can be assigned tickets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// Agent can receive new tickets
    #[default]
    Available,
    /// Any roster status other than `"Available"`
    Unavailable,
}

impl Availability {
    /// Map a roster status string. Only the exact string `"Available"` makes
    /// an agent assignable; every other status is treated as unavailable.
    pub fn from_status(status: &str) -> Self {
        if status == "Available" {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }
}

/// Support agent
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Agent {
    /// Unique agent identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Roster availability
    pub availability: Availability,
    /// Experience level, non-negative
    pub experience_level: f64,
    /// Ticket load as reported in the request payload
    pub current_load: u32,
    /// Skill name -> proficiency weight; absent skills count as zero
    pub skills: HashMap<String, f64>,
}

impl Agent {
    /// New available agent with no skills, load, or experience.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            availability: Availability::Available,
            experience_level: 0.0,
            current_load: 0,
            skills: HashMap::new(),
        }
    }

    /// Declare a skill proficiency.
    pub fn with_skill(mut self, skill: impl Into<String>, weight: f64) -> Self {
        self.skills.insert(skill.into(), weight);
        self
    }

    /// Set the experience level.
    pub fn with_experience(mut self, level: f64) -> Self {
        self.experience_level = level;
        self
    }

    /// Set the payload ticket load.
    pub fn with_load(mut self, load: u32) -> Self {
        self.current_load = load;
        self
    }

    /// Set the availability.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// True when the agent can be assigned tickets.
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

/// Support ticket
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket identifier
    pub id: String,
    /// Short summary
    pub title: String,
    /// Full problem description
    pub description: String,
    /// Creation timestamp; larger means more recent
    pub created_at: f64,
}

impl Ticket {
    /// New ticket.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        created_at: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            created_at,
        }
    }

    /// Lowercased `title + " " + description`, the haystack for all keyword
    /// matching.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

/// One committed ticket-to-agent decision
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Ticket that was assigned
    pub ticket_id: String,
    /// Agent receiving it
    pub assigned_agent_id: String,
    /// Human-readable summary of why the agent was picked
    pub rationale: String,
}

/// Persisted per-agent loads, carried between runs
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSnapshot {
    /// One entry per agent known at the end of the last run
    pub agents: Vec<WorkloadEntry>,
}

/// Snapshot entry for one agent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadEntry {
    /// Agent identifier
    pub agent_id: String,
    /// Display name at the time of the run
    pub name: String,
    /// Load at the end of the run
    pub current_load: u32,
}

impl WorkloadSnapshot {
    /// agent_id -> load view of the snapshot.
    pub fn loads(&self) -> HashMap<&str, u32> {
        self.agents
            .iter()
            .map(|e| (e.agent_id.as_str(), e.current_load))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_mapping() {
        assert_eq!(Availability::from_status("Available"), Availability::Available);
        assert_eq!(Availability::from_status("available"), Availability::Unavailable);
        assert_eq!(Availability::from_status("On Leave"), Availability::Unavailable);
        assert_eq!(Availability::from_status(""), Availability::Unavailable);
    }

    #[test]
    fn test_search_text_is_lowercased() {
        let t = Ticket::new("T1", "VPN Outage", "Critical DNS failure", 0.0);
        assert_eq!(t.search_text(), "vpn outage critical dns failure");
    }
}
