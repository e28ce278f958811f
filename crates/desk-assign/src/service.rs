//! Dispatch service: one locked read-modify-write assignment run

use crate::domain::{Agent, Assignment, Ticket, WorkloadEntry, WorkloadSnapshot};
use crate::engine::AssignmentEngine;
use crate::error::{AssignError, Result};
use crate::store::WorkloadStore;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Runs assignment passes against a shared workload store.
///
/// The store mutex is held from the initial snapshot load through the final
/// save, so concurrent runs within one process cannot interleave their
/// read-modify-write cycles. Across processes the last writer still wins;
/// see DESIGN.md.
pub struct DispatchService {
    engine: AssignmentEngine,
    store: Mutex<Box<dyn WorkloadStore>>,
}

impl DispatchService {
    /// New service over the given store.
    pub fn new(store: impl WorkloadStore + 'static) -> Self {
        Self {
            engine: AssignmentEngine::new(),
            store: Mutex::new(Box::new(store)),
        }
    }

    /// Validate the payload, run one assignment pass, persist the resulting
    /// loads.
    ///
    /// Persisted loads override the payload's `current_load` for agents
    /// present in the last snapshot. The saved snapshot covers every payload
    /// agent, including those that received no new assignments.
    pub fn run(&self, agents: &[Agent], tickets: &[Ticket]) -> Result<Vec<Assignment>> {
        validate(agents, tickets)?;

        let store = self.store.lock();
        let snapshot = store.load();

        let mut initial_loads: HashMap<String, u32> = agents
            .iter()
            .map(|a| (a.id.clone(), a.current_load))
            .collect();
        for entry in &snapshot.agents {
            initial_loads.insert(entry.agent_id.clone(), entry.current_load);
        }

        let outcome = self.engine.assign(agents, tickets, initial_loads);

        let entries = agents
            .iter()
            .map(|agent| WorkloadEntry {
                agent_id: agent.id.clone(),
                name: agent.name.clone(),
                current_load: outcome
                    .final_loads
                    .get(&agent.id)
                    .copied()
                    .unwrap_or(agent.current_load),
            })
            .collect();
        store.save(&WorkloadSnapshot { agents: entries })?;

        tracing::info!(
            tickets = tickets.len(),
            assigned = outcome.assignments.len(),
            agents = agents.len(),
            "assignment run complete"
        );
        Ok(outcome.assignments)
    }
}

fn validate(agents: &[Agent], tickets: &[Ticket]) -> Result<()> {
    if agents.is_empty() {
        return Err(AssignError::EmptyAgentList);
    }
    for agent in agents {
        if agent.id.trim().is_empty() {
            return Err(AssignError::InvalidAgent {
                id: agent.id.clone(),
                reason: "blank agent_id".into(),
            });
        }
        if !agent.experience_level.is_finite() || agent.experience_level < 0.0 {
            return Err(AssignError::InvalidAgent {
                id: agent.id.clone(),
                reason: "experience_level must be a non-negative number".into(),
            });
        }
    }
    for ticket in tickets {
        if ticket.id.trim().is_empty() {
            return Err(AssignError::InvalidTicket {
                id: ticket.id.clone(),
                reason: "blank ticket_id".into(),
            });
        }
        if !ticket.created_at.is_finite() {
            return Err(AssignError::InvalidTicket {
                id: ticket.id.clone(),
                reason: "creation_timestamp must be a finite number".into(),
            });
        }
    }
    Ok(())
}
