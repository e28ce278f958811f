//! Greedy single-pass assignment

use crate::domain::{Agent, Assignment, Ticket};
use crate::keywords::KeywordMatcher;
use crate::ranker::TicketRanker;
use crate::scorer::{SuitabilityScore, SuitabilityScorer};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

/// Result of one assignment run
#[derive(Debug, Clone)]
pub struct AssignmentOutcome {
    /// Committed assignments, in processing (priority) order
    pub assignments: Vec<Assignment>,
    /// Final in-run load for every input agent
    pub final_loads: HashMap<String, u32>,
}

/// Ranks tickets, then commits each to the best-scoring available agent.
///
/// Strictly greedy: one pass in priority order, no backtracking, no
/// re-ranking after assignments begin. Each commit bumps the winner's
/// in-run load, which lowers its workload score for later tickets.
pub struct AssignmentEngine {
    matcher: Arc<KeywordMatcher>,
    ranker: TicketRanker,
    scorer: SuitabilityScorer,
}

impl AssignmentEngine {
    /// New engine with the built-in keyword tables and default weights.
    pub fn new() -> Self {
        let matcher = Arc::new(KeywordMatcher::new());
        Self {
            ranker: TicketRanker::new(Arc::clone(&matcher)),
            scorer: SuitabilityScorer::new(),
            matcher,
        }
    }

    /// Assign tickets to agents, starting from `initial_loads`.
    ///
    /// Pure with respect to its inputs: no stored state is read or written.
    /// Agents missing from `initial_loads` start at their payload load.
    /// Tickets with no available agent are omitted from the result.
    pub fn assign(
        &self,
        agents: &[Agent],
        tickets: &[Ticket],
        initial_loads: HashMap<String, u32>,
    ) -> AssignmentOutcome {
        let mut loads = initial_loads;
        for agent in agents {
            loads.entry(agent.id.clone()).or_insert(agent.current_load);
        }

        let mut assignments = Vec::new();
        for ticket in self.ranker.rank(tickets) {
            let text = ticket.search_text();
            let ticket_skills = self.matcher.matching_skills(&text);

            let mut best: Option<(&Agent, SuitabilityScore)> = None;
            for agent in agents.iter().filter(|a| a.is_available()) {
                let load = loads.get(&agent.id).copied().unwrap_or(0);
                let score = self.scorer.score(agent, &ticket_skills, load);
                let replace = match &best {
                    None => true,
                    Some((incumbent, incumbent_score)) => {
                        Self::beats(&score, &agent.id, incumbent_score, &incumbent.id)
                    }
                };
                if replace {
                    best = Some((agent, score));
                }
            }

            let Some((agent, score)) = best else {
                tracing::debug!(ticket = %ticket.id, "no available agent, skipping ticket");
                continue;
            };

            let load_before = loads.get(&agent.id).copied().unwrap_or(0);
            loads.insert(agent.id.clone(), load_before + 1);
            tracing::debug!(
                ticket = %ticket.id,
                agent = %agent.id,
                total = score.total,
                "committed assignment"
            );
            assignments.push(Assignment {
                ticket_id: ticket.id.clone(),
                assigned_agent_id: agent.id.clone(),
                rationale: Self::rationale(agent, &score, load_before),
            });
        }

        AssignmentOutcome {
            assignments,
            final_loads: loads,
        }
    }

    /// Strictly higher total wins; exact ties go to the smaller agent id.
    fn beats(
        candidate: &SuitabilityScore,
        candidate_id: &str,
        incumbent: &SuitabilityScore,
        incumbent_id: &str,
    ) -> bool {
        match candidate.total.total_cmp(&incumbent.total) {
            Ordering::Greater => true,
            Ordering::Equal => candidate_id < incumbent_id,
            Ordering::Less => false,
        }
    }

    fn rationale(agent: &Agent, score: &SuitabilityScore, load_before: u32) -> String {
        let skills = if score.matched_skills.is_empty() {
            "no direct skill match".to_string()
        } else {
            format!("relevant skills: {}", score.matched_skills.join(", "))
        };
        format!(
            "Assigned to {} (suitability {:.2}). Key factors: {}, current workload of {}, experience level {}.",
            agent.name, score.total, skills, load_before, agent.experience_level
        )
    }
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
