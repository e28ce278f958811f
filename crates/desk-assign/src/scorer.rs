//! Agent suitability scoring

use crate::domain::Agent;

/// Weights combining the component scores into a suitability total.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    /// Weight applied to the skill match score
    pub skill: f64,
    /// Weight applied to the workload score
    pub load: f64,
    /// Multiplier applied to the agent's experience level
    pub experience: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skill: 0.7,
            load: 0.3,
            experience: 0.1,
        }
    }
}

/// Suitability of one agent for one ticket
#[derive(Debug, Clone)]
pub struct SuitabilityScore {
    /// Weighted combination of the components below
    pub total: f64,
    /// Sum of the agent's proficiency weights for matched skills
    pub skill_score: f64,
    /// Workload component, `10 / (1 + load)`, in (0, 10]
    pub load_score: f64,
    /// Experience component
    pub experience_score: f64,
    /// Matched skills the agent declares with nonzero proficiency
    pub matched_skills: Vec<&'static str>,
}

/// Scores (ticket, agent) pairs from skill match, live workload, and
/// experience.
#[derive(Debug, Default)]
pub struct SuitabilityScorer {
    weights: ScoreWeights,
}

impl SuitabilityScorer {
    /// New scorer with default weights.
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    /// New scorer with custom weights.
    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Score an agent for a ticket whose text matched `ticket_skills`.
    ///
    /// `current_load` is the agent's in-run load, not the payload value, so
    /// assignments committed earlier in the same run already count against
    /// the agent.
    pub fn score(
        &self,
        agent: &Agent,
        ticket_skills: &[&'static str],
        current_load: u32,
    ) -> SuitabilityScore {
        let mut skill_score = 0.0;
        let mut matched_skills = Vec::new();
        for &skill in ticket_skills {
            if let Some(&weight) = agent.skills.get(skill) {
                if weight > 0.0 {
                    skill_score += weight;
                    matched_skills.push(skill);
                }
            }
        }

        let load_score = 10.0 / (1.0 + f64::from(current_load));
        let experience_score = agent.experience_level * self.weights.experience;
        let total = skill_score * self.weights.skill + load_score * self.weights.load + experience_score;

        SuitabilityScore {
            total,
            skill_score,
            load_score,
            experience_score,
            matched_skills,
        }
    }
}
