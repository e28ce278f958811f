//! Ticket priority ranking

use crate::domain::Ticket;
use crate::keywords::KeywordMatcher;
use std::sync::Arc;

/// Divisor that keeps the recency term below 1.0, so it breaks ties between
/// equally urgent tickets without ever outweighing an urgency keyword.
const RECENCY_SCALE: f64 = 1e10;

/// Orders tickets by urgency-weighted priority, most urgent first.
pub struct TicketRanker {
    matcher: Arc<KeywordMatcher>,
}

impl TicketRanker {
    /// New ranker over a shared keyword matcher.
    pub fn new(matcher: Arc<KeywordMatcher>) -> Self {
        Self { matcher }
    }

    /// Priority of a single ticket: urgency score plus a bounded recency term.
    pub fn priority(&self, ticket: &Ticket) -> f64 {
        let urgency = self.matcher.urgency_score(&ticket.search_text());
        urgency as f64 + ticket.created_at / RECENCY_SCALE
    }

    /// Tickets in descending priority order.
    ///
    /// The sort is stable: tickets with identical priority keep their input
    /// order.
    pub fn rank<'a>(&self, tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
        let mut ranked: Vec<(&Ticket, f64)> = tickets
            .iter()
            .map(|t| (t, self.priority(t)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.into_iter().map(|(t, _)| t).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranker() -> TicketRanker {
        TicketRanker::new(Arc::new(KeywordMatcher::new()))
    }

    #[test]
    fn test_urgency_dominates_recency() {
        let r = ranker();
        let old_urgent = Ticket::new("T1", "Critical outage", "everything is down", 0.0);
        let fresh_request = Ticket::new("T2", "Access request", "new starter", 9_999_999_999.0);

        let input = [fresh_request, old_urgent];
        let ranked = r.rank(&input);
        assert_eq!(ranked[0].id, "T1");
        assert_eq!(ranked[1].id, "T2");
    }

    #[test]
    fn test_recency_breaks_equal_urgency() {
        let r = ranker();
        let older = Ticket::new("T1", "printer request", "toner", 1_000.0);
        let newer = Ticket::new("T2", "printer request", "paper", 2_000.0);

        let input = [older, newer];
        let ranked = r.rank(&input);
        assert_eq!(ranked[0].id, "T2");
    }

    #[test]
    fn test_equal_priority_keeps_input_order() {
        let r = ranker();
        let a = Ticket::new("T1", "printer request", "toner", 500.0);
        let b = Ticket::new("T2", "printer request", "toner", 500.0);

        let input = [a, b];
        let ranked = r.rank(&input);
        assert_eq!(ranked[0].id, "T1");
        assert_eq!(ranked[1].id, "T2");
    }

    #[test]
    fn test_priority_value() {
        let r = ranker();
        let t = Ticket::new("T1", "critical outage", "all down", 5_000_000_000.0);
        // 5 + 5 + 5 urgency, 0.5 recency
        assert!((r.priority(&t) - 15.5).abs() < 1e-9);
    }
}
