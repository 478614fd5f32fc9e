//! Intent matching using keyword containment.
//!
//! Single-pass scoring over the static knowledge base: every keyword found
//! in the lowercased input adds its length to its topic's score.

use serde::Serialize;
use tracing::debug;

use super::knowledge_base::{Topic, FALLBACK_RESPONSE, TOPICS};

/// Result of intent matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Winning topic name
    pub topic: &'static str,
    /// Sum of the lengths of the matched keywords
    pub score: usize,
    /// Position of the topic in the table
    pub index: usize,
}

/// Score of a single topic against already-lowercased input
pub fn score_topic(topic: &Topic, input: &str) -> usize {
    topic
        .keywords
        .iter()
        .filter(|keyword| input.contains(**keyword))
        .map(|keyword| keyword.chars().count())
        .sum()
}

/// Finds the topic with the strictly greatest score.
///
/// Ties keep the first declared topic. Returns `None` when nothing matched.
pub fn find_best_match(topics: &'static [Topic], user_input: &str) -> Option<MatchResult> {
    let input = user_input.to_lowercase();
    let mut best: Option<MatchResult> = None;
    let mut max_score = 0;

    for (index, topic) in topics.iter().enumerate() {
        let score = score_topic(topic, &input);
        if score > max_score {
            max_score = score;
            best = Some(MatchResult {
                topic: topic.name,
                score,
                index,
            });
        }
    }

    best
}

/// Maps free text to a canned response
#[derive(Debug, Clone, Copy)]
pub struct IntentMatcher {
    topics: &'static [Topic],
    fallback: &'static str,
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new(TOPICS, FALLBACK_RESPONSE)
    }
}

impl IntentMatcher {
    pub fn new(topics: &'static [Topic], fallback: &'static str) -> Self {
        Self { topics, fallback }
    }

    /// Classify the input without producing a response
    pub fn classify(&self, user_input: &str) -> Option<MatchResult> {
        find_best_match(self.topics, user_input)
    }

    /// Returns the response of the best topic, or the fallback text
    pub fn respond(&self, user_input: &str) -> &'static str {
        match self.classify(user_input) {
            Some(result) => {
                debug!(topic = result.topic, score = result.score, "Matched topic");
                self.topics[result.index].response
            }
            None => {
                debug!("No topic matched, using fallback");
                self.fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TIED: &[Topic] = &[
        Topic {
            name: "first",
            keywords: &["abc"],
            response: "first response",
        },
        Topic {
            name: "second",
            keywords: &["xyz"],
            response: "second response",
        },
    ];

    #[test]
    fn test_score_sums_keyword_lengths() {
        let topic = &TOPICS[3];
        assert_eq!(topic.name, "training");
        assert_eq!(score_topic(topic, "training courses"), 14);
        assert_eq!(score_topic(topic, "nothing here"), 0);
    }

    #[test]
    fn test_tie_keeps_first_declared() {
        let matcher = IntentMatcher::new(TIED, "fallback");
        assert_eq!(matcher.respond("xyz abc"), "first response");
        assert_eq!(matcher.respond("xyz"), "second response");
    }

    #[test]
    fn test_empty_input_falls_back() {
        let matcher = IntentMatcher::new(TIED, "fallback");
        assert_eq!(matcher.respond(""), "fallback");
        assert!(matcher.classify("").is_none());
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = IntentMatcher::new(TIED, "fallback");
        assert_eq!(matcher.respond("XyZ"), "second response");
    }
}
