//! # Brain Module
//!
//! Keyword-based FAQ answering for the AFOA assistant.
//!
//! ## Components
//! - `knowledge_base`: static topics, greeting, fallback text and quick actions
//! - `intent`: single-pass keyword scoring that picks a topic

pub mod intent;
pub mod knowledge_base;

// Note: some types are only consumed by the test suite
#[allow(unused_imports)]
pub use intent::{find_best_match, IntentMatcher, MatchResult};
#[allow(unused_imports)]
pub use knowledge_base::{QuickAction, Topic, FALLBACK_RESPONSE, GREETING, QUICK_ACTIONS, TOPICS};
