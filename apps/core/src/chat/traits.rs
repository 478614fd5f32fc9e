use crate::brain::IntentMatcher;
use async_trait::async_trait;

/// Produces the assistant's reply to a user message.
///
/// The session only depends on this trait, so the keyword matcher can be
/// swapped for a test double.
#[async_trait]
pub trait Responder: Send + Sync + 'static {
    /// Returns the text of the assistant message answering `prompt`.
    async fn respond(&self, prompt: &str) -> String;
}

#[async_trait]
impl Responder for IntentMatcher {
    async fn respond(&self, prompt: &str) -> String {
        IntentMatcher::respond(self, prompt).to_string()
    }
}
