use crate::brain::GREETING;
use crate::chat::traits::Responder;
use crate::models::{Author, Message};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Ticket for a user message that is still waiting for its reply.
///
/// Returned by [`ChatSession::submit`] and consumed by [`ChatSession::resolve`].
#[derive(Debug)]
#[must_use = "a pending reply must be resolved to keep the transcript balanced"]
pub struct PendingReply {
    /// Id of the user message being answered.
    pub message_id: i64,
    prompt: String,
}

/// A single chat conversation.
///
/// Owns the append-only transcript and the "assistant is composing" flag.
/// Every accepted user message is followed by exactly one assistant message.
pub struct ChatSession<R: Responder> {
    id: String,
    responder: R,
    reply_delay: Duration,
    messages: Vec<Message>,
    composing: bool,
    next_id: i64,
}

impl<R: Responder> ChatSession<R> {
    /// Creates a session whose transcript starts with the assistant's greeting.
    pub fn new(responder: R, reply_delay: Duration) -> Self {
        let mut session = Self {
            id: Uuid::new_v4().to_string(),
            responder,
            reply_delay,
            messages: Vec::new(),
            composing: false,
            next_id: 1,
        };
        session.push(Author::Assistant, GREETING);
        info!(session_id = %session.id, "Chat session started");
        session
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The transcript, in creation order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True between a submit and the matching reply.
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    fn push(&mut self, author: Author, text: impl Into<String>) -> &Message {
        let message = Message::new(self.next_id, author, text);
        self.next_id += 1;
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Appends a user message and marks the assistant as composing.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            debug!(session_id = %self.id, "Ignoring blank submission");
            return None;
        }

        let message_id = self.push(Author::User, text).id;
        self.composing = true;
        Some(PendingReply {
            message_id,
            prompt: text.to_string(),
        })
    }

    /// Waits the simulated thinking time, then appends the assistant's reply.
    #[instrument(skip(self, pending), fields(session_id = %self.id, message_id = pending.message_id))]
    pub async fn resolve(&mut self, pending: PendingReply) -> &Message {
        if !self.reply_delay.is_zero() {
            sleep(self.reply_delay).await;
        }
        let reply = self.responder.respond(&pending.prompt).await;
        self.composing = false;
        self.push(Author::Assistant, reply)
    }

    /// Submits `text` and waits for the reply.
    ///
    /// Returns the assistant message, or `None` for blank input.
    pub async fn send(&mut self, text: &str) -> Option<&Message> {
        let pending = self.submit(text)?;
        Some(self.resolve(pending).await)
    }
}
