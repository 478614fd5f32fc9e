use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who wrote a message in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    /// The person typing into the chat.
    User,
    /// The navigation assistant.
    Assistant,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Author::User => write!(f, "user"),
            Author::Assistant => write!(f, "assistant"),
        }
    }
}

/// Represents a single message within a chat session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Sequential identifier, unique within its session.
    pub id: i64,
    /// The author of the message.
    pub author: Author,
    /// The text content of the message. May span several lines.
    pub text: String,
    /// When the message was appended to the transcript.
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(id: i64, author: Author, text: impl Into<String>) -> Self {
        Self {
            id,
            author,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Iterates over the display lines of the message text.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}
