//! Chat layer: the conversation session and its terminal front-end.

pub mod console;
pub mod session;
pub mod traits;

pub use console::{Command, Console};
pub use session::{ChatSession, PendingReply};
pub use traits::Responder;
