//! Terminal front-end for a chat session.
//!
//! Renders the transcript line by line and turns input lines into either
//! user messages or slash commands (quick actions, help, transcript, quit).

use crate::brain::knowledge_base::{quick_action, QuickAction, QUICK_ACTIONS};
use crate::chat::session::ChatSession;
use crate::chat::traits::Responder;
use crate::config::AssistantConfig;
use crate::error::AppError;
use crate::models::{Author, Message};
use std::borrow::Cow;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::sleep;
use tracing::{debug, info, warn};

const SUBTITLE: &str = "Airport Fire Officers Association Guide";
const USER_LABEL: &str = "You";

/// One parsed line of console input
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Free text for the assistant
    Say(&'a str),
    /// A preset query
    QuickAction(&'static QuickAction),
    /// List quick actions and commands
    Help,
    /// Dump the transcript as JSON
    Transcript,
    /// Leave the chat
    Quit,
    /// A slash command nobody recognises
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let Some(name) = line.trim().strip_prefix('/') else {
            return Command::Say(line);
        };
        let name = name.trim();

        match name.to_lowercase().as_str() {
            "quit" | "exit" => Command::Quit,
            "help" | "actions" => Command::Help,
            "transcript" => Command::Transcript,
            other => quick_action(other)
                .map(Command::QuickAction)
                .unwrap_or(Command::Unknown(name)),
        }
    }
}

/// Line-oriented chat UI writing to any `Write` sink
pub struct Console<W: Write> {
    out: W,
    assistant_name: String,
    website: String,
    quick_action_delay: Duration,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, config: &AssistantConfig) -> Self {
        Self {
            out,
            assistant_name: config.assistant_name.clone(),
            website: config.website_display().to_string(),
            quick_action_delay: config.quick_action_delay(),
        }
    }

    /// Gives back the output sink.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Runs the chat until `/quit` or end of input.
    pub async fn run<R, I>(&mut self, session: &mut ChatSession<R>, mut input: I) -> Result<(), AppError>
    where
        R: Responder,
        I: AsyncBufRead + Unpin,
    {
        self.render_header()?;
        for message in session.messages() {
            self.render_message(message)?;
        }
        self.render_help()?;

        let mut buf = Vec::new();
        loop {
            self.prompt()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                debug!("End of input");
                break;
            }

            let raw = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = raw {
                warn!("Input line is not valid UTF-8, replacing invalid bytes");
            }
            let line = raw.trim_end_matches(|c: char| c == '\n' || c == '\r');

            match Command::parse(line) {
                Command::Quit => break,
                Command::Help => self.render_help()?,
                Command::Transcript => self.render_transcript(session.messages())?,
                Command::Unknown(name) => writeln!(
                    self.out,
                    "Unknown command '/{}'. Type /help to see what I can do.",
                    name
                )?,
                Command::QuickAction(action) => {
                    info!(action = action.command, "Quick action selected");
                    if !self.quick_action_delay.is_zero() {
                        sleep(self.quick_action_delay).await;
                    }
                    self.exchange(session, action.query()).await?;
                }
                Command::Say(text) => self.exchange(session, text).await?,
            }
        }

        self.render_footer()?;
        self.out.flush()?;
        info!(session_id = session.id(), messages = session.messages().len(), "Chat ended");
        Ok(())
    }

    async fn exchange<R: Responder>(
        &mut self,
        session: &mut ChatSession<R>,
        text: &str,
    ) -> Result<(), AppError> {
        let Some(pending) = session.submit(text) else {
            return Ok(());
        };

        if let Some(message) = session.messages().last() {
            self.render_message(message)?;
        }
        if session.is_composing() {
            writeln!(self.out, "{} is typing...", self.assistant_name)?;
            self.out.flush()?;
        }

        let reply = session.resolve(pending).await;
        self.render_message(reply)
    }

    fn prompt(&mut self) -> Result<(), AppError> {
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }

    fn render_header(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "=== {} ===", self.assistant_name)?;
        writeln!(self.out, "{}", SUBTITLE)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn render_footer(&mut self) -> Result<(), AppError> {
        writeln!(self.out)?;
        writeln!(self.out, "For more information, visit {}", self.website)?;
        Ok(())
    }

    fn render_help(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "Quick Actions:")?;
        for action in QUICK_ACTIONS {
            writeln!(self.out, "  /{:<12} {}", action.command, action.label)?;
        }
        writeln!(self.out, "Commands: /help /transcript /quit")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn render_message(&mut self, message: &Message) -> Result<(), AppError> {
        let label = match message.author {
            Author::Assistant => self.assistant_name.as_str(),
            Author::User => USER_LABEL,
        };
        writeln!(self.out, "{}:", label)?;
        for line in message.lines() {
            writeln!(self.out, "  {}", line)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn render_transcript(&mut self, messages: &[Message]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(messages)?;
        writeln!(self.out, "{}", json)?;
        Ok(())
    }
}
