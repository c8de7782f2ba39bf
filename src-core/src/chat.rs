//! Canned-response chat widget.
//!
//! Replies come from ordered keyword rules loaded from TOML; the first rule
//! with a keyword contained in the (lower-cased) message wins. The typing
//! delay is the caller's business: [`ChatSession::send`] hands back the reply
//! and [`ChatSession::deliver`] appends it once the timer fires.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Embedded copy of `src-core/config/chat_responses.toml`.
const DEFAULT_CHAT_RULES: &str = include_str!("../config/chat_responses.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatRule {
    pub keywords: Vec<String>,
    pub reply: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatRules {
    pub greeting: String,
    pub fallback: String,
    #[serde(default)]
    pub rules: Vec<ChatRule>,
}

impl ChatRules {
    pub fn respond(&self, input: &str) -> &str {
        let lower = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lower.contains(&k.to_lowercase())))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(self.fallback.as_str())
    }
}

/// Load chat rules from a TOML file.
pub fn load_chat_rules(path: &Path) -> Result<ChatRules> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read chat rules at {:?}", path))?;
    let rules: ChatRules = toml::from_str(&content).context("Invalid chat rules TOML")?;
    Ok(rules)
}

/// Rules embedded at compile time.
///
/// # Panics
/// Panics if the embedded TOML is invalid (a build-time bug, covered by tests).
pub fn default_chat_rules() -> ChatRules {
    toml::from_str(DEFAULT_CHAT_RULES).expect("embedded chat_responses.toml must be valid TOML")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
}

/// One visitor's conversation with the assistant.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    rules: ChatRules,
    messages: Vec<ChatMessage>,
    typing: bool,
    next_id: u64,
}

impl ChatSession {
    /// Start a conversation with the greeting already shown.
    pub fn new(rules: ChatRules) -> Self {
        let mut session = Self {
            rules,
            messages: Vec::new(),
            typing: false,
            next_id: 1,
        };
        let greeting = session.rules.greeting.clone();
        session.push(greeting, Sender::Bot);
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True between a user message and the bot's reply.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Record the user's message and return the reply to deliver later.
    /// Blank input is ignored and returns `None`.
    pub fn send(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let reply = self.rules.respond(text).to_string();
        self.push(text.to_string(), Sender::User);
        self.typing = true;
        debug!("Chat reply queued");
        Some(reply)
    }

    /// Append a bot reply and clear the typing indicator.
    pub fn deliver(&mut self, reply: String) {
        self.push(reply, Sender::Bot);
        self.typing = false;
    }

    fn push(&mut self, text: String, sender: Sender) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
        });
        self.next_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_rules_load() {
        let rules = default_chat_rules();
        assert_eq!(rules.rules.len(), 4);
        assert!(rules.greeting.contains("wellness assistant"));
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive_and_ordered() {
        let rules = default_chat_rules();
        assert!(rules.respond("Can I BOOK a visit?").contains("discovery call"));
        assert!(rules.respond("what does it cost").contains("insurance"));
        assert!(rules.respond("my neck hurts").contains("musculoskeletal"));
        assert!(rules.respond("any discount?").contains("Dr. Ho"));
        // "book" rule comes before "price"
        assert!(rules.respond("price to book").contains("discovery call"));
        assert_eq!(rules.respond("hello"), rules.fallback);
    }

    #[test]
    fn test_session_flow() {
        let mut session = ChatSession::new(default_chat_rules());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);

        assert!(session.send("   ").is_none());
        assert!(!session.is_typing());

        let reply = session.send("  I have back pain ").unwrap();
        assert!(session.is_typing());
        assert_eq!(session.messages().last().unwrap().text, "I have back pain");

        session.deliver(reply);
        assert!(!session.is_typing());
        let ids: Vec<_> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(session.messages()[2].sender, Sender::Bot);
    }

    #[test]
    fn test_load_chat_rules_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
greeting = "Hello"
fallback = "Sorry?"

[[rules]]
keywords = ["hours"]
reply = "We are open 9 to 5."
"#
        )
        .unwrap();
        let rules = load_chat_rules(file.path()).unwrap();
        assert_eq!(rules.respond("What are your HOURS"), "We are open 9 to 5.");
        assert_eq!(rules.respond("hi"), "Sorry?");
    }
}
