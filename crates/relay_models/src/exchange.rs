//! The ordered conversation transcript.

use crate::message::{Message, Role};

/// An ordered, append-only transcript of conversation messages.
///
/// A system message, when provided, is the first entry and survives
/// [`clear`](Exchange::clear). Each session owns exactly one exchange;
/// nothing is shared between sessions.
#[derive(Debug, Clone, Default)]
pub struct Exchange {
    messages: Vec<Message>,
}

impl Exchange {
    /// Creates an empty exchange.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an exchange whose first entry is a system message.
    #[must_use]
    pub fn with_system(system: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system)],
        }
    }

    /// Appends a message.
    pub fn push(&mut self, message: Message) {
        tracing::debug!(role = %message.role, "appending message to exchange");
        self.messages.push(message);
    }

    /// Appends a user message with the given text.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Message::user(text));
    }

    /// Appends an assistant message with the given text.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.push(Message::assistant(text));
    }

    /// Returns the full message sequence in order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the last `n` messages, oldest first.
    #[must_use]
    pub fn tail(&self, n: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    /// Returns the most recent message, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Removes every message except a leading system message.
    pub fn clear(&mut self) {
        let keep_system = self
            .messages
            .first()
            .is_some_and(|m| m.role == Role::System);
        if keep_system {
            self.messages.truncate(1);
        } else {
            self.messages.clear();
        }
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether the exchange holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates over the messages in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Exchange {
    type Item = &'a Message;
    type IntoIter = core::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl core::fmt::Display for Exchange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, message) in self.messages.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", message.role, message.content)?;
        }
        Ok(())
    }
}
