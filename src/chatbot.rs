//! Security assistant chat overlay
//!
//! Replies are canned: the four quick actions have fixed answers and every
//! other message gets a referral to the security team.

pub const GREETING: &str = "Hello! I'm your Security Assistant. How can I help you today?";

pub const QUICK_ACTIONS: [&str; 4] = [
    "How do I report phishing?",
    "Password reset help",
    "What is MFA?",
    "VPN connection issues",
];

const FALLBACK_REPLY: &str = "I understand you need help with that. For detailed assistance, \
     please contact our security team at security@company.com or call 1-800-SECURE-NOW.";

/// Canned reply for a message; quick actions match exactly
pub fn reply_for(message: &str) -> &'static str {
    match message {
        "How do I report phishing?" => {
            "To report phishing, forward the suspicious email to security@company.com \
             or use the Report page (press r). Never click links or download attachments \
             from suspicious emails."
        }
        "Password reset help" => {
            "To reset your password, go to the IT portal or contact the help desk at \
             1-800-SECURE-NOW. Make sure your new password is at least 12 characters with \
             a mix of letters, numbers, and symbols."
        }
        "What is MFA?" => {
            "Multi-Factor Authentication (MFA) adds an extra security layer by requiring \
             two or more verification methods. This typically includes your password plus \
             a code sent to your phone."
        }
        "VPN connection issues" => {
            "For VPN issues, first restart the VPN client. If problems persist, check your \
             internet connection or contact IT support. Make sure you're using the latest \
             version of the VPN software."
        }
        _ => FALLBACK_REPLY,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Chat {
    pub open: bool,
    pub input: String,
    /// Highlighted quick action
    pub cursor: usize,
    messages: Vec<ChatMessage>,
}

impl Default for Chat {
    fn default() -> Self {
        Self {
            open: false,
            input: String::new(),
            cursor: 0,
            messages: vec![ChatMessage {
                sender: Sender::Bot,
                text: GREETING.to_string(),
            }],
        }
    }
}

impl Chat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let len = QUICK_ACTIONS.len();
        self.cursor = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
    }

    /// Append a user message and return the reply to deliver later.
    /// Blank messages are ignored.
    pub fn send(&mut self, message: &str) -> Option<&'static str> {
        if message.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: message.to_string(),
        });
        tracing::debug!("chat message sent");
        Some(reply_for(message))
    }

    /// Send whatever is in the input box, clearing it
    pub fn send_input(&mut self) -> Option<&'static str> {
        let message = std::mem::take(&mut self.input);
        self.send(&message)
    }

    pub fn send_quick_action(&mut self) -> Option<&'static str> {
        self.send(QUICK_ACTIONS[self.cursor])
    }

    pub fn receive(&mut self, reply: &str) {
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: reply.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let chat = Chat::new();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].sender, Sender::Bot);
    }

    #[test]
    fn test_quick_actions_have_specific_replies() {
        for action in QUICK_ACTIONS {
            assert_ne!(reply_for(action), FALLBACK_REPLY, "{action}");
        }
        assert_eq!(reply_for("what is mfa?"), FALLBACK_REPLY);
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let mut chat = Chat::new();
        chat.input = "   ".to_string();
        assert_eq!(chat.send_input(), None);
        assert_eq!(chat.messages().len(), 1);
        assert!(chat.input.is_empty());
    }

    #[test]
    fn test_send_then_receive() {
        let mut chat = Chat::new();
        chat.move_cursor(false);
        assert_eq!(chat.cursor, 3);

        let reply = chat.send_quick_action().unwrap();
        assert!(reply.starts_with("For VPN issues"));
        assert_eq!(chat.messages().last().unwrap().sender, Sender::User);

        chat.receive(reply);
        assert_eq!(chat.messages().len(), 3);
        assert_eq!(chat.messages()[2].sender, Sender::Bot);
    }
}
