use serde::{Deserialize, Serialize};

/// Originator of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One exchanged chat message. Immutable once created; the transcript is an
/// ordered sequence of these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub sender: Sender,
    pub text: String,
}

impl TranscriptEntry {
    pub fn user(text: impl Into<String>) -> Self {
        TranscriptEntry {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        TranscriptEntry {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Wire payload for one send exchange.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub text: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_with_lowercase_sender() {
        let entry = TranscriptEntry::user("hi");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"sender":"user","text":"hi"}"#);

        let entry = TranscriptEntry::bot("hello");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"sender":"bot","text":"hello"}"#);
    }

    #[test]
    fn test_entry_round_trips() {
        let entry = TranscriptEntry::bot("Try restarting your VPN client.");
        let json = serde_json::to_string(&entry).unwrap();
        let back: TranscriptEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_chat_request_uses_camel_case_session_id() {
        let req = ChatRequest {
            text: "reset my password".to_string(),
            session_id: "sess-abc".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"text":"reset my password","sessionId":"sess-abc"}"#);
    }
}
