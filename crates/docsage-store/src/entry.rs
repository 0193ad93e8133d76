//! Saved-entry and conversation types.

use serde::{Deserialize, Serialize};

/// One question/answer exchange within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub question: String,
    pub answer: String,
}

/// One persisted row: the extracted content plus the rendered transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedEntry {
    #[serde(rename = "Extracted_Content")]
    pub extracted_content: String,
    #[serde(rename = "Chat_History")]
    pub chat_history: String,
}

/// Render a conversation for persistence: each turn as `Q: …\nA: …`, turns
/// separated by blank lines.
pub fn render_transcript(turns: &[ConversationTurn]) -> String {
    turns
        .iter()
        .map(|turn| format!("Q: {}\nA: {}", turn.question, turn.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_transcript() {
        let turns = vec![
            ConversationTurn {
                question: "What is it about?".into(),
                answer: "A test.".into(),
            },
            ConversationTurn {
                question: "Who wrote it?".into(),
                answer: "Nobody.".into(),
            },
        ];
        assert_eq!(
            render_transcript(&turns),
            "Q: What is it about?\nA: A test.\n\nQ: Who wrote it?\nA: Nobody."
        );
    }

    #[test]
    fn test_render_empty_history() {
        assert_eq!(render_transcript(&[]), "");
    }
}
