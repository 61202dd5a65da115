use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserConfig {
    /// File the raw message bytes are read from
    #[serde(default = "default_message_path")]
    pub message_path: String,

    /// Upper bound on bytes read into the message buffer
    #[serde(default = "default_message_capacity")]
    pub message_capacity: usize,

    /// Capacity of the answer buffer the extracted name is copied into
    #[serde(default = "default_answer_capacity")]
    pub answer_capacity: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            message_path: default_message_path(),
            message_capacity: default_message_capacity(),
            answer_capacity: default_answer_capacity(),
        }
    }
}

fn default_message_path() -> String {
    "iquery-file".to_string()
}

fn default_message_capacity() -> usize {
    10_000
}

fn default_answer_capacity() -> usize {
    2
}
