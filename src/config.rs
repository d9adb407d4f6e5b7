// ⚙️ Mailroom Configuration
// Letter signer, compiled in from data/mailroom.json

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Built-in configuration document
pub const EMBEDDED_CONFIG: &str = include_str!("../data/mailroom.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailroomConfig {
    /// Name that signs every thank-you letter
    #[serde(default = "default_sender")]
    pub sender: String,
}

fn default_sender() -> String {
    "Kahyee".to_string()
}

impl Default for MailroomConfig {
    fn default() -> Self {
        MailroomConfig {
            sender: default_sender(),
        }
    }
}

impl MailroomConfig {
    /// Parse a configuration document; missing fields take their defaults
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse mailroom config JSON")
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }
}
