//! Notification hook messages
//!
//! Maps an assistant hook payload (read as JSON from stdin) to the short sentence
//! announced when a task finishes or needs attention.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{PromptKitError, Result};

/// Notification type sent when the assistant waits on a permission prompt
const PERMISSION_PROMPT: &str = "permission_prompt";

/// The fields of a hook payload that select the message; everything else is ignored
///
/// Both fields are kept as raw JSON so a missing, null or non-string value falls
/// through to the default message instead of rejecting the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HookEvent {
    #[serde(default)]
    pub hook_event_name: Value,

    #[serde(default)]
    pub notification_type: Value,
}

impl HookEvent {
    /// Parse a hook payload
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| PromptKitError::InvalidHookInput {
            reason: e.to_string(),
        })
    }

    /// Sentence to announce for this event
    pub fn message(&self) -> &'static str {
        match self.hook_event_name.as_str().unwrap_or_default() {
            "Stop" => "Task complete.",
            "SubagentStop" => "Subagent finished.",
            "Notification" => {
                if self.notification_type.as_str() == Some(PERMISSION_PROMPT) {
                    "Permission required."
                } else {
                    "Claude needs attention."
                }
            }
            _ => "Claude Code notification.",
        }
    }
}
