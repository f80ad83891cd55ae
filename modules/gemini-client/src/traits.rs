use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Message Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

// =============================================================================
// TextGenerator Trait
// =============================================================================

/// One round-trip text generation call: role-tagged messages in, opaque
/// free text out. No retries, no streaming, no multi-turn state.
///
/// Pipelines take this as an injected dependency so tests can substitute
/// a deterministic double for the hosted model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, messages: &[Message]) -> Result<String>;
}
