use serde::Deserialize;
use tgkit_core::CoreError;

/// Errors produced by Bot API calls.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// The request was malformed or violated a platform limit (HTTP 400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The bot lacks the rights for this action (blocked, kicked, ...).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Another getUpdates/webhook consumer is using the same token.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Flood control exceeded. Retry in {retry_after} seconds")]
    RetryAfter { retry_after: u64 },

    #[error("Group migrated to supergroup. New chat id: {new_chat_id}")]
    ChatMigrated { new_chat_id: i64 },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Timed out")]
    TimedOut,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, TelegramError>;

/// `parameters` object attached to some failed responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseParameters {
    pub migrate_to_chat_id: Option<i64>,
    pub retry_after: Option<u64>,
}

impl TelegramError {
    /// Map a failed Bot API response onto the error taxonomy.
    ///
    /// `parameters` wins over the status code: a migration or flood-wait hint
    /// is more actionable than the generic 400/429 it arrives with.
    pub fn from_response(
        status: u16,
        description: Option<&str>,
        parameters: Option<&ResponseParameters>,
    ) -> Self {
        if let Some(params) = parameters {
            if let Some(new_chat_id) = params.migrate_to_chat_id {
                return TelegramError::ChatMigrated { new_chat_id };
            }
            if let Some(retry_after) = params.retry_after {
                return TelegramError::RetryAfter { retry_after };
            }
        }

        let message = normalize_description(description.unwrap_or("Unknown HTTPError"));
        match status {
            400 => TelegramError::BadRequest(message),
            401 | 404 => TelegramError::InvalidToken(message),
            403 => TelegramError::Forbidden(message),
            409 => TelegramError::Conflict(message),
            502 => TelegramError::NetworkError("Bad Gateway".to_string()),
            _ => TelegramError::NetworkError(format!("{message} ({status})")),
        }
    }

    /// Classify a transport failure. The URL is stripped because it carries the token.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TelegramError::TimedOut
        } else {
            TelegramError::NetworkError(err.without_url().to_string())
        }
    }

    /// True for failures worth retrying with the same request.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            TelegramError::NetworkError(_) | TelegramError::TimedOut | TelegramError::RetryAfter { .. }
        )
    }
}

/// Strip Telegram's error prefixes and capitalise what remains.
///
/// `"Bad Request: message is too long"` becomes `"Message is too long"`,
/// `"Bad Request: MEDIA_CAPTION_TOO_LONG"` becomes `"Media_caption_too_long"`.
/// Descriptions without a known prefix are returned unchanged.
pub fn normalize_description(description: &str) -> String {
    let stripped = ["Error: ", "[Error]: ", "Bad Request: "]
        .iter()
        .fold(description, |msg, prefix| {
            msg.strip_prefix(prefix).unwrap_or(msg)
        });

    if stripped.len() == description.len() {
        return description.to_string();
    }

    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
