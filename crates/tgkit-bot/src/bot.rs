//! Bot API client.
//!
//! Every method is a `POST {base_url}/bot{token}/{method}` with a JSON body.
//! Responses use the `{ok, result | error_code, description, parameters}`
//! envelope; failures are mapped onto [`TelegramError`]. The client does not
//! check platform limits itself: an oversized text goes out as-is and comes
//! back as `BadRequest`.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tgkit_core::config::{BotConfig, DEFAULT_BASE_URL};
use tgkit_core::constants::{ChatAction, ParseMode};

use crate::error::{ResponseParameters, Result, TelegramError};
use crate::types::{ChatId, InputFile, Message, User};

/// Handle to one bot account. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct Bot {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl fmt::Debug for Bot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bot")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
    parameters: Option<ResponseParameters>,
}

#[derive(Serialize)]
struct SendMessageParams<'a> {
    chat_id: &'a ChatId,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<ParseMode>,
}

#[derive(Serialize)]
struct SendPhotoParams<'a> {
    chat_id: &'a ChatId,
    photo: &'a InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<ParseMode>,
}

#[derive(Serialize)]
struct SendChatActionParams<'a> {
    chat_id: &'a ChatId,
    action: ChatAction,
}

#[derive(Serialize)]
struct NoParams {}

impl Bot {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build a bot from config, applying its base URL and request timeout.
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build().map_err(TelegramError::from_transport)?;

        Ok(Self {
            client,
            token: config.token.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Point the bot at another Bot API server (self-hosted or a test double).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Call an arbitrary Bot API method and decode its `result`.
    pub async fn request<P, R>(&self, method: &str, params: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(method = %method, "calling Bot API");

        let resp = self
            .client
            .post(self.endpoint(method))
            .json(params)
            .send()
            .await
            .map_err(TelegramError::from_transport)?;

        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(TelegramError::from_transport)?;

        let envelope: ApiResponse<R> = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            // Proxies and outages answer with HTML; fall back to the status code.
            Err(_) if !(200..300).contains(&status) => {
                let err = TelegramError::from_response(status, None, None);
                warn!(method = %method, status, error = %err, "Bot API returned a non-JSON error");
                return Err(err);
            }
            Err(e) => return Err(e.into()),
        };

        if envelope.ok {
            return envelope.result.ok_or_else(|| {
                warn!(method = %method, "Bot API reported success without a result");
                TelegramError::Serialization(<serde_json::Error as serde::de::Error>::custom(
                    "successful response has no `result`",
                ))
            });
        }

        let err = TelegramError::from_response(
            status,
            envelope.description.as_deref(),
            envelope.parameters.as_ref(),
        );
        warn!(method = %method, status, error = %err, "Bot API request rejected");
        Err(err)
    }

    pub async fn get_me(&self) -> Result<User> {
        self.request("getMe", &NoParams {}).await
    }

    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: &str,
        parse_mode: Option<ParseMode>,
    ) -> Result<Message> {
        let chat_id = chat_id.into();
        let params = SendMessageParams {
            chat_id: &chat_id,
            text,
            parse_mode,
        };
        self.request("sendMessage", &params).await
    }

    pub async fn send_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: &InputFile,
        caption: Option<&str>,
        parse_mode: Option<ParseMode>,
    ) -> Result<Message> {
        let chat_id = chat_id.into();
        let params = SendPhotoParams {
            chat_id: &chat_id,
            photo,
            caption,
            parse_mode,
        };
        self.request("sendPhoto", &params).await
    }

    pub async fn send_chat_action(
        &self,
        chat_id: impl Into<ChatId>,
        action: ChatAction,
    ) -> Result<bool> {
        let chat_id = chat_id.into();
        self.request(
            "sendChatAction",
            &SendChatActionParams {
                chat_id: &chat_id,
                action,
            },
        )
        .await
    }
}
