//! Chat action indicator that stays visible while a reply is being prepared.
//!
//! Telegram clears a chat action after ~5 seconds, so it is re-sent every 4s
//! until the handle is stopped or dropped.

use std::time::Duration;

use tracing::debug;

use tgkit_core::constants::ChatAction;

use crate::bot::Bot;
use crate::types::ChatId;

const REFRESH_INTERVAL: Duration = Duration::from_secs(4);

/// Handle to a background chat action loop. Dropping it stops the loop.
#[derive(Debug)]
pub struct ChatActionHandle(tokio::task::JoinHandle<()>);

impl ChatActionHandle {
    /// Show `action` in `chat_id` immediately, then refresh it every 4 seconds.
    pub fn start(bot: Bot, chat_id: impl Into<ChatId>, action: ChatAction) -> Self {
        let chat_id = chat_id.into();
        let handle = tokio::spawn(async move {
            loop {
                if let Err(e) = bot.send_chat_action(chat_id.clone(), action).await {
                    debug!(error = %e, chat_id = %chat_id, action = %action, "chat action not delivered");
                }
                tokio::time::sleep(REFRESH_INTERVAL).await;
            }
        });
        ChatActionHandle(handle)
    }

    /// Shortcut for the common [`ChatAction::TYPING`] case.
    pub fn typing(bot: Bot, chat_id: impl Into<ChatId>) -> Self {
        Self::start(bot, chat_id, ChatAction::TYPING)
    }

    pub fn stop(self) {
        self.0.abort();
    }
}

impl Drop for ChatActionHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}
