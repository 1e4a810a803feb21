//! Stock [`CallbackContext`] implementation.

use std::fmt;
use std::sync::Arc;

use tgkit_bot::Bot;

use crate::types::{CallbackContext, JsonMap};

/// Bot handle plus shared references to the data of the current update.
///
/// Data lives behind `Arc` so the owner (a store keyed by user/chat id) keeps
/// its copy while handlers read through the context.
pub struct DefaultContext<UD = JsonMap, CD = JsonMap, BD = JsonMap> {
    bot: Bot,
    user_data: Option<Arc<UD>>,
    chat_data: Option<Arc<CD>>,
    bot_data: Arc<BD>,
}

impl<UD, CD, BD> DefaultContext<UD, CD, BD> {
    pub fn new(bot: Bot, bot_data: Arc<BD>) -> Self {
        Self {
            bot,
            user_data: None,
            chat_data: None,
            bot_data,
        }
    }

    pub fn with_user_data(mut self, user_data: Arc<UD>) -> Self {
        self.user_data = Some(user_data);
        self
    }

    pub fn with_chat_data(mut self, chat_data: Arc<CD>) -> Self {
        self.chat_data = Some(chat_data);
        self
    }
}

impl<UD, CD, BD> Clone for DefaultContext<UD, CD, BD> {
    fn clone(&self) -> Self {
        Self {
            bot: self.bot.clone(),
            user_data: self.user_data.clone(),
            chat_data: self.chat_data.clone(),
            bot_data: Arc::clone(&self.bot_data),
        }
    }
}

impl<UD, CD, BD> fmt::Debug for DefaultContext<UD, CD, BD> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultContext")
            .field("bot", &self.bot)
            .field("has_user_data", &self.user_data.is_some())
            .field("has_chat_data", &self.chat_data.is_some())
            .finish()
    }
}

impl<UD, CD, BD> CallbackContext for DefaultContext<UD, CD, BD>
where
    UD: Send + Sync + 'static,
    CD: Send + Sync + 'static,
    BD: Send + Sync + 'static,
{
    type UserData = UD;
    type ChatData = CD;
    type BotData = BD;

    fn bot(&self) -> &Bot {
        &self.bot
    }

    fn user_data(&self) -> Option<&UD> {
        self.user_data.as_deref()
    }

    fn chat_data(&self) -> Option<&CD> {
        self.chat_data.as_deref()
    }

    fn bot_data(&self) -> &BD {
        &self.bot_data
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_maps_by_default() {
        let mut bot_data = JsonMap::new();
        bot_data.insert("greeting".into(), json!("hello"));

        let ctx: DefaultContext = DefaultContext::new(Bot::new("1:t"), Arc::new(bot_data));
        assert!(ctx.user_data().is_none());
        assert!(ctx.chat_data().is_none());
        assert_eq!(ctx.bot_data()["greeting"], "hello");
    }

    #[test]
    fn user_and_chat_data_are_shared_not_copied() {
        let user_data = Arc::new(42_u32);
        let ctx = DefaultContext::<u32, String, ()>::new(Bot::new("1:t"), Arc::new(()))
            .with_user_data(Arc::clone(&user_data))
            .with_chat_data(Arc::new("chat".to_string()));

        let cloned = ctx.clone();
        assert_eq!(cloned.user_data(), Some(&42));
        assert_eq!(cloned.chat_data().map(String::as_str), Some("chat"));
        assert_eq!(Arc::strong_count(&user_data), 3);
    }

    #[test]
    fn debug_hides_token() {
        let ctx: DefaultContext = DefaultContext::new(Bot::new("1:secret"), Arc::new(JsonMap::new()));
        assert!(!format!("{ctx:?}").contains("secret"));
    }
}
