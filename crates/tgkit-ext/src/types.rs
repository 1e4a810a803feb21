//! Type parameters for callback contexts.
//!
//! Handlers are generic over four choices:
//!
//! - `CCT`: the context type itself, any [`CallbackContext`] implementation
//!   ([`DefaultContext`](crate::context::DefaultContext) or a custom one);
//! - `UD`: user data, one value per user;
//! - `CD`: chat data, one value per chat;
//! - `BD`: bot data, a single value shared by every handler.
//!
//! These are compile-time aids only. Nothing here stores or dispatches data.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use tgkit_bot::Bot;

use crate::context::DefaultContext;

/// Default data container: a free-form JSON object.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Upper bound for the `CCT` type parameter.
///
/// Data is handed out by shared reference; data types that need to change
/// at runtime bring their own interior mutability (`Mutex`, `RwLock`, ...).
pub trait CallbackContext: Send + Sync + 'static {
    /// `UD`: data kept per user.
    type UserData: Send + Sync + 'static;
    /// `CD`: data kept per chat.
    type ChatData: Send + Sync + 'static;
    /// `BD`: data shared across the whole bot.
    type BotData: Send + Sync + 'static;

    fn bot(&self) -> &Bot;

    /// `None` when the update has no associated user (e.g. channel posts).
    fn user_data(&self) -> Option<&Self::UserData>;

    /// `None` when the update has no associated chat (e.g. inline queries).
    fn chat_data(&self) -> Option<&Self::ChatData>;

    fn bot_data(&self) -> &Self::BotData;
}

/// Zero-sized record of the context type and the three data types an
/// application uses, with [`DefaultContext`] and [`JsonMap`] as defaults.
pub struct ContextTypes<CCT = DefaultContext, UD = JsonMap, CD = JsonMap, BD = JsonMap> {
    _types: PhantomData<fn() -> (CCT, UD, CD, BD)>,
}

impl<CCT, UD, CD, BD> ContextTypes<CCT, UD, CD, BD>
where
    CCT: CallbackContext<UserData = UD, ChatData = CD, BotData = BD>,
{
    pub const fn new() -> Self {
        Self {
            _types: PhantomData,
        }
    }
}

impl<CCT, UD, CD, BD> ContextTypes<CCT, UD, CD, BD> {
    pub fn context_type_name(&self) -> &'static str {
        type_name::<CCT>()
    }

    pub fn user_data_type_name(&self) -> &'static str {
        type_name::<UD>()
    }

    pub fn chat_data_type_name(&self) -> &'static str {
        type_name::<CD>()
    }

    pub fn bot_data_type_name(&self) -> &'static str {
        type_name::<BD>()
    }
}

impl<CCT, UD, CD, BD> Default for ContextTypes<CCT, UD, CD, BD>
where
    CCT: CallbackContext<UserData = UD, ChatData = CD, BotData = BD>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<CCT, UD, CD, BD> Clone for ContextTypes<CCT, UD, CD, BD> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<CCT, UD, CD, BD> Copy for ContextTypes<CCT, UD, CD, BD> {}

impl<CCT, UD, CD, BD> fmt::Debug for ContextTypes<CCT, UD, CD, BD> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextTypes")
            .field("context", &self.context_type_name())
            .field("user_data", &self.user_data_type_name())
            .field("chat_data", &self.chat_data_type_name())
            .field("bot_data", &self.bot_data_type_name())
            .finish()
    }
}
