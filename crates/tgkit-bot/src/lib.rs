pub mod bot;
pub mod error;
pub mod send;
pub mod types;
pub mod typing;

pub use bot::Bot;
pub use error::{Result, TelegramError};
pub use types::{Chat, ChatId, InputFile, Message, User};
