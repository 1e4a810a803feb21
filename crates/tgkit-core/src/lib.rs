pub mod config;
pub mod constants;
pub mod enums;
pub mod error;

pub use config::{BotConfig, TgkitConfig};
pub use enums::EnumMember;
pub use error::{CoreError, Result};
