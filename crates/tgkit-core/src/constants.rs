//! Bot API constants.
//!
//! Every closed set of values is declared with [`string_enum!`](crate::string_enum)
//! or [`int_enum!`](crate::int_enum), so members can be passed wherever the Bot
//! API expects the raw string or number. Limits are those documented by
//! Telegram; the client never enforces them, the server does.

use crate::enums::EnumMember;
use crate::{int_enum, string_enum};

/// Bot API version this crate is written against.
pub const BOT_API_VERSION: &str = "6.0";
pub const BOT_API_VERSION_INFO: (u32, u32) = (6, 0);

/// Telegram's servers only accept webhooks on these ports.
pub const SUPPORTED_WEBHOOK_PORTS: [u16; 4] = [443, 80, 88, 8443];

/// Type names of every enumeration exported by this module.
pub const ALL_ENUMS: &[&str] = &[
    <BotCommandLimit as EnumMember>::TYPE_NAME,
    <CallbackQueryLimit as EnumMember>::TYPE_NAME,
    <ChatAction as EnumMember>::TYPE_NAME,
    <ChatType as EnumMember>::TYPE_NAME,
    <FileSizeLimit as EnumMember>::TYPE_NAME,
    <MessageEntityType as EnumMember>::TYPE_NAME,
    <MessageLimit as EnumMember>::TYPE_NAME,
    <ParseMode as EnumMember>::TYPE_NAME,
];

string_enum! {
    /// Formatting options for `parse_mode`.
    pub struct ParseMode {
        /// Legacy Markdown; prefer `MARKDOWN_V2`.
        MARKDOWN = "Markdown",
        MARKDOWN_V2 = "MarkdownV2",
        HTML = "HTML",
    }
}

string_enum! {
    /// Values of `Chat.type`.
    pub struct ChatType {
        /// Pseudo-type for messages sent on behalf of a chat.
        SENDER = "sender",
        PRIVATE = "private",
        GROUP = "group",
        SUPERGROUP = "supergroup",
        CHANNEL = "channel",
    }
}

string_enum! {
    /// Actions accepted by `sendChatAction`.
    pub struct ChatAction {
        CHOOSE_STICKER = "choose_sticker",
        FIND_LOCATION = "find_location",
        RECORD_VOICE = "record_voice",
        RECORD_VIDEO = "record_video",
        RECORD_VIDEO_NOTE = "record_video_note",
        TYPING = "typing",
        UPLOAD_VOICE = "upload_voice",
        UPLOAD_DOCUMENT = "upload_document",
        UPLOAD_PHOTO = "upload_photo",
        UPLOAD_VIDEO = "upload_video",
        UPLOAD_VIDEO_NOTE = "upload_video_note",
    }
}

string_enum! {
    /// Values of `MessageEntity.type`.
    pub struct MessageEntityType {
        MENTION = "mention",
        HASHTAG = "hashtag",
        CASHTAG = "cashtag",
        PHONE_NUMBER = "phone_number",
        BOT_COMMAND = "bot_command",
        URL = "url",
        EMAIL = "email",
        BOLD = "bold",
        ITALIC = "italic",
        CODE = "code",
        PRE = "pre",
        TEXT_LINK = "text_link",
        TEXT_MENTION = "text_mention",
        UNDERLINE = "underline",
        STRIKETHROUGH = "strikethrough",
        SPOILER = "spoiler",
    }
}

int_enum! {
    /// Length limits for message text, counted in characters after entity parsing.
    pub struct MessageLimit: usize {
        TEXT_LENGTH = 4096,
        CAPTION_LENGTH = 1024,
        MIN_TEXT_LENGTH = 1,
        /// Maximum payload of a `t.me/<bot>?start=` deep link.
        DEEP_LINK_LENGTH = 64,
        MESSAGE_ENTITIES = 100,
    }
}

int_enum! {
    /// File size limits in bytes.
    pub struct FileSizeLimit: u64 {
        FILESIZE_DOWNLOAD = 20_000_000,
        FILESIZE_UPLOAD = 50_000_000,
        PHOTOSIZE_UPLOAD = 10_000_000,
    }
}

int_enum! {
    pub struct CallbackQueryLimit: usize {
        ANSWER_CALLBACK_QUERY_TEXT_LENGTH = 200,
    }
}

int_enum! {
    /// Limits for `setMyCommands`.
    pub struct BotCommandLimit: usize {
        MIN_COMMAND = 1,
        MAX_COMMAND = 32,
        MAX_DESCRIPTION = 256,
        MAX_COMMAND_NUMBER = 100,
    }
    aliases {
        MIN_DESCRIPTION = MIN_COMMAND,
    }
}
