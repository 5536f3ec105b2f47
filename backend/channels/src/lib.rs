//! Telegram boundary for album aggregation: converts teloxide messages into
//! album items and renders albums back into `sendMediaGroup` requests.

pub mod telegram;
pub mod telegram_media;

pub use telegram::{BotSession, TelegramAlbum, TelegramAlbums, raw_item_from_message};
pub use telegram_media::{MAX_CAPTION_LENGTH, MAX_MEDIA_GROUP_SIZE, MIN_MEDIA_GROUP_SIZE, SendMediaGroup};
