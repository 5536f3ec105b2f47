//! Telegram boundary: turns teloxide messages into album items and holds the bot session.

use albumkit_config::TelegramConfig;
use albumkit_core::{Album, ContentKind, MessageEntity, ParseMode, PhotoSize, RawItem};
use anyhow::{Context, Result};
use teloxide::{Bot, types::Message};
use tracing::{debug, warn};

/// Album received through a teloxide bot.
pub type TelegramAlbum = Album<BotSession>;

/// Session handle attached to every album: the bot it arrived on and its caption defaults.
#[derive(Debug, Clone)]
pub struct BotSession {
    pub bot: Bot,
    pub default_parse_mode: Option<ParseMode>,
}

impl BotSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            bot: Bot::new(token),
            default_parse_mode: None,
        }
    }

    pub fn from_config(config: &TelegramConfig) -> Self {
        Self {
            bot: Bot::new(config.bot_token.clone()),
            default_parse_mode: config.default_parse_mode,
        }
    }

    pub fn with_default_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.default_parse_mode = Some(parse_mode);
        self
    }
}

/// Content type name of a message, as the Bot API spells it.
fn content_kind(msg: &Message) -> ContentKind {
    if msg.photo().is_some() {
        ContentKind::Photo
    } else if msg.video().is_some() {
        ContentKind::Video
    } else if msg.audio().is_some() {
        ContentKind::Audio
    } else if msg.document().is_some() {
        ContentKind::Document
    } else if msg.sticker().is_some() {
        ContentKind::from("sticker")
    } else if msg.animation().is_some() {
        ContentKind::from("animation")
    } else if msg.voice().is_some() {
        ContentKind::from("voice")
    } else if msg.video_note().is_some() {
        ContentKind::from("video_note")
    } else if msg.text().is_some() {
        ContentKind::from("text")
    } else {
        ContentKind::from("unknown")
    }
}

/// Convert one delivered teloxide message into an album item.
pub fn raw_item_from_message(msg: &Message) -> Result<RawItem> {
    let kind = content_kind(msg);

    let photo = msg
        .photo()
        .map(|sizes| {
            sizes
                .iter()
                .map(|p| PhotoSize {
                    file_id: p.file.id.to_string(),
                    file_unique_id: p.file.unique_id.to_string(),
                    width: p.width,
                    height: p.height,
                })
                .collect()
        })
        .unwrap_or_default();

    let file_id = match kind {
        ContentKind::Video => msg.video().map(|v| v.file.id.to_string()),
        ContentKind::Audio => msg.audio().map(|a| a.file.id.to_string()),
        ContentKind::Document => msg.document().map(|d| d.file.id.to_string()),
        _ => None,
    };

    // Entities go through their Bot API JSON form.
    let caption_entities = msg
        .caption_entities()
        .map(|entities| {
            let json = serde_json::to_value(entities)?;
            serde_json::from_value::<Vec<MessageEntity>>(json)
        })
        .transpose()
        .with_context(|| format!("Failed to convert caption entities of message {}", msg.id.0))?;

    Ok(RawItem {
        message_id: msg.id.0,
        content_kind: kind,
        photo,
        file_id,
        caption: msg.caption().map(str::to_string),
        caption_entities,
        media_group_id: msg.media_group_id().map(|id| id.to_string()),
    })
}

pub struct TelegramAlbums;

impl TelegramAlbums {
    /// Group the already-collected messages of one media group into an album.
    pub fn collect(session: BotSession, messages: &[Message]) -> Result<TelegramAlbum> {
        let items = messages
            .iter()
            .map(raw_item_from_message)
            .collect::<Result<Vec<_>>>()?;

        let mut group_ids = items.iter().filter_map(|m| m.media_group_id.as_deref());
        if let Some(first) = group_ids.next() {
            if group_ids.any(|id| id != first) {
                warn!(media_group_id = first, "Album messages carry different media group ids");
            }
        }

        debug!(count = items.len(), "Collected Telegram album");
        Ok(Album::new(items, session)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(id: i32, media: serde_json::Value) -> Message {
        let mut value = json!({
            "message_id": id,
            "date": 1_700_000_000,
            "chat": {"id": 42, "type": "private", "first_name": "Ada"},
            "from": {"id": 42, "is_bot": false, "first_name": "Ada"},
        });
        if let (Some(target), Some(extra)) = (value.as_object_mut(), media.as_object()) {
            for (k, v) in extra {
                target.insert(k.clone(), v.clone());
            }
        }
        serde_json::from_value(value).unwrap()
    }

    fn photo_message(id: i32, caption: Option<&str>) -> Message {
        let mut media = json!({
            "media_group_id": "13579",
            "photo": [
                {"file_id": "small", "file_unique_id": "u-small", "width": 90, "height": 90, "file_size": 1000},
                {"file_id": "large", "file_unique_id": "u-large", "width": 1280, "height": 1280, "file_size": 90000}
            ]
        });
        if let Some(caption) = caption {
            media["caption"] = json!(caption);
            media["caption_entities"] = json!([{"type": "bold", "offset": 0, "length": 2}]);
        }
        message(id, media)
    }

    #[test]
    fn converts_photo_message() {
        let item = raw_item_from_message(&photo_message(7, Some("hi there"))).unwrap();
        assert_eq!(item.message_id, 7);
        assert_eq!(item.content_kind, ContentKind::Photo);
        assert_eq!(item.media_ref(), Some("small"));
        assert_eq!(item.caption.as_deref(), Some("hi there"));
        assert_eq!(item.caption_entities, Some(vec![MessageEntity::bold(0, 2)]));
        assert_eq!(item.media_group_id.as_deref(), Some("13579"));
    }

    #[test]
    fn converts_document_message() {
        let msg = message(
            8,
            json!({"document": {"file_id": "doc-1", "file_unique_id": "u-doc-1", "file_size": 10}}),
        );
        let item = raw_item_from_message(&msg).unwrap();
        assert_eq!(item.content_kind, ContentKind::Document);
        assert_eq!(item.media_ref(), Some("doc-1"));
        assert_eq!(item.caption, None);
    }

    #[test]
    fn text_message_is_other_kind() {
        let item = raw_item_from_message(&message(9, json!({"text": "hello"}))).unwrap();
        assert_eq!(item.content_kind, ContentKind::from("text"));
    }

    #[test]
    fn collects_album_with_session() {
        let session = BotSession::new("123456:TEST").with_default_parse_mode(ParseMode::Html);
        let messages = vec![photo_message(1, Some("only")), photo_message(2, None)];
        let album = TelegramAlbums::collect(session, &messages).unwrap();

        assert_eq!(album.message_ids(), &[1, 2]);
        assert_eq!(album.caption(), Some("only"));
        assert_eq!(album.session().default_parse_mode, Some(ParseMode::Html));
    }

    #[test]
    fn session_from_config() {
        let config = TelegramConfig {
            bot_token: "123456:TEST".into(),
            default_parse_mode: Some(ParseMode::MarkdownV2),
        };
        let session = BotSession::from_config(&config);
        assert_eq!(session.default_parse_mode, Some(ParseMode::MarkdownV2));
    }

    #[test]
    fn test_collect_rejects_empty_batch() {
        assert!(TelegramAlbums::collect(BotSession::new("123456:TEST"), &[]).is_err());
    }
}
