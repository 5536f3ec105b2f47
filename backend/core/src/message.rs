use serde::{Deserialize, Serialize};

use crate::types::{ContentKind, MessageEntity, PhotoSize};

/// One message delivered as part of a media group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    pub message_id: i32,
    pub content_kind: ContentKind,
    /// Photo resolutions; empty unless `content_kind` is a photo.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photo: Vec<PhotoSize>,
    /// File reference of a video, audio or document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_group_id: Option<String>,
}

impl RawItem {
    fn with_kind(message_id: i32, content_kind: ContentKind) -> Self {
        Self {
            message_id,
            content_kind,
            photo: Vec::new(),
            file_id: None,
            caption: None,
            caption_entities: None,
            media_group_id: None,
        }
    }

    pub fn photo(message_id: i32, sizes: Vec<PhotoSize>) -> Self {
        Self {
            photo: sizes,
            ..Self::with_kind(message_id, ContentKind::Photo)
        }
    }

    pub fn video(message_id: i32, file_id: impl Into<String>) -> Self {
        Self {
            file_id: Some(file_id.into()),
            ..Self::with_kind(message_id, ContentKind::Video)
        }
    }

    pub fn audio(message_id: i32, file_id: impl Into<String>) -> Self {
        Self {
            file_id: Some(file_id.into()),
            ..Self::with_kind(message_id, ContentKind::Audio)
        }
    }

    pub fn document(message_id: i32, file_id: impl Into<String>) -> Self {
        Self {
            file_id: Some(file_id.into()),
            ..Self::with_kind(message_id, ContentKind::Document)
        }
    }

    /// A message of a kind that cannot be part of an outbound media group.
    pub fn other(message_id: i32, kind: impl Into<String>) -> Self {
        Self::with_kind(message_id, ContentKind::from(kind.into()))
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_caption_entities(mut self, entities: Vec<MessageEntity>) -> Self {
        self.caption_entities = Some(entities);
        self
    }

    pub fn with_media_group_id(mut self, id: impl Into<String>) -> Self {
        self.media_group_id = Some(id.into());
        self
    }

    /// File reference to send this item again.
    ///
    /// Photos use their first listed size; every other kind carries a single file.
    pub fn media_ref(&self) -> Option<&str> {
        match self.content_kind {
            ContentKind::Photo => self.photo.first().map(|p| p.file_id.as_str()),
            _ => self.file_id.as_deref(),
        }
    }
}
