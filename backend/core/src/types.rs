use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AlbumError;

/// Content type of a delivered message, named the way the Bot API names it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentKind {
    Photo,
    Video,
    Audio,
    Document,
    /// Anything a media group cannot carry (sticker, voice, text, ...).
    Other(String),
}

impl ContentKind {
    pub fn as_str(&self) -> &str {
        match self {
            ContentKind::Photo => "photo",
            ContentKind::Video => "video",
            ContentKind::Audio => "audio",
            ContentKind::Document => "document",
            ContentKind::Other(name) => name,
        }
    }
}

impl From<&str> for ContentKind {
    fn from(name: &str) -> Self {
        match name {
            "photo" => ContentKind::Photo,
            "video" => ContentKind::Video,
            "audio" => ContentKind::Audio,
            "document" => ContentKind::Document,
            other => ContentKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ContentKind {
    fn from(name: String) -> Self {
        ContentKind::from(name.as_str())
    }
}

impl From<ContentKind> for String {
    fn from(kind: ContentKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subset of content kinds that can be sent back as part of a media group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Photo,
    Video,
    Audio,
    Document,
}

impl TryFrom<&ContentKind> for MediaKind {
    type Error = AlbumError;

    fn try_from(kind: &ContentKind) -> Result<Self, Self::Error> {
        match kind {
            ContentKind::Photo => Ok(MediaKind::Photo),
            ContentKind::Video => Ok(MediaKind::Video),
            ContentKind::Audio => Ok(MediaKind::Audio),
            ContentKind::Document => Ok(MediaKind::Document),
            ContentKind::Other(name) => Err(AlbumError::UnsupportedMediaKind(name.clone())),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Document => "document",
        };
        f.write_str(name)
    }
}

/// One resolution of a delivered photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: u32,
    pub height: u32,
}

impl PhotoSize {
    pub fn new(file_id: impl Into<String>, width: u32, height: u32) -> Self {
        let file_id = file_id.into();
        Self {
            file_unique_id: file_id.clone(),
            file_id,
            width,
            height,
        }
    }
}

/// A rich-text span attached to a caption, in Bot API JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: String,
    pub offset: usize,
    pub length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<serde_json::Value>,
}

impl MessageEntity {
    pub fn new(kind: impl Into<String>, offset: usize, length: usize) -> Self {
        Self {
            kind: kind.into(),
            offset,
            length,
            url: None,
            language: None,
            custom_emoji_id: None,
            user: None,
        }
    }

    pub fn bold(offset: usize, length: usize) -> Self {
        Self::new("bold", offset, length)
    }

    pub fn text_link(offset: usize, length: usize, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new("text_link", offset, length)
        }
    }
}

/// Caption formatting mode. An unset mode is `None` and lets the bot default apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
    MarkdownV2,
    Markdown,
}

impl std::str::FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(ParseMode::Html),
            "markdownv2" => Ok(ParseMode::MarkdownV2),
            "markdown" => Ok(ParseMode::Markdown),
            other => Err(format!("unknown parse mode: {other}")),
        }
    }
}

/// Destination chat, either a numeric id or an `@username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatTarget {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatTarget {
    fn from(id: i64) -> Self {
        ChatTarget::Id(id)
    }
}

impl From<&str> for ChatTarget {
    fn from(username: &str) -> Self {
        ChatTarget::Username(username.to_string())
    }
}
