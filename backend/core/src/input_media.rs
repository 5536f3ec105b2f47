//! Outbound media descriptors and the caller-supplied overrides applied to them.

use serde::{Deserialize, Serialize};

use crate::error::AlbumError;
use crate::message::RawItem;
use crate::types::{MediaKind, MessageEntity, ParseMode};

/// Fields shared by every `InputMedia*` object of the Bot API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMediaFields {
    pub media: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
}

/// One attachment of an outbound `sendMediaGroup` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaDescriptor {
    Photo(InputMediaFields),
    Video(InputMediaFields),
    Audio(InputMediaFields),
    Document(InputMediaFields),
}

impl MediaDescriptor {
    pub fn new(kind: MediaKind, fields: InputMediaFields) -> Self {
        match kind {
            MediaKind::Photo => MediaDescriptor::Photo(fields),
            MediaKind::Video => MediaDescriptor::Video(fields),
            MediaKind::Audio => MediaDescriptor::Audio(fields),
            MediaKind::Document => MediaDescriptor::Document(fields),
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            MediaDescriptor::Photo(_) => MediaKind::Photo,
            MediaDescriptor::Video(_) => MediaKind::Video,
            MediaDescriptor::Audio(_) => MediaKind::Audio,
            MediaDescriptor::Document(_) => MediaKind::Document,
        }
    }

    pub fn fields(&self) -> &InputMediaFields {
        match self {
            MediaDescriptor::Photo(f)
            | MediaDescriptor::Video(f)
            | MediaDescriptor::Audio(f)
            | MediaDescriptor::Document(f) => f,
        }
    }

    pub fn fields_mut(&mut self) -> &mut InputMediaFields {
        match self {
            MediaDescriptor::Photo(f)
            | MediaDescriptor::Video(f)
            | MediaDescriptor::Audio(f)
            | MediaDescriptor::Document(f) => f,
        }
    }

    pub fn media(&self) -> &str {
        &self.fields().media
    }

    pub fn caption(&self) -> Option<&str> {
        self.fields().caption.as_deref()
    }

    pub fn parse_mode(&self) -> Option<ParseMode> {
        self.fields().parse_mode
    }

    pub fn caption_entities(&self) -> Option<&[MessageEntity]> {
        self.fields().caption_entities.as_deref()
    }
}

/// A caller override: nothing, one value for the first item, or one value per item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Override<T> {
    #[default]
    Absent,
    Scalar(T),
    PerItem(Vec<T>),
}

impl<T> Override<T> {
    /// Positional view of the override. `Absent` and `Scalar` both cover position 0 only.
    pub fn normalize(&self) -> Vec<Option<&T>> {
        match self {
            Override::Absent => vec![None],
            Override::Scalar(value) => vec![Some(value)],
            Override::PerItem(values) => values.iter().map(Some).collect(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Override::Absent)
    }
}

impl From<&str> for Override<String> {
    fn from(value: &str) -> Self {
        Override::Scalar(value.to_string())
    }
}

impl From<String> for Override<String> {
    fn from(value: String) -> Self {
        Override::Scalar(value)
    }
}

impl From<Vec<String>> for Override<String> {
    fn from(values: Vec<String>) -> Self {
        Override::PerItem(values)
    }
}

impl From<Vec<&str>> for Override<String> {
    fn from(values: Vec<&str>) -> Self {
        Override::PerItem(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<MessageEntity>> for Override<Vec<MessageEntity>> {
    fn from(entities: Vec<MessageEntity>) -> Self {
        Override::Scalar(entities)
    }
}

impl From<Vec<Vec<MessageEntity>>> for Override<Vec<MessageEntity>> {
    fn from(per_item: Vec<Vec<MessageEntity>>) -> Self {
        Override::PerItem(per_item)
    }
}

/// Overrides applied when re-projecting an album into media descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaOverrides {
    pub caption: Override<String>,
    /// Applies to the first item only.
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Override<Vec<MessageEntity>>,
}

impl MediaOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn caption(mut self, caption: impl Into<Override<String>>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    pub fn caption_entities(mut self, entities: impl Into<Override<Vec<MessageEntity>>>) -> Self {
        self.caption_entities = entities.into();
        self
    }

    /// Longest positional override sequence after normalization.
    pub(crate) fn width(&self) -> usize {
        self.caption
            .normalize()
            .len()
            .max(self.caption_entities.normalize().len())
            .max(1)
    }
}

/// Build the descriptor for one item. Overrides win only when present.
pub fn to_input_media(
    item: &RawItem,
    caption: Option<&String>,
    parse_mode: Option<ParseMode>,
    caption_entities: Option<&Vec<MessageEntity>>,
) -> Result<MediaDescriptor, AlbumError> {
    let kind = MediaKind::try_from(&item.content_kind)?;
    let media = item
        .media_ref()
        .ok_or_else(|| AlbumError::MissingMediaRef {
            message_id: item.message_id,
            kind: kind.to_string(),
        })?
        .to_string();

    Ok(MediaDescriptor::new(
        kind,
        InputMediaFields {
            media,
            caption: caption.or(item.caption.as_ref()).cloned(),
            parse_mode,
            caption_entities: caption_entities.or(item.caption_entities.as_ref()).cloned(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PhotoSize;

    #[test]
    fn normalize_shapes() {
        assert_eq!(Override::<String>::Absent.normalize(), vec![None]);
        let scalar: Override<String> = Override::from("x");
        assert_eq!(scalar.normalize(), vec![Some(&"x".to_string())]);
        let per_item: Override<String> = Override::from(vec!["a", "b"]);
        assert_eq!(per_item.normalize().len(), 2);
        assert!(Override::<String>::default().is_absent());
        assert!(!per_item.is_absent());
    }

    #[test]
    fn single_entity_list_is_a_scalar_override() {
        let overrides = MediaOverrides::new().caption_entities(vec![MessageEntity::bold(0, 1)]);
        assert!(matches!(overrides.caption_entities, Override::Scalar(_)));

        let overrides = MediaOverrides::new()
            .caption_entities(vec![vec![MessageEntity::bold(0, 1)], Vec::new()]);
        assert!(matches!(overrides.caption_entities, Override::PerItem(ref v) if v.len() == 2));
    }

    #[test]
    fn override_caption_wins_over_item() {
        let item = RawItem::video(7, "vid").with_caption("original");
        let caption = "new".to_string();
        let descriptor = to_input_media(&item, Some(&caption), None, None).unwrap();
        assert_eq!(descriptor.kind(), MediaKind::Video);
        assert_eq!(descriptor.media(), "vid");
        assert_eq!(descriptor.caption(), Some("new"));

        let descriptor = to_input_media(&item, None, None, None).unwrap();
        assert_eq!(descriptor.caption(), Some("original"));
    }

    #[test]
    fn test_missing_file_reference() {
        let item = RawItem::photo(3, Vec::new());
        let err = to_input_media(&item, None, None, None).unwrap_err();
        assert_eq!(
            err,
            AlbumError::MissingMediaRef { message_id: 3, kind: "photo".into() }
        );
    }

    #[test]
    fn descriptor_serializes_as_input_media() {
        let item = RawItem::photo(1, vec![PhotoSize::new("AgAD", 90, 90)]).with_caption("hi");
        let descriptor = to_input_media(&item, None, Some(ParseMode::Html), None).unwrap();
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            serde_json::json!({"type": "photo", "media": "AgAD", "caption": "hi", "parse_mode": "HTML"})
        );
    }
}
