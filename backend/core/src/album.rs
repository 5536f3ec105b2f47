//! Album aggregate: a media group collected from individually delivered messages.
//!
//! An [`Album`] owns the messages of one media group in delivery order and can
//! rebuild the `sendMediaGroup` attachments from them, optionally replacing
//! captions, parse mode and caption entities.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::error::AlbumError;
use crate::input_media::{to_input_media, MediaDescriptor, MediaOverrides};
use crate::message::RawItem;
use crate::traits::MessageActions;
use crate::types::{ChatTarget, ContentKind};

/// Content type reported for every album.
pub const MEDIA_GROUP_CONTENT_TYPE: &str = "media_group";

/// A media group, with the session handle it was received on.
#[derive(Debug, Clone)]
pub struct Album<S> {
    items: Vec<RawItem>,
    session: S,
    captions: Vec<Option<String>>,
    message_ids: Vec<i32>,
    caption: Option<String>,
}

/// Single-message view of an album for code that expects one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub message_id: i32,
    pub content_type: &'static str,
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_group_id: Option<String>,
    /// Content kind of the first item. Its media field is absent from this view.
    pub cleared_kind: ContentKind,
}

/// The one non-empty caption among `captions`, if there is exactly one.
pub fn primary_caption(captions: &[Option<String>]) -> Option<String> {
    let mut present = captions.iter().flatten().filter(|c| !c.is_empty());
    match (present.next(), present.next()) {
        (Some(only), None) => Some(only.clone()),
        _ => None,
    }
}

impl<S> Album<S> {
    /// Build an album from the messages of one media group, in delivery order.
    pub fn new(items: Vec<RawItem>, session: S) -> Result<Self, AlbumError> {
        if items.is_empty() {
            return Err(AlbumError::EmptyAlbum);
        }

        let captions: Vec<Option<String>> = items.iter().map(|m| m.caption.clone()).collect();
        let message_ids = items.iter().map(|m| m.message_id).collect();
        let caption = primary_caption(&captions);

        debug!(
            items = items.len(),
            first_kind = %items[0].content_kind,
            has_caption = caption.is_some(),
            "Built album"
        );

        Ok(Self {
            items,
            session,
            captions,
            message_ids,
            caption,
        })
    }

    pub fn messages(&self) -> &[RawItem] {
        &self.items
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn content_type(&self) -> &'static str {
        MEDIA_GROUP_CONTENT_TYPE
    }

    /// The album caption: set only when exactly one item had a caption.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn set_caption(&mut self, caption: Option<String>) {
        self.caption = caption;
    }

    /// Every item's own caption, parallel to [`Album::messages`].
    pub fn captions(&self) -> &[Option<String>] {
        &self.captions
    }

    pub fn message_ids(&self) -> &[i32] {
        &self.message_ids
    }

    pub fn media_group_id(&self) -> Option<&str> {
        self.items.iter().find_map(|m| m.media_group_id.as_deref())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; albums are never empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawItem> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<RawItem> {
        self.items
    }

    pub fn message_view(&self) -> MessageView {
        let first = &self.items[0];
        MessageView {
            message_id: first.message_id,
            content_type: MEDIA_GROUP_CONTENT_TYPE,
            caption: self.caption.clone(),
            media_group_id: self.media_group_id().map(str::to_string),
            cleared_kind: first.content_kind.clone(),
        }
    }

    /// Rebuild the attachments of a `sendMediaGroup` call.
    ///
    /// Overrides are matched to items by position. A scalar override or the
    /// parse mode only reaches the first item; the remaining items keep their
    /// own caption and entities. Override positions past the last item are
    /// dropped. Any item that cannot be sent as group media fails the whole call.
    pub fn to_media_descriptors(
        &self,
        overrides: &MediaOverrides,
    ) -> Result<Vec<MediaDescriptor>, AlbumError> {
        let captions = overrides.caption.normalize();
        let parse_modes = [overrides.parse_mode];
        let entities = overrides.caption_entities.normalize();

        let width = overrides.width();
        if width > self.items.len() {
            debug!(
                items = self.items.len(),
                dropped = width - self.items.len(),
                "Dropping override positions without a matching item"
            );
        }

        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                to_input_media(
                    item,
                    captions.get(i).copied().flatten(),
                    parse_modes.get(i).copied().flatten(),
                    entities.get(i).copied().flatten(),
                )
            })
            .collect()
    }
}

impl<'a, S> IntoIterator for &'a Album<S> {
    type Item = &'a RawItem;
    type IntoIter = std::slice::Iter<'a, RawItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[async_trait]
impl<S: Send + Sync> MessageActions for Album<S> {
    async fn forward(&self, _chat: ChatTarget) -> Result<i32, AlbumError> {
        Err(AlbumError::OperationNotApplicable("forward"))
    }

    async fn copy_to(&self, _chat: ChatTarget) -> Result<i32, AlbumError> {
        Err(AlbumError::OperationNotApplicable("copy_to"))
    }

    async fn delete(&self) -> Result<(), AlbumError> {
        Err(AlbumError::OperationNotApplicable("delete"))
    }
}
