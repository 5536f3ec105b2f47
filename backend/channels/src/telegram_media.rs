//! Telegram Media Group Payloads
//!
//! Builds the `sendMediaGroup` request body from an album, filling in the bot's
//! default parse mode and checking the platform's media group limits.

use albumkit_core::{Album, ChatTarget, MediaDescriptor, MediaKind, MediaOverrides, ParseMode};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::debug;

use crate::telegram::TelegramAlbum;

/// Smallest media group the Bot API accepts.
pub const MIN_MEDIA_GROUP_SIZE: usize = 2;

/// Largest media group the Bot API accepts.
pub const MAX_MEDIA_GROUP_SIZE: usize = 10;

/// Caption length limit, counted in characters.
pub const MAX_CAPTION_LENGTH: usize = 1024;

/// Body of a `sendMediaGroup` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMediaGroup {
    pub chat_id: ChatTarget,
    pub media: Vec<MediaDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
}

impl SendMediaGroup {
    pub fn new(chat_id: impl Into<ChatTarget>, media: Vec<MediaDescriptor>) -> Self {
        Self {
            chat_id: chat_id.into(),
            media,
            message_thread_id: None,
            disable_notification: None,
            protect_content: None,
        }
    }

    /// Re-project any album into a request for `chat_id`.
    pub fn from_album<S>(
        album: &Album<S>,
        chat_id: impl Into<ChatTarget>,
        overrides: &MediaOverrides,
    ) -> Result<Self> {
        let media = album
            .to_media_descriptors(overrides)
            .context("Failed to rebuild media group")?;
        Ok(Self::new(chat_id, media))
    }

    /// Re-project a Telegram album, applying its session's default parse mode.
    pub fn for_session(
        album: &TelegramAlbum,
        chat_id: impl Into<ChatTarget>,
        overrides: &MediaOverrides,
    ) -> Result<Self> {
        let mut request = Self::from_album(album, chat_id, overrides)?;
        request.resolve_parse_mode(album.session().default_parse_mode);
        Ok(request)
    }

    /// Fill the first item's parse mode with `default` when it was left unset.
    ///
    /// Later items never carry a parse mode: their captions are sent back with
    /// the entities they arrived with.
    pub fn resolve_parse_mode(&mut self, default: Option<ParseMode>) {
        let Some(default) = default else { return };
        if let Some(first) = self.media.first_mut() {
            let fields = first.fields_mut();
            if fields.parse_mode.is_none() {
                fields.parse_mode = Some(default);
            }
        }
    }

    pub fn in_thread(mut self, thread_id: i32) -> Self {
        self.message_thread_id = Some(thread_id);
        self
    }

    pub fn silent(mut self) -> Self {
        self.disable_notification = Some(true);
        self
    }

    pub fn protected(mut self) -> Self {
        self.protect_content = Some(true);
        self
    }

    /// Check the request against the Bot API's media group rules.
    pub fn validate(&self) -> Result<()> {
        let count = self.media.len();
        if !(MIN_MEDIA_GROUP_SIZE..=MAX_MEDIA_GROUP_SIZE).contains(&count) {
            bail!(
                "media group must contain {MIN_MEDIA_GROUP_SIZE}-{MAX_MEDIA_GROUP_SIZE} items, got {count}"
            );
        }

        for (i, descriptor) in self.media.iter().enumerate() {
            if let Some(caption) = descriptor.caption() {
                let len = caption.chars().count();
                if len > MAX_CAPTION_LENGTH {
                    bail!("caption of item {i} is {len} characters, limit is {MAX_CAPTION_LENGTH}");
                }
            }
        }

        // Audio and documents only group with their own kind.
        for exclusive in [MediaKind::Audio, MediaKind::Document] {
            let matching = self.media.iter().filter(|m| m.kind() == exclusive).count();
            if matching > 0 && matching < count {
                bail!("{exclusive} items cannot be grouped with other media kinds");
            }
        }

        debug!(items = count, "Media group request is valid");
        Ok(())
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).context("Failed to serialize sendMediaGroup request")
    }
}
