pub mod album;
pub mod error;
pub mod input_media;
pub mod message;
pub mod traits;
pub mod types;

pub use album::{primary_caption, Album, MessageView, MEDIA_GROUP_CONTENT_TYPE};
pub use error::AlbumError;
pub use input_media::{to_input_media, InputMediaFields, MediaDescriptor, MediaOverrides, Override};
pub use message::RawItem;
pub use traits::MessageActions;
pub use types::{ChatTarget, ContentKind, MediaKind, MessageEntity, ParseMode, PhotoSize};
