use thiserror::Error;

/// Errors raised while building or re-projecting an album.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlbumError {
    #[error("unsupported media type {0}")]
    UnsupportedMediaKind(String),

    #[error("{0} is not applicable to a media group")]
    OperationNotApplicable(&'static str),

    #[error("an album needs at least one message")]
    EmptyAlbum,

    #[error("message {message_id} has content type {kind} but no file reference")]
    MissingMediaRef { message_id: i32, kind: String },
}
