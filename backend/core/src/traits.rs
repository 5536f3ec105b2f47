use async_trait::async_trait;

use crate::error::AlbumError;
use crate::types::ChatTarget;

/// Per-message actions of the bot framework's message shape.
///
/// Implementors that have no single platform message id behind them refuse
/// these with [`AlbumError::OperationNotApplicable`].
#[async_trait]
pub trait MessageActions: Send + Sync {
    /// Forward the message to `chat`, returning the new message id.
    async fn forward(&self, chat: ChatTarget) -> Result<i32, AlbumError>;

    /// Copy the message to `chat` without a forward header, returning the new message id.
    async fn copy_to(&self, chat: ChatTarget) -> Result<i32, AlbumError>;

    /// Delete the message from its chat.
    async fn delete(&self) -> Result<(), AlbumError>;
}
