//! Registry-specific errors.

use custodian_types::{ActorId, TokenId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("token {0} does not exist")]
    TokenNotFound(TokenId),

    #[error("token {0} already exists")]
    TokenExists(TokenId),

    #[error("token {token} is owned by {actual}, not {expected}")]
    NotOwner {
        token: TokenId,
        expected: ActorId,
        actual: ActorId,
    },

    #[error("metadata of token {0} is locked")]
    MetadataLocked(TokenId),
}
