//! Token records and registry operations.

use crate::error::RegistryError;
use custodian_types::{ActorId, TokenId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A single token's registry entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Current owner.
    pub owner: ActorId,
    /// Metadata URI, if one has been set.
    pub uri: Option<String>,
}

/// In-memory asset registry.
///
/// Token ids are allocated by the caller (the minting path); the registry
/// only guards against duplicates. Destroying a token clears its record and
/// its metadata lock flag — a lock never outlives the token it guards.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AssetRegistry {
    tokens: HashMap<TokenId, TokenRecord>,
    locked: HashSet<TokenId>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, token: TokenId) -> bool {
        self.tokens.contains_key(&token)
    }

    pub fn owner_of(&self, token: TokenId) -> Result<&ActorId, RegistryError> {
        self.tokens
            .get(&token)
            .map(|r| &r.owner)
            .ok_or(RegistryError::TokenNotFound(token))
    }

    pub fn metadata_uri(&self, token: TokenId) -> Option<&str> {
        self.tokens.get(&token).and_then(|r| r.uri.as_deref())
    }

    /// Create a token owned by `to`. The id must be unused.
    pub fn create(&mut self, to: ActorId, token: TokenId) -> Result<(), RegistryError> {
        if self.tokens.contains_key(&token) {
            return Err(RegistryError::TokenExists(token));
        }
        self.tokens.insert(token, TokenRecord { owner: to, uri: None });
        Ok(())
    }

    /// Destroy a token, clearing its record and lock flag.
    /// Returns the record as it stood (the executor needs the prior owner).
    pub fn destroy(&mut self, token: TokenId) -> Result<TokenRecord, RegistryError> {
        let record = self
            .tokens
            .remove(&token)
            .ok_or(RegistryError::TokenNotFound(token))?;
        self.locked.remove(&token);
        Ok(record)
    }

    /// Reassign ownership. `from` must be the current owner.
    pub fn reassign(
        &mut self,
        from: &ActorId,
        to: ActorId,
        token: TokenId,
    ) -> Result<(), RegistryError> {
        let record = self
            .tokens
            .get_mut(&token)
            .ok_or(RegistryError::TokenNotFound(token))?;
        if &record.owner != from {
            return Err(RegistryError::NotOwner {
                token,
                expected: from.clone(),
                actual: record.owner.clone(),
            });
        }
        record.owner = to;
        Ok(())
    }

    /// Set a token's metadata URI. Refused while the lock flag is set.
    pub fn set_metadata_uri(
        &mut self,
        token: TokenId,
        uri: impl Into<String>,
    ) -> Result<(), RegistryError> {
        if self.locked.contains(&token) {
            return Err(RegistryError::MetadataLocked(token));
        }
        let record = self
            .tokens
            .get_mut(&token)
            .ok_or(RegistryError::TokenNotFound(token))?;
        record.uri = Some(uri.into());
        Ok(())
    }

    pub fn is_locked(&self, token: TokenId) -> bool {
        self.locked.contains(&token)
    }

    /// Flip the metadata lock flag. The token must exist.
    pub fn set_locked(&mut self, token: TokenId, locked: bool) -> Result<(), RegistryError> {
        if !self.tokens.contains_key(&token) {
            return Err(RegistryError::TokenNotFound(token));
        }
        if locked {
            self.locked.insert(token);
        } else {
            self.locked.remove(&token);
        }
        Ok(())
    }

    /// Number of tokens currently in existence.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_actor(n: u8) -> ActorId {
        ActorId::new(format!("actor-{n}"))
    }

    #[test]
    fn create_and_query() {
        let mut reg = AssetRegistry::new();
        let owner = test_actor(1);
        reg.create(owner.clone(), TokenId::new(1)).unwrap();

        assert!(reg.exists(TokenId::new(1)));
        assert_eq!(reg.owner_of(TokenId::new(1)).unwrap(), &owner);
        assert_eq!(reg.token_count(), 1);
        assert!(reg.metadata_uri(TokenId::new(1)).is_none());
    }

    #[test]
    fn duplicate_create_rejected() {
        let mut reg = AssetRegistry::new();
        reg.create(test_actor(1), TokenId::new(1)).unwrap();
        assert!(matches!(
            reg.create(test_actor(2), TokenId::new(1)),
            Err(RegistryError::TokenExists(_))
        ));
        // Original owner untouched.
        assert_eq!(reg.owner_of(TokenId::new(1)).unwrap(), &test_actor(1));
    }

    #[test]
    fn destroy_returns_prior_record() {
        let mut reg = AssetRegistry::new();
        let owner = test_actor(1);
        reg.create(owner.clone(), TokenId::new(5)).unwrap();
        reg.set_metadata_uri(TokenId::new(5), "ipfs://x/ABCDEF").unwrap();

        let record = reg.destroy(TokenId::new(5)).unwrap();
        assert_eq!(record.owner, owner);
        assert_eq!(record.uri.as_deref(), Some("ipfs://x/ABCDEF"));
        assert!(!reg.exists(TokenId::new(5)));
    }

    #[test]
    fn destroy_clears_lock_flag() {
        let mut reg = AssetRegistry::new();
        reg.create(test_actor(1), TokenId::new(5)).unwrap();
        reg.set_locked(TokenId::new(5), true).unwrap();

        reg.destroy(TokenId::new(5)).unwrap();
        assert!(!reg.is_locked(TokenId::new(5)));

        // A later token under the same id starts unlocked.
        reg.create(test_actor(2), TokenId::new(5)).unwrap();
        assert!(!reg.is_locked(TokenId::new(5)));
    }

    #[test]
    fn reassign_checks_current_owner() {
        let mut reg = AssetRegistry::new();
        let a = test_actor(1);
        let b = test_actor(2);
        reg.create(a.clone(), TokenId::new(1)).unwrap();

        let err = reg.reassign(&b, a.clone(), TokenId::new(1)).unwrap_err();
        assert!(matches!(err, RegistryError::NotOwner { .. }));

        reg.reassign(&a, b.clone(), TokenId::new(1)).unwrap();
        assert_eq!(reg.owner_of(TokenId::new(1)).unwrap(), &b);
    }

    #[test]
    fn set_uri_refused_while_locked() {
        let mut reg = AssetRegistry::new();
        reg.create(test_actor(1), TokenId::new(1)).unwrap();
        reg.set_metadata_uri(TokenId::new(1), "base/AAAAAA").unwrap();
        reg.set_locked(TokenId::new(1), true).unwrap();

        assert!(matches!(
            reg.set_metadata_uri(TokenId::new(1), "base/BBBBBB"),
            Err(RegistryError::MetadataLocked(_))
        ));
        assert_eq!(reg.metadata_uri(TokenId::new(1)), Some("base/AAAAAA"));

        reg.set_locked(TokenId::new(1), false).unwrap();
        reg.set_metadata_uri(TokenId::new(1), "base/BBBBBB").unwrap();
        assert_eq!(reg.metadata_uri(TokenId::new(1)), Some("base/BBBBBB"));
    }

    #[test]
    fn lock_requires_existing_token() {
        let mut reg = AssetRegistry::new();
        assert!(matches!(
            reg.set_locked(TokenId::new(9), true),
            Err(RegistryError::TokenNotFound(_))
        ));
    }
}
