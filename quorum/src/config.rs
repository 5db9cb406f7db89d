//! Quorum configuration store.
//!
//! Holds the per-action quorum thresholds and validity windows plus the
//! minting base URI. The store is owned by the engine (injected via its
//! constructor) so tests can build deterministic configurations; it is
//! shared state across unrelated proposals of the same action kind.

use crate::error::QuorumError;
use crate::proposal::ActionKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback validity window when an action kind has no explicit entry: 7 days.
pub const DEFAULT_EXPIRY_SECS: u64 = 7 * 24 * 60 * 60;

/// Fixed cooldown between proposal creations by the same proposer: 1 day.
/// Global per proposer, not per action kind.
pub const PROPOSAL_COOLDOWN_SECS: u64 = 24 * 60 * 60;

/// Admin-tunable quorum policy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuorumConfig {
    /// Required approvals per action kind. An absent entry means "no quorum
    /// configured" — the engine treats absence explicitly (such proposals
    /// accumulate approvals but never execute), never as an implicit zero.
    thresholds: HashMap<ActionKind, u32>,
    /// Validity window per action kind, in seconds.
    expiries: HashMap<ActionKind, u64>,
    /// Window applied when an action kind has no explicit entry.
    default_expiry_secs: u64,
    /// Base URI prepended to serials when constructing metadata URIs.
    /// Empty until set; minting refuses to run without it.
    base_uri: String,
}

impl Default for QuorumConfig {
    fn default() -> Self {
        Self {
            thresholds: HashMap::new(),
            expiries: HashMap::new(),
            default_expiry_secs: DEFAULT_EXPIRY_SECS,
            base_uri: String::new(),
        }
    }
}

impl QuorumConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required approval count for an action kind, if one is configured.
    pub fn threshold(&self, kind: &ActionKind) -> Option<u32> {
        self.thresholds.get(kind).copied()
    }

    /// Validity window for an action kind, falling back to the default.
    pub fn expiry_for(&self, kind: &ActionKind) -> u64 {
        self.expiries
            .get(kind)
            .copied()
            .unwrap_or(self.default_expiry_secs)
    }

    pub fn default_expiry_secs(&self) -> u64 {
        self.default_expiry_secs
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn set_quorum_threshold(
        &mut self,
        kind: ActionKind,
        required: u32,
    ) -> Result<(), QuorumError> {
        if required == 0 {
            return Err(QuorumError::ZeroThreshold);
        }
        self.thresholds.insert(kind, required);
        Ok(())
    }

    /// Remove a per-action threshold. Returns whether an entry existed.
    pub fn remove_quorum_threshold(&mut self, kind: &ActionKind) -> bool {
        self.thresholds.remove(kind).is_some()
    }

    pub fn set_action_expiry(&mut self, kind: ActionKind, secs: u64) -> Result<(), QuorumError> {
        if secs == 0 {
            return Err(QuorumError::ZeroDuration);
        }
        self.expiries.insert(kind, secs);
        Ok(())
    }

    /// Remove a per-action expiry override. Returns whether an entry existed.
    pub fn remove_action_expiry(&mut self, kind: &ActionKind) -> bool {
        self.expiries.remove(kind).is_some()
    }

    pub fn set_default_expiry(&mut self, secs: u64) -> Result<(), QuorumError> {
        if secs == 0 {
            return Err(QuorumError::ZeroDuration);
        }
        self.default_expiry_secs = secs;
        Ok(())
    }

    /// Set the minting base URI. Must be non-empty and end with `/` so that
    /// `base + serial` is always a well-formed path.
    pub fn set_base_uri(&mut self, uri: impl Into<String>) -> Result<(), QuorumError> {
        let uri = uri.into();
        if uri.is_empty() || !uri.ends_with('/') {
            return Err(QuorumError::InvalidBaseUri(uri));
        }
        self.base_uri = uri;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_falls_back_to_default() {
        let mut config = QuorumConfig::new();
        assert_eq!(config.expiry_for(&ActionKind::Reissue), DEFAULT_EXPIRY_SECS);

        config.set_action_expiry(ActionKind::Reissue, 3600).unwrap();
        assert_eq!(config.expiry_for(&ActionKind::Reissue), 3600);
        assert_eq!(
            config.expiry_for(&ActionKind::ForceTransfer),
            DEFAULT_EXPIRY_SECS
        );
    }

    #[test]
    fn absent_threshold_is_none_not_zero() {
        let config = QuorumConfig::new();
        assert_eq!(config.threshold(&ActionKind::Reissue), None);
    }

    #[test]
    fn zero_threshold_rejected() {
        let mut config = QuorumConfig::new();
        assert!(matches!(
            config.set_quorum_threshold(ActionKind::Reissue, 0),
            Err(QuorumError::ZeroThreshold)
        ));
        assert_eq!(config.threshold(&ActionKind::Reissue), None);
    }

    #[test]
    fn zero_durations_rejected() {
        let mut config = QuorumConfig::new();
        assert!(matches!(
            config.set_action_expiry(ActionKind::Reissue, 0),
            Err(QuorumError::ZeroDuration)
        ));
        assert!(matches!(
            config.set_default_expiry(0),
            Err(QuorumError::ZeroDuration)
        ));
    }

    #[test]
    fn threshold_removal_reports_presence() {
        let mut config = QuorumConfig::new();
        config.set_quorum_threshold(ActionKind::Reissue, 2).unwrap();
        assert!(config.remove_quorum_threshold(&ActionKind::Reissue));
        assert!(!config.remove_quorum_threshold(&ActionKind::Reissue));
        assert_eq!(config.threshold(&ActionKind::Reissue), None);
    }

    #[test]
    fn base_uri_validation() {
        let mut config = QuorumConfig::new();
        assert!(matches!(
            config.set_base_uri(""),
            Err(QuorumError::InvalidBaseUri(_))
        ));
        assert!(matches!(
            config.set_base_uri("ipfs://assets"),
            Err(QuorumError::InvalidBaseUri(_))
        ));
        config.set_base_uri("ipfs://assets/").unwrap();
        assert_eq!(config.base_uri(), "ipfs://assets/");
    }
}
