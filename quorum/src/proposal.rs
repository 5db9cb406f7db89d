//! Proposals, action kinds, and fingerprinting.

use crate::error::QuorumError;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use custodian_types::{ActorId, Fingerprint, Timestamp, TokenId};
use serde::{Deserialize, Serialize};

type Blake2b256 = Blake2b<U32>;

/// The kind of action a proposal gates.
///
/// The set is open: `Other` kinds can be proposed and approved (the ledger
/// is kind-agnostic) but fail at execution time with `UnsupportedAction`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Burn the target token and optionally mint a replacement under a new
    /// serial to a new owner.
    Reissue,
    /// Reassign ownership directly, bypassing any transfer approval.
    ForceTransfer,
    /// An action kind this engine does not know how to execute.
    Other(String),
}

impl ActionKind {
    /// Name of this kind, used in fingerprint inputs and notifications.
    pub fn name(&self) -> &str {
        match self {
            Self::Reissue => "reissue",
            Self::ForceTransfer => "forced_reassignment",
            Self::Other(kind) => kind,
        }
    }
}

/// Derived activity of a proposal record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Stored active and within its validity window.
    Active,
    /// Stored active but past its validity window (lazily realized).
    Expired,
    /// Deactivated without deletion.
    Inactive,
}

/// A quorum proposal, keyed in the ledger by its fingerprint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    /// What is being proposed.
    pub action: ActionKind,
    /// Token the action applies to (`TokenId::ZERO` when not applicable).
    pub target: TokenId,
    /// Opaque parameter payload, decoded by the executor at dispatch time.
    pub params: Vec<u8>,
    /// Count of distinct current approvers. Always equals the number of
    /// flagged approvers in the ledger's approver set for this proposal.
    pub approval_count: u32,
    /// True from creation until executed, cleaned up, or archived.
    pub active: bool,
    /// Creation time, refreshed on reactivation.
    pub created_at: Timestamp,
}

impl Proposal {
    /// Derived status given the configured validity window.
    ///
    /// Expiry is a pure function of `(now, created_at, window)` — never a
    /// stored flag that could desynchronize from the clock.
    pub fn status(&self, expiry_secs: u64, now: Timestamp) -> ProposalStatus {
        if !self.active {
            ProposalStatus::Inactive
        } else if self.created_at.has_expired(expiry_secs, now) {
            ProposalStatus::Expired
        } else {
            ProposalStatus::Active
        }
    }

    /// Whether the record is stored active AND unexpired.
    pub fn is_live(&self, expiry_secs: u64, now: Timestamp) -> bool {
        self.status(expiry_secs, now) == ProposalStatus::Active
    }
}

/// Parameters of a reissue action.
///
/// An empty `new_serial` means burn-only: the target token is destroyed with
/// no replacement minted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReissueParams {
    pub new_owner: ActorId,
    pub new_serial: String,
}

/// Parameters of a forced reassignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassignParams {
    pub new_owner: ActorId,
}

impl ReissueParams {
    pub fn encode(&self) -> Vec<u8> {
        bincode::serialize(self).unwrap_or_default()
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, QuorumError> {
        bincode::deserialize(bytes).map_err(|e| QuorumError::MalformedParams(e.to_string()))
    }
}

impl ReassignParams {
    pub fn encode(&self) -> Vec<u8> {
        bincode::serialize(self).unwrap_or_default()
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, QuorumError> {
        bincode::deserialize(bytes).map_err(|e| QuorumError::MalformedParams(e.to_string()))
    }
}

/// Compute the fingerprint keying a proposal: Blake2b-256 over the action
/// kind name, the target id, and the raw parameter payload.
///
/// Callers must keep parameter encodings unambiguous — two distinct logical
/// actions must never encode to identical bytes.
pub fn fingerprint(action: &ActionKind, target: TokenId, params: &[u8]) -> Fingerprint {
    let mut hasher = Blake2b256::new();
    hasher.update(action.name().as_bytes());
    hasher.update(target.as_u64().to_le_bytes());
    hasher.update(params);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    Fingerprint::new(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_actor(n: u8) -> ActorId {
        ActorId::new(format!("actor-{n}"))
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let params = ReissueParams {
            new_owner: test_actor(1),
            new_serial: "ABCDEF".into(),
        }
        .encode();
        let a = fingerprint(&ActionKind::Reissue, TokenId::new(5), &params);
        let b = fingerprint(&ActionKind::Reissue, TokenId::new(5), &params);
        assert_eq!(a, b);
        assert!(!a.is_zero());
    }

    #[test]
    fn fingerprint_varies_with_each_input() {
        let params = ReassignParams {
            new_owner: test_actor(1),
        }
        .encode();
        let base = fingerprint(&ActionKind::ForceTransfer, TokenId::new(1), &params);

        let other_kind = fingerprint(&ActionKind::Reissue, TokenId::new(1), &params);
        let other_target = fingerprint(&ActionKind::ForceTransfer, TokenId::new(2), &params);
        let other_params = fingerprint(
            &ActionKind::ForceTransfer,
            TokenId::new(1),
            &ReassignParams {
                new_owner: test_actor(2),
            }
            .encode(),
        );

        assert_ne!(base, other_kind);
        assert_ne!(base, other_target);
        assert_ne!(base, other_params);
    }

    #[test]
    fn params_round_trip() {
        let p = ReissueParams {
            new_owner: test_actor(7),
            new_serial: String::new(),
        };
        let decoded = ReissueParams::decode(&p.encode()).unwrap();
        assert_eq!(decoded, p);
    }

    #[test]
    fn garbage_params_fail_to_decode() {
        assert!(matches!(
            ReassignParams::decode(&[0xff, 0x01]),
            Err(QuorumError::MalformedParams(_))
        ));
    }

    #[test]
    fn status_is_derived_from_clock() {
        let p = Proposal {
            action: ActionKind::Reissue,
            target: TokenId::new(1),
            params: Vec::new(),
            approval_count: 1,
            active: true,
            created_at: Timestamp::new(1000),
        };
        assert_eq!(p.status(100, Timestamp::new(1099)), ProposalStatus::Active);
        assert_eq!(p.status(100, Timestamp::new(1100)), ProposalStatus::Expired);

        let inactive = Proposal { active: false, ..p };
        assert_eq!(
            inactive.status(100, Timestamp::new(1099)),
            ProposalStatus::Inactive
        );
    }
}
