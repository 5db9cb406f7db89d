//! Quorum engine errors.
//!
//! Every failure is synchronous and leaves engine state exactly as it was
//! before the call; operations validate all failure conditions before their
//! first mutation.

use custodian_registry::RegistryError;
use custodian_types::{ActorId, Capability, Fingerprint, SerialError, TokenId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuorumError {
    // ── Authorization ────────────────────────────────────────────────────
    #[error("actor {actor} does not hold the {capability} capability")]
    MissingCapability {
        actor: ActorId,
        capability: Capability,
    },

    // ── Throttling ───────────────────────────────────────────────────────
    #[error("proposer cooldown not elapsed: {remaining_secs}s remaining")]
    ThrottleViolation { remaining_secs: u64 },

    // ── State conflicts ──────────────────────────────────────────────────
    #[error("an active proposal already exists for fingerprint {0}")]
    DuplicateActiveProposal(Fingerprint),

    #[error("approver {0} has already approved this proposal")]
    DuplicateApproval(ActorId),

    #[error("actor {0} is not an approver of this proposal")]
    NotAnApprover(ActorId),

    #[error("proposal {0} is still active")]
    ProposalStillActive(Fingerprint),

    #[error("proposal has not expired yet: {remaining_secs}s remaining")]
    NotYetExpired { remaining_secs: u64 },

    #[error("proposal {0} is still considered active (unexpired)")]
    ProposalStillConsideredActive(Fingerprint),

    // ── Not found ────────────────────────────────────────────────────────
    #[error("no active proposal for fingerprint {0}")]
    NoSuchActiveProposal(Fingerprint),

    #[error("no proposal record for fingerprint {0}")]
    NoSuchProposal(Fingerprint),

    // ── Validation ───────────────────────────────────────────────────────
    #[error(transparent)]
    Serial(#[from] SerialError),

    #[error("serial {0} has already been used")]
    DuplicateSerial(String),

    #[error("invalid base URI {0:?}: must be non-empty and end with '/'")]
    InvalidBaseUri(String),

    #[error("base URI must be configured before minting")]
    BaseUriNotSet,

    #[error("quorum threshold must be nonzero")]
    ZeroThreshold,

    #[error("expiry duration must be nonzero")]
    ZeroDuration,

    #[error("transfer target already owns token {token}")]
    NoOpTransfer { token: TokenId, owner: ActorId },

    #[error("malformed action parameters: {0}")]
    MalformedParams(String),

    #[error("metadata of token {0} is already locked")]
    MetadataAlreadyLocked(TokenId),

    #[error("metadata of token {0} is not locked")]
    MetadataNotLocked(TokenId),

    // ── Execution ────────────────────────────────────────────────────────
    #[error("unsupported action kind {0:?}")]
    UnsupportedAction(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
