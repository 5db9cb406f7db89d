//! Quorum — multi-party approval gating for irreversible asset actions.
//!
//! Irreversible actions (reissuing a token under a new serial, forcibly
//! reassigning ownership) are never executed directly. They are proposed,
//! gathered approvals from distinct capability holders, and executed
//! synchronously by the approval that crosses the configured quorum.
//! Proposals carry a time-bounded validity window realized lazily: expiry is
//! derived from the clock at each observation, never stored.
//!
//! This crate owns the proposal ledger, the executor, serial-based minting,
//! and the metadata lock gate. Role checks go through `custodian-roles`;
//! token state lives in `custodian-registry`.

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod logging;
pub mod proposal;

pub use config::{QuorumConfig, DEFAULT_EXPIRY_SECS, PROPOSAL_COOLDOWN_SECS};
pub use engine::{ApprovalOutcome, QuorumEngine};
pub use error::QuorumError;
pub use event::{CustodyEvent, EventBus};
pub use proposal::{
    fingerprint, ActionKind, Proposal, ProposalStatus, ReassignParams, ReissueParams,
};
