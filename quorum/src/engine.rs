//! Core quorum engine — proposal ledger, action executor, minting.
//!
//! All operations are strictly serialized through `&mut self`: no operation
//! can observe a partially-applied mutation from another. Atomicity on
//! failure is realized as check-then-commit — every operation validates all
//! of its failure conditions (including executor preconditions when an
//! approval would cross quorum) before its first mutation, so a returned
//! `Err` always leaves the engine, registry, and configuration untouched.
//! Notifications are buffered per operation and emitted only after the
//! commit point.

use std::collections::{HashMap, HashSet};

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use tracing::{debug, info};

use crate::config::{QuorumConfig, PROPOSAL_COOLDOWN_SECS};
use crate::error::QuorumError;
use crate::event::{CustodyEvent, EventBus};
use crate::proposal::{
    fingerprint, ActionKind, Proposal, ProposalStatus, ReassignParams, ReissueParams,
};
use custodian_registry::AssetRegistry;
use custodian_roles::RoleRegistry;
use custodian_types::{ActorId, Capability, Fingerprint, Serial, Timestamp, TokenId};

type Blake2b256 = Blake2b<U32>;

/// Outcome of a successful `approve_proposal` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// The approval was counted; quorum not yet met.
    Recorded { approvals: u32 },
    /// The approval crossed quorum and the action executed in this call.
    Executed,
    /// The proposal was past its validity window; it was cleaned up and the
    /// approval was dropped without counting.
    ExpiredCleaned,
}

/// Validated effect of an approved proposal, computed before any mutation.
enum ExecutionPlan {
    Reissue {
        token: TokenId,
        prior_owner: ActorId,
        /// `None` for burn-only reissues (empty replacement serial).
        replacement: Option<(ActorId, Serial)>,
    },
    ForceTransfer {
        token: TokenId,
        from: ActorId,
        to: ActorId,
    },
}

/// The quorum engine.
///
/// Owns the proposal ledger, approver sets, proposer throttle, the permanent
/// serial registry, and the quorum configuration (injected at construction).
/// The role authority and asset registry are external collaborators passed
/// into each operation that needs them.
pub struct QuorumEngine {
    /// Proposal records keyed by fingerprint. At most one record per
    /// fingerprint; an entry is removed on execution, expiry cleanup, or
    /// archival, after which the fingerprint may be reused.
    proposals: HashMap<Fingerprint, Proposal>,
    /// Per-proposal approver flags. Invariant: a proposal's `approval_count`
    /// equals the number of `true` flags here; the two are always updated
    /// together.
    approvers: HashMap<Fingerprint, HashMap<ActorId, bool>>,
    /// Last proposal-creation time per proposer (global across action kinds).
    last_proposed: HashMap<ActorId, Timestamp>,
    /// Hashes of every serial ever minted. Entries are permanent — a serial
    /// stays reserved even after its token is burned.
    used_serials: HashSet<[u8; 32]>,
    /// Next internal token id, 1-based, monotonic, never reused.
    next_token_id: u64,
    /// Total tokens ever minted.
    minted_count: u64,
    config: QuorumConfig,
    events: EventBus,
}

impl QuorumEngine {
    pub fn new(config: QuorumConfig) -> Self {
        Self {
            proposals: HashMap::new(),
            approvers: HashMap::new(),
            last_proposed: HashMap::new(),
            used_serials: HashSet::new(),
            next_token_id: 1,
            minted_count: 0,
            config,
            events: EventBus::new(),
        }
    }

    /// Subscribe to the engine's notification stream.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&CustodyEvent) + Send + Sync>) {
        self.events.subscribe(listener);
    }

    pub fn config(&self) -> &QuorumConfig {
        &self.config
    }

    /// Total tokens ever minted (burns do not decrement).
    pub fn minted_count(&self) -> u64 {
        self.minted_count
    }

    // ── Proposal lifecycle ───────────────────────────────────────────────

    /// Create a proposal for an irreversible action.
    ///
    /// The proposer counts as the first approver. A nonzero `custom_expiry`
    /// overwrites the validity window for the whole action kind — a side
    /// effect on the shared expiry table, not scoped to this proposal.
    pub fn propose_action(
        &mut self,
        roles: &RoleRegistry,
        proposer: &ActorId,
        action: ActionKind,
        target: TokenId,
        params: Vec<u8>,
        custom_expiry: Option<u64>,
        now: Timestamp,
    ) -> Result<Fingerprint, QuorumError> {
        self.check_capability(roles, proposer, Capability::Propose)?;

        if let Some(last) = self.last_proposed.get(proposer) {
            if !last.has_expired(PROPOSAL_COOLDOWN_SECS, now) {
                return Err(QuorumError::ThrottleViolation {
                    remaining_secs: last
                        .as_secs()
                        .saturating_add(PROPOSAL_COOLDOWN_SECS)
                        .saturating_sub(now.as_secs()),
                });
            }
        }

        let fp = fingerprint(&action, target, &params);
        let mut stale_expired = false;
        if let Some(existing) = self.proposals.get(&fp) {
            let window = self.config.expiry_for(&existing.action);
            match existing.status(window, now) {
                ProposalStatus::Active => {
                    return Err(QuorumError::DuplicateActiveProposal(fp));
                }
                // A retired-in-all-but-storage record does not block reuse
                // of its fingerprint; expired leftovers get their expiry
                // notification as part of the replacement.
                ProposalStatus::Expired => stale_expired = true,
                ProposalStatus::Inactive => {}
            }
        }

        // Commit point.
        let mut events = Vec::new();
        if self.proposals.remove(&fp).is_some() {
            self.approvers.remove(&fp);
            if stale_expired {
                events.push(CustodyEvent::ProposalExpired { fingerprint: fp });
            }
        }
        if let Some(secs) = custom_expiry {
            if secs != 0 {
                self.config.set_action_expiry(action.clone(), secs)?;
                info!(
                    action = action.name(),
                    expiry_secs = secs,
                    "proposal overrode the shared expiry window for its action kind"
                );
            }
        }
        self.proposals.insert(
            fp,
            Proposal {
                action: action.clone(),
                target,
                params,
                approval_count: 1,
                active: true,
                created_at: now,
            },
        );
        let mut flags = HashMap::new();
        flags.insert(proposer.clone(), true);
        self.approvers.insert(fp, flags);
        self.last_proposed.insert(proposer.clone(), now);

        debug!(fingerprint = %fp, action = action.name(), %proposer, "proposal created");
        events.push(CustodyEvent::ProposalCreated {
            fingerprint: fp,
            proposer: proposer.clone(),
            action,
        });
        self.flush(events);
        Ok(fp)
    }

    /// Record an approval; executes the action synchronously in this call if
    /// the approval crosses the configured quorum.
    ///
    /// Approving a proposal past its validity window performs lazy cleanup
    /// instead: the record is deleted, an expiry notification is emitted,
    /// and the approval is dropped without counting.
    pub fn approve_proposal(
        &mut self,
        roles: &RoleRegistry,
        registry: &mut AssetRegistry,
        approver: &ActorId,
        fp: Fingerprint,
        now: Timestamp,
    ) -> Result<ApprovalOutcome, QuorumError> {
        self.check_capability(roles, approver, Capability::Approve)?;

        let (action, target, params, created_at, approval_count) = match self.proposals.get(&fp) {
            Some(p) if p.active => (
                p.action.clone(),
                p.target,
                p.params.clone(),
                p.created_at,
                p.approval_count,
            ),
            _ => return Err(QuorumError::NoSuchActiveProposal(fp)),
        };

        let window = self.config.expiry_for(&action);
        if created_at.has_expired(window, now) {
            self.proposals.remove(&fp);
            self.approvers.remove(&fp);
            debug!(fingerprint = %fp, "expired proposal cleaned up on approval");
            self.events
                .emit(&CustodyEvent::ProposalExpired { fingerprint: fp });
            return Ok(ApprovalOutcome::ExpiredCleaned);
        }

        if self.is_flagged(&fp, approver) {
            return Err(QuorumError::DuplicateApproval(approver.clone()));
        }

        let new_count = approval_count
            .checked_add(1)
            .ok_or_else(|| QuorumError::InvariantViolation("approval count overflow".into()))?;
        let meets_quorum = self
            .config
            .threshold(&action)
            .map_or(false, |required| new_count >= required);

        if !meets_quorum {
            let p = self
                .proposals
                .get_mut(&fp)
                .ok_or_else(|| QuorumError::InvariantViolation("proposal record vanished".into()))?;
            p.approval_count = new_count;
            self.approvers
                .entry(fp)
                .or_default()
                .insert(approver.clone(), true);
            debug!(fingerprint = %fp, %approver, approvals = new_count, "approval recorded");
            self.events.emit(&CustodyEvent::ProposalApproved {
                fingerprint: fp,
                approver: approver.clone(),
                approvals: new_count,
            });
            return Ok(ApprovalOutcome::Recorded {
                approvals: new_count,
            });
        }

        // Quorum crossed: validate the whole effect before touching any
        // state, so an execution failure fails this approval with nothing
        // applied.
        let plan = self.prepare_execution(&action, target, &params, registry)?;

        // Commit point.
        let mut events = Vec::new();
        if let Some(p) = self.proposals.get_mut(&fp) {
            p.approval_count = new_count;
            // Retired before dispatch.
            p.active = false;
        }
        self.approvers
            .entry(fp)
            .or_default()
            .insert(approver.clone(), true);
        events.push(CustodyEvent::ProposalApproved {
            fingerprint: fp,
            approver: approver.clone(),
            approvals: new_count,
        });
        self.apply_execution(plan, registry, &mut events)?;
        self.proposals.remove(&fp);
        self.approvers.remove(&fp);
        debug!(fingerprint = %fp, action = action.name(), "quorum met; action executed");
        events.push(CustodyEvent::ProposalExecuted {
            fingerprint: fp,
            action,
        });
        self.flush(events);
        Ok(ApprovalOutcome::Executed)
    }

    /// Withdraw a previously recorded approval. Returns the remaining count.
    pub fn revoke_approval(
        &mut self,
        roles: &RoleRegistry,
        approver: &ActorId,
        fp: Fingerprint,
    ) -> Result<u32, QuorumError> {
        self.check_capability(roles, approver, Capability::Approve)?;

        let active = self.proposals.get(&fp).map_or(false, |p| p.active);
        if !active {
            return Err(QuorumError::NoSuchActiveProposal(fp));
        }
        if !self.is_flagged(&fp, approver) {
            return Err(QuorumError::NotAnApprover(approver.clone()));
        }

        let p = self
            .proposals
            .get_mut(&fp)
            .ok_or_else(|| QuorumError::InvariantViolation("proposal record vanished".into()))?;
        // The flag check above guarantees at least one counted approval.
        if p.approval_count == 0 {
            return Err(QuorumError::InvariantViolation(
                "approval count would underflow".into(),
            ));
        }
        p.approval_count -= 1;
        let remaining = p.approval_count;
        if let Some(flags) = self.approvers.get_mut(&fp) {
            flags.insert(approver.clone(), false);
        }

        debug!(fingerprint = %fp, %approver, approvals = remaining, "approval revoked");
        self.events.emit(&CustodyEvent::ApprovalRevoked {
            fingerprint: fp,
            approver: approver.clone(),
            approvals: remaining,
        });
        Ok(remaining)
    }

    /// Bring an expired proposal back with a fresh validity window.
    ///
    /// All prior approvals are discarded; the reactivating proposer becomes
    /// the sole approver and their throttle timestamp is refreshed.
    pub fn reactivate_proposal(
        &mut self,
        roles: &RoleRegistry,
        proposer: &ActorId,
        fp: Fingerprint,
        now: Timestamp,
    ) -> Result<(), QuorumError> {
        self.check_capability(roles, proposer, Capability::Propose)?;

        let (action, created_at, status) = match self.proposals.get(&fp) {
            Some(p) => {
                let window = self.config.expiry_for(&p.action);
                (p.action.clone(), p.created_at, p.status(window, now))
            }
            None => return Err(QuorumError::NoSuchProposal(fp)),
        };
        match status {
            ProposalStatus::Active => return Err(QuorumError::ProposalStillActive(fp)),
            ProposalStatus::Expired => {}
            ProposalStatus::Inactive => {
                let window = self.config.expiry_for(&action);
                if !created_at.has_expired(window, now) {
                    return Err(QuorumError::NotYetExpired {
                        remaining_secs: created_at
                            .as_secs()
                            .saturating_add(window)
                            .saturating_sub(now.as_secs()),
                    });
                }
            }
        }

        let p = self
            .proposals
            .get_mut(&fp)
            .ok_or_else(|| QuorumError::InvariantViolation("proposal record vanished".into()))?;
        p.approval_count = 1;
        p.active = true;
        p.created_at = now;
        let mut flags = HashMap::new();
        flags.insert(proposer.clone(), true);
        self.approvers.insert(fp, flags);
        self.last_proposed.insert(proposer.clone(), now);

        debug!(fingerprint = %fp, %proposer, "proposal reactivated");
        self.events.emit(&CustodyEvent::ProposalReactivated {
            fingerprint: fp,
            proposer: proposer.clone(),
        });
        Ok(())
    }

    /// Delete a retired proposal record, emitting an archival notification.
    pub fn archive_proposal(
        &mut self,
        roles: &RoleRegistry,
        approver: &ActorId,
        fp: Fingerprint,
        now: Timestamp,
    ) -> Result<(), QuorumError> {
        self.check_capability(roles, approver, Capability::Approve)?;

        match self.proposals.get(&fp) {
            None => return Err(QuorumError::NoSuchProposal(fp)),
            Some(p) if p.is_live(self.config.expiry_for(&p.action), now) => {
                return Err(QuorumError::ProposalStillActive(fp));
            }
            Some(_) => {}
        }

        self.proposals.remove(&fp);
        self.approvers.remove(&fp);
        debug!(fingerprint = %fp, "proposal archived");
        self.events
            .emit(&CustodyEvent::ProposalArchived { fingerprint: fp });
        Ok(())
    }

    /// Delete a retired proposal record, emitting an expiry notification.
    ///
    /// Same storage effect as archival; only the notification semantics
    /// differ for observers.
    pub fn clean_up_proposal(
        &mut self,
        roles: &RoleRegistry,
        approver: &ActorId,
        fp: Fingerprint,
        now: Timestamp,
    ) -> Result<(), QuorumError> {
        self.check_capability(roles, approver, Capability::Approve)?;

        match self.proposals.get(&fp) {
            None => return Err(QuorumError::NoSuchProposal(fp)),
            Some(p) if p.is_live(self.config.expiry_for(&p.action), now) => {
                return Err(QuorumError::ProposalStillConsideredActive(fp));
            }
            Some(_) => {}
        }

        self.proposals.remove(&fp);
        self.approvers.remove(&fp);
        debug!(fingerprint = %fp, "expired proposal cleaned up");
        self.events
            .emit(&CustodyEvent::ProposalExpired { fingerprint: fp });
        Ok(())
    }

    // ── Queries (pure) ───────────────────────────────────────────────────

    /// Whether the proposal is stored active AND within its validity window.
    pub fn is_proposal_active(&self, fp: Fingerprint, now: Timestamp) -> bool {
        self.proposals
            .get(&fp)
            .map_or(false, |p| p.is_live(self.config.expiry_for(&p.action), now))
    }

    /// Derived status of a proposal record, if one exists.
    pub fn proposal_status(&self, fp: Fingerprint, now: Timestamp) -> Option<ProposalStatus> {
        self.proposals
            .get(&fp)
            .map(|p| p.status(self.config.expiry_for(&p.action), now))
    }

    /// Full proposal detail by fingerprint.
    pub fn proposal(&self, fp: Fingerprint) -> Option<&Proposal> {
        self.proposals.get(&fp)
    }

    /// Actors currently flagged as approvers of a proposal.
    pub fn approvers_of(&self, fp: Fingerprint) -> Vec<ActorId> {
        self.approvers
            .get(&fp)
            .map(|flags| {
                flags
                    .iter()
                    .filter(|(_, approved)| **approved)
                    .map(|(actor, _)| actor.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    // ── Minting ──────────────────────────────────────────────────────────

    /// Mint a token with a fresh serial to `to`.
    ///
    /// The serial is reserved permanently; its hash stays in the serial
    /// registry even if the token is later burned. The metadata URI is the
    /// configured base URI with the serial appended.
    pub fn mint(
        &mut self,
        roles: &RoleRegistry,
        registry: &mut AssetRegistry,
        minter: &ActorId,
        to: ActorId,
        serial: &str,
    ) -> Result<TokenId, QuorumError> {
        self.check_capability(roles, minter, Capability::Mint)?;

        let serial = Serial::new(serial)?;
        if self.used_serials.contains(&serial_hash(&serial)) {
            return Err(QuorumError::DuplicateSerial(serial.as_str().to_owned()));
        }
        if self.config.base_uri().is_empty() {
            return Err(QuorumError::BaseUriNotSet);
        }

        let token = self.create_with_serial(registry, to.clone(), &serial)?;
        debug!(%token, %to, serial = serial.as_str(), "token minted");
        self.events.emit(&CustodyEvent::TokenMinted {
            token,
            to,
            serial: serial.as_str().to_owned(),
        });
        Ok(token)
    }

    // ── Metadata lock gate ───────────────────────────────────────────────

    pub fn lock_metadata(
        &mut self,
        roles: &RoleRegistry,
        registry: &mut AssetRegistry,
        actor: &ActorId,
        token: TokenId,
    ) -> Result<(), QuorumError> {
        self.check_capability(roles, actor, Capability::ManageMetadata)?;
        if registry.is_locked(token) {
            return Err(QuorumError::MetadataAlreadyLocked(token));
        }
        registry.set_locked(token, true)?;
        self.events.emit(&CustodyEvent::MetadataLocked { token });
        Ok(())
    }

    /// Admin-only override clearing a metadata lock.
    pub fn unlock_metadata(
        &mut self,
        roles: &RoleRegistry,
        registry: &mut AssetRegistry,
        actor: &ActorId,
        token: TokenId,
    ) -> Result<(), QuorumError> {
        self.check_capability(roles, actor, Capability::Admin)?;
        if registry.exists(token) && !registry.is_locked(token) {
            return Err(QuorumError::MetadataNotLocked(token));
        }
        registry.set_locked(token, false)?;
        self.events.emit(&CustodyEvent::MetadataUnlocked { token });
        Ok(())
    }

    // ── Admin configuration surface ──────────────────────────────────────

    pub fn set_quorum_threshold(
        &mut self,
        roles: &RoleRegistry,
        admin: &ActorId,
        kind: ActionKind,
        required: u32,
    ) -> Result<(), QuorumError> {
        self.check_capability(roles, admin, Capability::Admin)?;
        self.config.set_quorum_threshold(kind.clone(), required)?;
        info!(action = kind.name(), required, "quorum threshold set");
        Ok(())
    }

    pub fn remove_quorum_threshold(
        &mut self,
        roles: &RoleRegistry,
        admin: &ActorId,
        kind: &ActionKind,
    ) -> Result<bool, QuorumError> {
        self.check_capability(roles, admin, Capability::Admin)?;
        Ok(self.config.remove_quorum_threshold(kind))
    }

    pub fn set_action_expiry(
        &mut self,
        roles: &RoleRegistry,
        admin: &ActorId,
        kind: ActionKind,
        secs: u64,
    ) -> Result<(), QuorumError> {
        self.check_capability(roles, admin, Capability::Admin)?;
        self.config.set_action_expiry(kind, secs)
    }

    pub fn remove_action_expiry(
        &mut self,
        roles: &RoleRegistry,
        admin: &ActorId,
        kind: &ActionKind,
    ) -> Result<bool, QuorumError> {
        self.check_capability(roles, admin, Capability::Admin)?;
        Ok(self.config.remove_action_expiry(kind))
    }

    pub fn set_default_expiry(
        &mut self,
        roles: &RoleRegistry,
        admin: &ActorId,
        secs: u64,
    ) -> Result<(), QuorumError> {
        self.check_capability(roles, admin, Capability::Admin)?;
        self.config.set_default_expiry(secs)
    }

    pub fn set_base_uri(
        &mut self,
        roles: &RoleRegistry,
        admin: &ActorId,
        uri: impl Into<String>,
    ) -> Result<(), QuorumError> {
        self.check_capability(roles, admin, Capability::Admin)?;
        let uri = uri.into();
        self.config.set_base_uri(uri.clone())?;
        self.events.emit(&CustodyEvent::BaseUriSet { uri });
        Ok(())
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn check_capability(
        &self,
        roles: &RoleRegistry,
        actor: &ActorId,
        capability: Capability,
    ) -> Result<(), QuorumError> {
        if roles.has_capability(actor, capability) {
            Ok(())
        } else {
            Err(QuorumError::MissingCapability {
                actor: actor.clone(),
                capability,
            })
        }
    }

    fn is_flagged(&self, fp: &Fingerprint, actor: &ActorId) -> bool {
        self.approvers
            .get(fp)
            .and_then(|flags| flags.get(actor))
            .copied()
            .unwrap_or(false)
    }

    /// Validate an action's full effect without mutating anything.
    fn prepare_execution(
        &self,
        action: &ActionKind,
        target: TokenId,
        params: &[u8],
        registry: &AssetRegistry,
    ) -> Result<ExecutionPlan, QuorumError> {
        match action {
            ActionKind::Reissue => {
                let decoded = ReissueParams::decode(params)?;
                let prior_owner = registry.owner_of(target)?.clone();
                let replacement = if decoded.new_serial.is_empty() {
                    // Burn-only reissue: intentional, no replacement minted.
                    None
                } else {
                    let serial = Serial::new(decoded.new_serial)?;
                    if self.used_serials.contains(&serial_hash(&serial)) {
                        return Err(QuorumError::DuplicateSerial(serial.as_str().to_owned()));
                    }
                    if self.config.base_uri().is_empty() {
                        return Err(QuorumError::BaseUriNotSet);
                    }
                    if registry.exists(TokenId::new(self.next_token_id)) {
                        return Err(QuorumError::InvariantViolation(format!(
                            "replacement token id {} already exists",
                            self.next_token_id
                        )));
                    }
                    Some((decoded.new_owner, serial))
                };
                Ok(ExecutionPlan::Reissue {
                    token: target,
                    prior_owner,
                    replacement,
                })
            }
            ActionKind::ForceTransfer => {
                let decoded = ReassignParams::decode(params)?;
                let owner = registry.owner_of(target)?.clone();
                if owner == decoded.new_owner {
                    return Err(QuorumError::NoOpTransfer {
                        token: target,
                        owner,
                    });
                }
                Ok(ExecutionPlan::ForceTransfer {
                    token: target,
                    from: owner,
                    to: decoded.new_owner,
                })
            }
            ActionKind::Other(kind) => Err(QuorumError::UnsupportedAction(kind.clone())),
        }
    }

    /// Apply a validated plan. Infallible after `prepare_execution` has
    /// passed against the same state; errors here indicate a broken invariant
    /// and are propagated rather than swallowed.
    fn apply_execution(
        &mut self,
        plan: ExecutionPlan,
        registry: &mut AssetRegistry,
        events: &mut Vec<CustodyEvent>,
    ) -> Result<(), QuorumError> {
        match plan {
            ExecutionPlan::Reissue {
                token,
                prior_owner,
                replacement,
            } => {
                registry.destroy(token)?;
                events.push(CustodyEvent::TokenBurned { token, prior_owner });
                if let Some((new_owner, serial)) = replacement {
                    let minted = self.create_with_serial(registry, new_owner.clone(), &serial)?;
                    events.push(CustodyEvent::TokenMinted {
                        token: minted,
                        to: new_owner,
                        serial: serial.as_str().to_owned(),
                    });
                }
            }
            ExecutionPlan::ForceTransfer { token, from, to } => {
                registry.reassign(&from, to.clone(), token)?;
                events.push(CustodyEvent::TokenForceTransferred { token, from, to });
            }
        }
        Ok(())
    }

    /// Allocate the next token id, create the token, set its metadata URI,
    /// and permanently reserve the serial. Shared by minting and reissue.
    fn create_with_serial(
        &mut self,
        registry: &mut AssetRegistry,
        to: ActorId,
        serial: &Serial,
    ) -> Result<TokenId, QuorumError> {
        let token = TokenId::new(self.next_token_id);
        registry.create(to, token)?;
        // A freshly allocated id cannot be locked; set_metadata_uri still
        // consults the gate so the registry stays safe to call directly.
        registry.set_metadata_uri(token, format!("{}{}", self.config.base_uri(), serial))?;
        self.used_serials.insert(serial_hash(serial));
        self.next_token_id += 1;
        self.minted_count += 1;
        Ok(token)
    }

    fn flush(&self, events: Vec<CustodyEvent>) {
        for event in &events {
            self.events.emit(event);
        }
    }
}

impl Default for QuorumEngine {
    fn default() -> Self {
        Self::new(QuorumConfig::default())
    }
}

/// Hash a serial for the permanent serial registry.
fn serial_hash(serial: &Serial) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(serial.as_bytes());
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}
