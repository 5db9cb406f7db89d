//! Notifications emitted by the quorum engine for subscribers.

use crate::proposal::ActionKind;
use custodian_types::{ActorId, Fingerprint, TokenId};

/// Engine-level events observers can subscribe to via the [`EventBus`].
///
/// Events are emitted only after an operation's commit point — a failed
/// operation emits nothing.
#[derive(Clone, Debug)]
pub enum CustodyEvent {
    /// A proposal was created.
    ProposalCreated {
        fingerprint: Fingerprint,
        proposer: ActorId,
        action: ActionKind,
    },
    /// An approval was recorded.
    ProposalApproved {
        fingerprint: Fingerprint,
        approver: ActorId,
        approvals: u32,
    },
    /// An approval was withdrawn.
    ApprovalRevoked {
        fingerprint: Fingerprint,
        approver: ActorId,
        approvals: u32,
    },
    /// A proposal crossed quorum and its action was executed.
    ProposalExecuted {
        fingerprint: Fingerprint,
        action: ActionKind,
    },
    /// A proposal was observed past its validity window and cleaned up.
    ProposalExpired { fingerprint: Fingerprint },
    /// An expired proposal was brought back with a fresh approval set.
    ProposalReactivated {
        fingerprint: Fingerprint,
        proposer: ActorId,
    },
    /// An inactive proposal record was deleted to reclaim storage.
    ProposalArchived { fingerprint: Fingerprint },
    /// A token's metadata was locked.
    MetadataLocked { token: TokenId },
    /// A token's metadata was unlocked by an admin.
    MetadataUnlocked { token: TokenId },
    /// A token was minted.
    TokenMinted {
        token: TokenId,
        to: ActorId,
        serial: String,
    },
    /// A token was burned.
    TokenBurned {
        token: TokenId,
        prior_owner: ActorId,
    },
    /// A token's ownership was forcibly reassigned.
    TokenForceTransferred {
        token: TokenId,
        from: ActorId,
        to: ActorId,
    },
    /// The minting base URI was set or updated.
    BaseUriSet { uri: String },
}

/// Synchronous fan-out event bus.
///
/// Listeners are invoked inline on the emitting thread; keep handlers fast
/// to avoid stalling engine operations.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&CustodyEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&CustodyEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &CustodyEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn emit_calls_all_listeners() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut bus = EventBus::new();

        let c1 = Arc::clone(&counter);
        bus.subscribe(Box::new(move |_| {
            c1.fetch_add(1, Ordering::SeqCst);
        }));

        let c2 = Arc::clone(&counter);
        bus.subscribe(Box::new(move |_| {
            c2.fetch_add(10, Ordering::SeqCst);
        }));

        bus.emit(&CustodyEvent::ProposalExpired {
            fingerprint: Fingerprint::ZERO,
        });

        assert_eq!(counter.load(Ordering::SeqCst), 11);
    }

    #[test]
    fn emit_with_no_listeners_is_noop() {
        let bus = EventBus::new();
        bus.emit(&CustodyEvent::BaseUriSet {
            uri: "ipfs://assets/".into(),
        }); // should not panic
    }

    #[test]
    fn listener_receives_correct_event_variant() {
        let saw_minted = Arc::new(AtomicUsize::new(0));
        let saw_burned = Arc::new(AtomicUsize::new(0));
        let mut bus = EventBus::new();

        let sm = Arc::clone(&saw_minted);
        let sb = Arc::clone(&saw_burned);
        bus.subscribe(Box::new(move |event| match event {
            CustodyEvent::TokenMinted { .. } => {
                sm.fetch_add(1, Ordering::SeqCst);
            }
            CustodyEvent::TokenBurned { .. } => {
                sb.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }));

        bus.emit(&CustodyEvent::TokenMinted {
            token: TokenId::new(1),
            to: ActorId::new("actor-1"),
            serial: "ABCDEF".into(),
        });
        bus.emit(&CustodyEvent::TokenBurned {
            token: TokenId::new(1),
            prior_owner: ActorId::new("actor-1"),
        });

        assert_eq!(saw_minted.load(Ordering::SeqCst), 1);
        assert_eq!(saw_burned.load(Ordering::SeqCst), 1);
    }
}
