//! Capability grants per actor.

use custodian_types::{ActorId, Capability};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// In-memory capability membership.
///
/// Grants are idempotent; `grant`/`revoke` report whether the set actually
/// changed so callers can distinguish no-ops without a separate lookup.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoleRegistry {
    grants: HashMap<ActorId, HashSet<Capability>>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a capability. Returns `true` if the actor did not already hold it.
    pub fn grant(&mut self, actor: ActorId, capability: Capability) -> bool {
        self.grants.entry(actor).or_default().insert(capability)
    }

    /// Revoke a capability. Returns `true` if the actor held it.
    pub fn revoke(&mut self, actor: &ActorId, capability: Capability) -> bool {
        match self.grants.get_mut(actor) {
            Some(set) => {
                let removed = set.remove(&capability);
                if set.is_empty() {
                    self.grants.remove(actor);
                }
                removed
            }
            None => false,
        }
    }

    /// Whether the actor currently holds the capability.
    pub fn has_capability(&self, actor: &ActorId, capability: Capability) -> bool {
        self.grants
            .get(actor)
            .map_or(false, |set| set.contains(&capability))
    }

    /// All capabilities currently held by the actor.
    pub fn capabilities_of(&self, actor: &ActorId) -> Vec<Capability> {
        self.grants
            .get(actor)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_actor(n: u8) -> ActorId {
        ActorId::new(format!("actor-{n}"))
    }

    #[test]
    fn grant_then_check() {
        let mut roles = RoleRegistry::new();
        let a = test_actor(1);
        assert!(!roles.has_capability(&a, Capability::Propose));
        assert!(roles.grant(a.clone(), Capability::Propose));
        assert!(roles.has_capability(&a, Capability::Propose));
    }

    #[test]
    fn grant_is_idempotent() {
        let mut roles = RoleRegistry::new();
        let a = test_actor(1);
        assert!(roles.grant(a.clone(), Capability::Mint));
        assert!(!roles.grant(a.clone(), Capability::Mint));
        assert!(roles.has_capability(&a, Capability::Mint));
    }

    #[test]
    fn revoke_removes_only_named_capability() {
        let mut roles = RoleRegistry::new();
        let a = test_actor(1);
        roles.grant(a.clone(), Capability::Approve);
        roles.grant(a.clone(), Capability::Admin);

        assert!(roles.revoke(&a, Capability::Approve));
        assert!(!roles.has_capability(&a, Capability::Approve));
        assert!(roles.has_capability(&a, Capability::Admin));
    }

    #[test]
    fn revoke_unknown_actor_is_noop() {
        let mut roles = RoleRegistry::new();
        assert!(!roles.revoke(&test_actor(9), Capability::Admin));
    }

    #[test]
    fn capabilities_of_lists_all_grants() {
        let mut roles = RoleRegistry::new();
        let a = test_actor(1);
        roles.grant(a.clone(), Capability::Propose);
        roles.grant(a.clone(), Capability::Approve);

        let mut caps = roles.capabilities_of(&a);
        caps.sort_by_key(|c| c.name());
        assert_eq!(caps, vec![Capability::Approve, Capability::Propose]);
    }
}
