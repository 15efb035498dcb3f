//! Entity identity and lifecycle.
//!
//! An [`EntityId`] is a lightweight `u64` handle with no inherent data. The
//! [`EntityTable`] is the single source of truth for which ids exist: it hands
//! out fresh or recycled ids, tracks the pending-delete flag, and reclaims
//! ids at the purge point.
//!
//! Every id is in exactly one of three states:
//!
//! ```text
//!            create()                mark_for_deletion()
//!   free ───────────────▶ alive ───────────────────────▶ pending
//!    ▲                                                      │
//!    └──────────────────────── purge() ◀────────────────────┘
//! ```

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::component::ComponentStorage;
use crate::error::EntityError;

/// A unique entity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// The null / invalid entity sentinel. Never returned by [`EntityTable::create`].
    pub const INVALID: EntityId = EntityId(0);

    /// Create an entity id from a raw `u64`.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is a valid (non-zero) id.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Lifecycle state of a tracked entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityState {
    /// Visible to systems.
    Alive,
    /// Marked for deletion; hidden from [`EntityTable::alive_ids`] and
    /// removed at the next purge.
    PendingDelete,
}

/// Allocates entity ids and tracks their lifecycle.
///
/// Ids start at 1 (0 is reserved for [`EntityId::INVALID`]). Purged ids are
/// pushed onto a FIFO free list and handed out again, oldest first, before
/// the counter advances.
#[derive(Debug)]
pub struct EntityTable {
    /// Every tracked id and its state. Ordered so snapshots are deterministic.
    entities: BTreeMap<EntityId, EntityState>,
    /// Ids reclaimed by purge, waiting for reuse.
    free: VecDeque<EntityId>,
    /// Highest id ever allocated.
    counter: u64,
}

impl EntityTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            free: VecDeque::new(),
            counter: 0,
        }
    }

    /// Create a new alive entity, reusing a freed id when one is available.
    pub fn create(&mut self) -> EntityId {
        let id = match self.free.pop_front() {
            Some(id) => {
                debug!(entity = id.id(), "reusing entity id");
                id
            }
            None => {
                self.counter += 1;
                let id = EntityId(self.counter);
                debug!(entity = id.id(), "entity created");
                id
            }
        };
        self.entities.insert(id, EntityState::Alive);
        id
    }

    /// Mark an entity for deletion at the next purge.
    ///
    /// Idempotent. Returns `true` if the id is tracked (alive or already
    /// pending). Unknown and free ids are left untouched and return `false`.
    pub fn mark_for_deletion(&mut self, id: EntityId) -> bool {
        match self.entities.get_mut(&id) {
            Some(state) => {
                if *state == EntityState::Alive {
                    trace!(entity = id.id(), "entity marked for deletion");
                }
                *state = EntityState::PendingDelete;
                true
            }
            None => {
                trace!(entity = id.id(), "ignoring deletion of untracked entity");
                false
            }
        }
    }

    /// Remove every pending entity from the table and from `storage`, and
    /// recycle their ids.
    ///
    /// Returns the purged ids in ascending order. Calling it again with no
    /// new deletions in between purges nothing.
    pub fn purge<S: ComponentStorage + ?Sized>(&mut self, storage: &mut S) -> Vec<EntityId> {
        let mut purged = Vec::new();
        self.entities.retain(|id, state| {
            if *state == EntityState::PendingDelete {
                purged.push(*id);
                false
            } else {
                true
            }
        });

        for &id in &purged {
            storage.remove_all(id);
            self.free.push_back(id);
        }

        if !purged.is_empty() {
            debug!(count = purged.len(), "purged entities");
        }
        purged
    }

    /// Snapshot of the alive ids in ascending order.
    ///
    /// Each call takes a new snapshot, so a system may mark entities for
    /// deletion while iterating without invalidating the iterator. Pending
    /// entities are never included.
    #[must_use]
    pub fn alive_ids(&self) -> std::vec::IntoIter<EntityId> {
        self.entities
            .iter()
            .filter(|(_, state)| **state == EntityState::Alive)
            .map(|(id, _)| *id)
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Returns the lifecycle state of a tracked id, or `None` if it is free
    /// or was never allocated.
    #[must_use]
    pub fn state(&self, id: EntityId) -> Option<EntityState> {
        self.entities.get(&id).copied()
    }

    /// Returns `true` if the id is alive.
    #[must_use]
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.state(id) == Some(EntityState::Alive)
    }

    /// Returns `true` if the id is marked for deletion.
    #[must_use]
    pub fn is_pending(&self, id: EntityId) -> bool {
        self.state(id) == Some(EntityState::PendingDelete)
    }

    /// Returns `true` if the id sits on the free list.
    #[must_use]
    pub fn is_free(&self, id: EntityId) -> bool {
        self.free.contains(&id)
    }

    /// Fails unless the id is alive.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::NotFound`] for untracked ids and
    /// [`EntityError::PendingDeletion`] for ids awaiting purge.
    pub fn ensure_alive(&self, id: EntityId) -> Result<(), EntityError> {
        match self.state(id) {
            Some(EntityState::Alive) => Ok(()),
            Some(EntityState::PendingDelete) => Err(EntityError::PendingDeletion(id)),
            None => Err(EntityError::NotFound(id)),
        }
    }

    /// Number of tracked ids (alive and pending).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if no ids are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of ids pending deletion.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entities
            .values()
            .filter(|state| **state == EntityState::PendingDelete)
            .count()
    }

    /// Number of ids waiting on the free list.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}

impl Default for EntityTable {
    fn default() -> Self {
        Self::new()
    }
}
