//! Core [`Component`] trait and sparse per-kind storage.
//!
//! Each component kind lives in its own [`ComponentStore`], a sparse map from
//! [`EntityId`] to value. A row's presence is the only signal that an entity
//! has that capability: there is no archetype or bitmask. Lookups return
//! `Option`, and systems treat `None` as "skip this entity".

use std::collections::HashMap;

use crate::entity::EntityId;

/// The core component trait.
///
/// Components are plain values. They are cloned into and out of level
/// descriptions and must be `'static` so stores can be owned by the world.
///
/// # Examples
///
/// ```rust
/// use disunity_component::{Component, ComponentStore, EntityId};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Score(u32);
///
/// impl Component for Score {
///     fn type_name() -> &'static str { "Score" }
/// }
///
/// let mut scores = ComponentStore::<Score>::new();
/// scores.insert(EntityId(1), Score(10));
/// assert_eq!(scores.get(EntityId(1)), Some(&Score(10)));
/// assert!(scores.get(EntityId(2)).is_none());
/// ```
pub trait Component: Clone + std::fmt::Debug + 'static {
    /// A human-readable name for this component kind, used in logs.
    fn type_name() -> &'static str;
}

/// Anything that holds per-entity rows and can drop all of an entity's rows.
///
/// The entity table calls this at the purge point; it is the only caller.
pub trait ComponentStorage {
    /// Remove every row belonging to `id`. Missing rows are not an error.
    fn remove_all(&mut self, id: EntityId);
}

/// Sparse storage for one component kind.
#[derive(Debug, Clone)]
pub struct ComponentStore<T: Component> {
    rows: HashMap<EntityId, T>,
}

impl<T: Component> ComponentStore<T> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Attach `value` to `id`, overwriting any previous value.
    ///
    /// Returns the previous value, if there was one.
    pub fn insert(&mut self, id: EntityId, value: T) -> Option<T> {
        self.rows.insert(id, value)
    }

    /// Returns the value attached to `id`, if any.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Returns a mutable reference to the value attached to `id`, if any.
    #[must_use]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    /// Returns `true` if `id` has this component.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.rows.contains_key(&id)
    }

    /// Detach and return the value attached to `id`.
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        self.rows.remove(&id)
    }

    /// Number of entities with this component.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no entity has this component.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over every `(id, value)` row in unspecified order.
    ///
    /// This ignores entity liveness; systems go through the entity table's
    /// alive snapshot instead.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.rows.iter().map(|(id, value)| (*id, value))
    }

    /// The component kind's name.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        T::type_name()
    }
}

impl<T: Component> Default for ComponentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> ComponentStorage for ComponentStore<T> {
    fn remove_all(&mut self, id: EntityId) {
        self.rows.remove(&id);
    }
}
