//! The set of component stores owned by a world.
//!
//! Stores are public fields so a system can borrow two kinds at once (say,
//! `transforms` mutably and `rigid_bodies` immutably). The [`Registered`]
//! trait gives generic, type-directed access for code that does not care
//! which kind it is handling, such as level loading.

use crate::component::{Component, ComponentStorage, ComponentStore};
use crate::components::{Animation, BoxCollider, Health, RigidBody, Sprite, Transform};
use crate::entity::EntityId;

/// One [`ComponentStore`] per built-in component kind.
#[derive(Debug, Default)]
pub struct Registry {
    pub transforms: ComponentStore<Transform>,
    pub rigid_bodies: ComponentStore<RigidBody>,
    pub healths: ComponentStore<Health>,
    pub sprites: ComponentStore<Sprite>,
    pub animations: ComponentStore<Animation>,
    pub box_colliders: ComponentStore<BoxCollider>,
}

impl Registry {
    /// Create a registry with every store empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The store for component kind `T`.
    #[must_use]
    pub fn store<T: Registered>(&self) -> &ComponentStore<T> {
        T::store(self)
    }

    /// The mutable store for component kind `T`.
    #[must_use]
    pub fn store_mut<T: Registered>(&mut self) -> &mut ComponentStore<T> {
        T::store_mut(self)
    }

    /// Attach `value` to `id`, overwriting any previous value of that kind.
    pub fn insert<T: Registered>(&mut self, id: EntityId, value: T) -> Option<T> {
        self.store_mut::<T>().insert(id, value)
    }

    /// The `T` attached to `id`, if any.
    #[must_use]
    pub fn get<T: Registered>(&self, id: EntityId) -> Option<&T> {
        self.store::<T>().get(id)
    }

    /// The mutable `T` attached to `id`, if any.
    #[must_use]
    pub fn get_mut<T: Registered>(&mut self, id: EntityId) -> Option<&mut T> {
        self.store_mut::<T>().get_mut(id)
    }

    /// Returns `true` if `id` has a `T`.
    #[must_use]
    pub fn has<T: Registered>(&self, id: EntityId) -> bool {
        self.store::<T>().contains(id)
    }

    /// Number of component rows held for `id` across every store.
    #[must_use]
    pub fn row_count(&self, id: EntityId) -> usize {
        [
            self.transforms.contains(id),
            self.rigid_bodies.contains(id),
            self.healths.contains(id),
            self.sprites.contains(id),
            self.animations.contains(id),
            self.box_colliders.contains(id),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

impl ComponentStorage for Registry {
    fn remove_all(&mut self, id: EntityId) {
        self.transforms.remove_all(id);
        self.rigid_bodies.remove_all(id);
        self.healths.remove_all(id);
        self.sprites.remove_all(id);
        self.animations.remove_all(id);
        self.box_colliders.remove_all(id);
    }
}

/// A component kind with a dedicated store in the [`Registry`].
pub trait Registered: Component + Sized {
    /// Borrow this kind's store.
    fn store(registry: &Registry) -> &ComponentStore<Self>;

    /// Mutably borrow this kind's store.
    fn store_mut(registry: &mut Registry) -> &mut ComponentStore<Self>;
}

macro_rules! registered {
    ($ty:ty, $field:ident) => {
        impl Registered for $ty {
            fn store(registry: &Registry) -> &ComponentStore<Self> {
                &registry.$field
            }

            fn store_mut(registry: &mut Registry) -> &mut ComponentStore<Self> {
                &mut registry.$field
            }
        }
    };
}

registered!(Transform, transforms);
registered!(RigidBody, rigid_bodies);
registered!(Health, healths);
registered!(Sprite, sprites);
registered!(Animation, animations);
registered!(BoxCollider, box_colliders);
