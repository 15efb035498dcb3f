//! # disunity_component
//!
//! The "E" and "C" in ECS: entity identity and component storage.
//!
//! This crate provides:
//!
//! - [`EntityId`]: opaque `u64` entity handles.
//! - [`EntityTable`]: allocation, free-list recycling and deferred deletion.
//! - [`Component`] trait and [`ComponentStore`]: one sparse map per kind.
//! - The built-in component kinds ([`Transform`], [`RigidBody`], [`Health`],
//!   [`Sprite`], [`Animation`], [`BoxCollider`]).
//! - [`Registry`]: the set of stores a world owns.
//!
//! Identity and data are kept apart: the entity table never holds component
//! values, and a store never decides whether an entity is alive.

pub mod component;
pub mod components;
pub mod entity;
pub mod error;
pub mod registry;

pub use component::{Component, ComponentStorage, ComponentStore};
pub use components::{Animation, BoxCollider, Health, RigidBody, Sprite, Transform};
pub use entity::{EntityId, EntityState, EntityTable};
pub use error::EntityError;
pub use registry::{Registered, Registry};
