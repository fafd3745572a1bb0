//! Typed integer IDs for cards, decks and players, and the stores keyed by them

use crate::CahError;
use crate::Result;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Integer ID tagged with what it identifies
///
/// An `AnswerId` cannot be passed where a `PromptId` is expected, yet on the
/// wire both are plain integers.
pub struct EntityId<T> {
    id: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> EntityId<T> {
    pub fn new(id: u32) -> Self {
        EntityId {
            id,
            _marker: PhantomData,
        }
    }

    pub fn as_u32(&self) -> u32 {
        self.id
    }
}

// Manual impls so the bounds do not leak onto T
impl<T> Clone for EntityId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityId<T> {}

impl<T> PartialEq for EntityId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for EntityId<T> {}

impl<T> PartialOrd for EntityId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for EntityId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<T> Hash for EntityId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.id)
    }
}

impl<T> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> Serialize for EntityId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.id)
    }
}

impl<'de, T> Deserialize<'de> for EntityId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        u32::deserialize(deserializer).map(EntityId::new)
    }
}

/// Anything the catalog or registry stores under an ID
pub trait GameEntity<T> {
    fn id(&self) -> EntityId<T>;
    fn name(&self) -> &str;
}

/// Lookup table from ID to value, hashed with FxHash
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    entities: FxHashMap<EntityId<T>, T>,
}

impl<T> EntityStore<T> {
    pub fn new() -> Self {
        EntityStore {
            entities: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, id: EntityId<T>, entity: T) {
        self.entities.insert(id, entity);
    }

    pub fn get(&self, id: EntityId<T>) -> Result<&T> {
        self.entities
            .get(&id)
            .ok_or(CahError::EntityNotFound(id.as_u32()))
    }

    pub fn contains(&self, id: EntityId<T>) -> bool {
        self.entities.contains_key(&id)
    }

    /// Iterate over all entities (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId<T>, &T)> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One counter for every card and deck in a catalog, so IDs never collide
/// across kinds
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next_id: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator { next_id: 0 }
    }

    pub fn next_id<T>(&mut self) -> EntityId<T> {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
