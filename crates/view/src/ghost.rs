//! Ghost entity synthesis.
//!
//! A ghost is a client-only copy of a real entity, shown at a transformed
//! location so it appears through the portal surface. Getting a spawn
//! representation that renders correctly for a *specific* entity type is
//! surprisingly involved: a generic descriptor omits type-specific fields
//! and renders wrong, so we either ask the entity directly (modern hosts)
//! or extract the descriptor through a throwaway tracker entry (older
//! hosts). Both paths must produce an equivalent descriptor.

use crate::{EntityId, HostVersion, InitError, SpawnStrategy, YawSource};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Position and reported rotation of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityTransform {
    /// World position.
    pub position: Vec3,
    /// Yaw as the host reports it, in degrees. For living entities this is
    /// actually the head yaw.
    pub head_yaw: f32,
    /// Pitch in degrees.
    pub pitch: f32,
}

/// One slot of an entity's synchronized state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WatcherValue {
    /// Raw byte slot (status bitmasks).
    Byte(u8),
    /// Integer slot.
    Int(i32),
    /// Float slot (health).
    Float(f32),
    /// Text slot (custom names).
    Text(String),
    /// Boolean slot (flags).
    Bool(bool),
}

/// An entity's live synchronized-state snapshot, indexed by slot.
///
/// This must be the entity's *real* watcher contents; a freshly
/// constructed empty snapshot makes ghosts render without equipment,
/// names, or status flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatcherSnapshot {
    slots: BTreeMap<u8, WatcherValue>,
}

impl WatcherSnapshot {
    /// Empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one slot.
    pub fn set(&mut self, index: u8, value: WatcherValue) {
        self.slots.insert(index, value);
    }

    /// Read one slot.
    pub fn get(&self, index: u8) -> Option<&WatcherValue> {
        self.slots.get(&index)
    }

    /// Iterate slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &WatcherValue)> {
        self.slots.iter().map(|(i, v)| (*i, v))
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Packet-equivalent spawn representation of one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnDescriptor {
    /// The real entity this ghost mirrors.
    pub entity: EntityId,
    /// Concrete entity type name.
    pub kind: String,
    /// Spawn position.
    pub position: Vec3,
    /// Yaw in degrees.
    pub yaw: f32,
    /// Pitch in degrees.
    pub pitch: f32,
}

impl SpawnDescriptor {
    /// Re-anchor this descriptor through a portal transform: the position
    /// is mapped into the destination frame and the yaw/pitch follow the
    /// rotated facing vector.
    pub fn anchored(&self, rotation: &portalveil_core::Rotation) -> SpawnDescriptor {
        let facing = rotation.transform_vector(direction_from_angles(self.yaw, self.pitch));
        SpawnDescriptor {
            entity: self.entity,
            kind: self.kind.clone(),
            position: rotation.transform_point(self.position),
            yaw: (-facing.x).atan2(facing.z).to_degrees(),
            pitch: (-facing.y).asin().to_degrees(),
        }
    }
}

/// A ghost shown to one player: the spawn descriptor plus the state
/// snapshot the client needs to render it truthfully. Created on first
/// visibility, destroyed on last visibility loss, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostEntity {
    /// The real entity's identity.
    pub entity: EntityId,
    /// How to spawn the ghost on the client.
    pub descriptor: SpawnDescriptor,
    /// The entity's live synchronized state.
    pub watcher: WatcherSnapshot,
}

/// A disposable tracking artifact constructed purely to extract a spawn
/// descriptor on hosts that expose it no other way. Dropped as soon as the
/// descriptor has been read.
pub trait TrackerEntry {
    /// Extract the spawn descriptor, if this entity has one.
    fn spawn_descriptor(&mut self) -> Option<SpawnDescriptor>;
}

/// The entity-access collaborator.
pub trait EntityAccess {
    /// Host-assigned identity.
    fn entity_id(&self) -> EntityId;

    /// Concrete entity type name.
    fn kind(&self) -> &str;

    /// Whether this is a part of a compound entity. Parts cannot be
    /// spawned independently and are never ghosted.
    fn is_compound_part(&self) -> bool;

    /// Position and reported rotation.
    fn transform(&self) -> EntityTransform;

    /// Body yaw in degrees, where the host still has the field.
    fn body_yaw(&self) -> Option<f32>;

    /// The entity's real synchronized-state snapshot, not an empty
    /// default.
    fn live_watcher(&self) -> WatcherSnapshot;

    /// The per-type spawn descriptor, on hosts that expose it directly.
    fn direct_spawn_descriptor(&self) -> Option<SpawnDescriptor>;

    /// Begin a disposable tracker entry for descriptor extraction, on
    /// hosts that support it.
    fn begin_tracking(&self) -> Option<Box<dyn TrackerEntry + '_>>;
}

/// Synthesizes ghost representations using the strategies selected at
/// initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostSynthesizer {
    spawn: SpawnStrategy,
    yaw: YawSource,
}

impl GhostSynthesizer {
    /// Build a synthesizer from already-selected strategies.
    pub fn new(spawn: SpawnStrategy, yaw: YawSource) -> Self {
        Self { spawn, yaw }
    }

    /// Select strategies for `version` and build the synthesizer.
    pub fn for_host(version: HostVersion) -> Result<Self, InitError> {
        Ok(Self::new(
            SpawnStrategy::select(version)?,
            YawSource::select(version),
        ))
    }

    /// The spawn path in use.
    pub fn spawn_strategy(&self) -> SpawnStrategy {
        self.spawn
    }

    /// The yaw source in use.
    pub fn yaw_source(&self) -> YawSource {
        self.yaw
    }

    /// Produce a ghost for `entity`, or `None` when the entity cannot be
    /// ghosted this tick (compound part, or no descriptor resolvable).
    pub fn synthesize(&self, entity: &dyn EntityAccess) -> Option<GhostEntity> {
        if entity.is_compound_part() {
            debug!(
                entity = entity.entity_id(),
                kind = entity.kind(),
                "compound part cannot be ghosted"
            );
            return None;
        }

        let descriptor = match self.spawn {
            SpawnStrategy::Direct => entity.direct_spawn_descriptor()?,
            SpawnStrategy::TrackerEntry => {
                // Scoped: the entry exists only long enough to yield the
                // descriptor.
                let mut entry = entity.begin_tracking()?;
                entry.spawn_descriptor()?
            }
        };

        Some(GhostEntity {
            entity: entity.entity_id(),
            descriptor,
            watcher: entity.live_watcher(),
        })
    }

    /// The entity's true facing direction.
    ///
    /// The host reports head orientation instead of body orientation for
    /// living entities, which makes moving ghosts face the wrong way. Read
    /// the body yaw where the field exists; otherwise (or when the entity
    /// has none) fall back to the head-derived direction.
    pub fn actual_facing(&self, entity: &dyn EntityAccess) -> Vec3 {
        let transform = entity.transform();
        let yaw = match self.yaw {
            YawSource::BodyField => entity.body_yaw().unwrap_or(transform.head_yaw),
            YawSource::HeadFallback => transform.head_yaw,
        };
        direction_from_angles(yaw, transform.pitch)
    }
}

/// Unit facing vector for yaw/pitch in degrees, host convention: yaw 0 is
/// south (+Z), yaw 90 is west (-X), positive pitch looks down.
fn direction_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(
        -yaw.sin() * pitch.cos(),
        -pitch.sin(),
        yaw.cos() * pitch.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Scriptable entity double.
    struct FakeEntity {
        id: EntityId,
        compound_part: bool,
        head_yaw: f32,
        body_yaw: Option<f32>,
        watcher: WatcherSnapshot,
        tracker_dropped: Cell<bool>,
    }

    impl FakeEntity {
        fn new(id: EntityId) -> Self {
            let mut watcher = WatcherSnapshot::new();
            watcher.set(0, WatcherValue::Byte(0x20));
            watcher.set(8, WatcherValue::Float(17.5));
            Self {
                id,
                compound_part: false,
                head_yaw: 90.0,
                body_yaw: None,
                watcher,
                tracker_dropped: Cell::new(false),
            }
        }

        fn descriptor(&self) -> SpawnDescriptor {
            SpawnDescriptor {
                entity: self.id,
                kind: "creeper".into(),
                position: Vec3::new(0.5, 64.0, 0.5),
                yaw: self.head_yaw,
                pitch: 0.0,
            }
        }
    }

    struct FakeTracker<'a>(&'a FakeEntity);

    impl TrackerEntry for FakeTracker<'_> {
        fn spawn_descriptor(&mut self) -> Option<SpawnDescriptor> {
            Some(self.0.descriptor())
        }
    }

    impl Drop for FakeTracker<'_> {
        fn drop(&mut self) {
            self.0.tracker_dropped.set(true);
        }
    }

    impl EntityAccess for FakeEntity {
        fn entity_id(&self) -> EntityId {
            self.id
        }

        fn kind(&self) -> &str {
            "creeper"
        }

        fn is_compound_part(&self) -> bool {
            self.compound_part
        }

        fn transform(&self) -> EntityTransform {
            EntityTransform {
                position: Vec3::new(0.5, 64.0, 0.5),
                head_yaw: self.head_yaw,
                pitch: 0.0,
            }
        }

        fn body_yaw(&self) -> Option<f32> {
            self.body_yaw
        }

        fn live_watcher(&self) -> WatcherSnapshot {
            self.watcher.clone()
        }

        fn direct_spawn_descriptor(&self) -> Option<SpawnDescriptor> {
            Some(self.descriptor())
        }

        fn begin_tracking(&self) -> Option<Box<dyn TrackerEntry + '_>> {
            Some(Box::new(FakeTracker(self)))
        }
    }

    #[test]
    fn both_spawn_paths_yield_the_same_descriptor() {
        let entity = FakeEntity::new(42);
        let direct = GhostSynthesizer::new(SpawnStrategy::Direct, YawSource::HeadFallback)
            .synthesize(&entity)
            .unwrap();
        let legacy = GhostSynthesizer::new(SpawnStrategy::TrackerEntry, YawSource::BodyField)
            .synthesize(&entity)
            .unwrap();
        assert_eq!(direct.descriptor, legacy.descriptor);
        assert_eq!(direct.watcher, legacy.watcher);
    }

    #[test]
    fn tracker_entry_is_dropped_after_extraction() {
        let entity = FakeEntity::new(1);
        let synthesizer =
            GhostSynthesizer::new(SpawnStrategy::TrackerEntry, YawSource::BodyField);
        assert!(synthesizer.synthesize(&entity).is_some());
        assert!(entity.tracker_dropped.get());
    }

    #[test]
    fn compound_parts_are_never_ghosted() {
        let mut entity = FakeEntity::new(2);
        entity.compound_part = true;
        let synthesizer = GhostSynthesizer::new(SpawnStrategy::Direct, YawSource::HeadFallback);
        assert_eq!(synthesizer.synthesize(&entity), None);
    }

    #[test]
    fn ghost_carries_the_live_watcher() {
        let entity = FakeEntity::new(3);
        let ghost = GhostSynthesizer::new(SpawnStrategy::Direct, YawSource::HeadFallback)
            .synthesize(&entity)
            .unwrap();
        assert_eq!(ghost.watcher.get(0), Some(&WatcherValue::Byte(0x20)));
        assert_eq!(ghost.watcher.get(8), Some(&WatcherValue::Float(17.5)));
    }

    #[test]
    fn body_yaw_corrects_the_reported_direction() {
        let mut entity = FakeEntity::new(4);
        entity.head_yaw = 90.0; // host reports west
        entity.body_yaw = Some(0.0); // body actually faces south

        let corrected = GhostSynthesizer::new(SpawnStrategy::Direct, YawSource::BodyField)
            .actual_facing(&entity);
        assert!((corrected - Vec3::Z).length() < 1e-5);

        // Without the field the head direction is the best we can do.
        entity.body_yaw = None;
        let fallback = GhostSynthesizer::new(SpawnStrategy::Direct, YawSource::BodyField)
            .actual_facing(&entity);
        assert!((fallback - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn head_fallback_ignores_the_body_field() {
        let mut entity = FakeEntity::new(5);
        entity.head_yaw = 0.0;
        entity.body_yaw = Some(180.0);
        let facing = GhostSynthesizer::new(SpawnStrategy::Direct, YawSource::HeadFallback)
            .actual_facing(&entity);
        assert!((facing - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn anchoring_rotates_position_and_yaw_together() {
        let descriptor = SpawnDescriptor {
            entity: 6,
            kind: "armor_stand".into(),
            position: Vec3::new(2.0, 64.0, 0.0),
            yaw: 0.0, // facing south
            pitch: 0.0,
        };
        // Quarter turn that carries south (+Z) to west (-X).
        let rotation =
            portalveil_core::Rotation::quarter_turns(portalveil_core::Axis::Y, 1);
        let anchored = descriptor.anchored(&rotation);
        assert!((anchored.position - Vec3::new(0.0, 64.0, 2.0)).length() < 1e-5);
        assert!((anchored.yaw - 90.0).abs() < 1e-3);
        assert_eq!(anchored.entity, descriptor.entity);
    }
}
