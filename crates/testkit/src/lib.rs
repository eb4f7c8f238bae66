#![warn(missing_docs)]
//! Mock collaborators for exercising the illusion engine without a host:
//! an in-memory world, scriptable entities, and a transport that records
//! everything it is asked to deliver.

use glam::Vec3;
use portalveil_core::{BlockPos, Direction};
use portalveil_view::{
    BlockChangeMessage, EntityAccess, EntityId, EntityTransform, PlayerId, SpawnDescriptor,
    TrackerEntry, Transport, WatcherSnapshot, WatcherValue,
};
use portalveil_world::{
    BlockSnapshot, DirectionSet, IllegalOrientation, OrientationState, WorldAccess,
};
use std::cell::Cell;
use std::collections::BTreeMap;

/// In-memory world of block snapshots.
///
/// Positions without an explicit block read back as fixed air (id 0).
/// Facings listed in `rejected_facings` are refused on apply, standing in
/// for host-side legality failures.
#[derive(Debug, Default)]
pub struct TestWorld {
    blocks: BTreeMap<BlockPos, BlockSnapshot>,
    /// Facings the "host" refuses to accept.
    pub rejected_facings: DirectionSet,
}

impl TestWorld {
    /// Empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a block snapshot.
    pub fn place(&mut self, pos: BlockPos, snapshot: BlockSnapshot) {
        self.blocks.insert(pos, snapshot);
    }

    fn refuses(&self, snapshot: &BlockSnapshot) -> bool {
        match snapshot.orientation {
            OrientationState::Rotatable { facing } => self.rejected_facings.allows(facing),
            _ => false,
        }
    }
}

impl WorldAccess for TestWorld {
    fn snapshot(&self, pos: BlockPos) -> BlockSnapshot {
        self.blocks
            .get(&pos)
            .cloned()
            .unwrap_or(BlockSnapshot::fixed(0))
    }

    fn apply(
        &mut self,
        pos: BlockPos,
        snapshot: BlockSnapshot,
    ) -> Result<(), IllegalOrientation> {
        if self.refuses(&snapshot) {
            return Err(IllegalOrientation {
                rejected: snapshot.orientation,
            });
        }
        self.blocks.insert(pos, snapshot);
        Ok(())
    }
}

impl portalveil_world::FacingRule for TestWorld {
    fn permits(&self, facing: Direction) -> Result<(), IllegalOrientation> {
        if self.rejected_facings.allows(facing) {
            Err(IllegalOrientation {
                rejected: OrientationState::Rotatable { facing },
            })
        } else {
            Ok(())
        }
    }
}

/// A scriptable entity double.
#[derive(Debug)]
pub struct TestEntity {
    /// Host-assigned identity.
    pub id: EntityId,
    /// Concrete type name.
    pub kind: String,
    /// Whether this is a part of a compound entity.
    pub compound_part: bool,
    /// World position.
    pub position: Vec3,
    /// Reported (head) yaw in degrees.
    pub head_yaw: f32,
    /// Body yaw in degrees, if the "host" still has the field.
    pub body_yaw: Option<f32>,
    /// Pitch in degrees.
    pub pitch: f32,
    /// Live synchronized state.
    pub watcher: WatcherSnapshot,
    /// Set when a tracker entry built from this entity was dropped.
    pub tracker_dropped: Cell<bool>,
}

impl TestEntity {
    /// An ordinary entity with a couple of populated watcher slots.
    pub fn new(id: EntityId, kind: &str) -> Self {
        let mut watcher = WatcherSnapshot::new();
        watcher.set(0, WatcherValue::Byte(0));
        watcher.set(7, WatcherValue::Float(20.0));
        Self {
            id,
            kind: kind.to_owned(),
            compound_part: false,
            position: Vec3::new(0.5, 64.0, 0.5),
            head_yaw: 0.0,
            body_yaw: None,
            pitch: 0.0,
            watcher,
            tracker_dropped: Cell::new(false),
        }
    }

    fn descriptor(&self) -> SpawnDescriptor {
        SpawnDescriptor {
            entity: self.id,
            kind: self.kind.clone(),
            position: self.position,
            yaw: self.head_yaw,
            pitch: self.pitch,
        }
    }
}

struct TestTrackerEntry<'a>(&'a TestEntity);

impl TrackerEntry for TestTrackerEntry<'_> {
    fn spawn_descriptor(&mut self) -> Option<SpawnDescriptor> {
        Some(self.0.descriptor())
    }
}

impl Drop for TestTrackerEntry<'_> {
    fn drop(&mut self) {
        self.0.tracker_dropped.set(true);
    }
}

impl EntityAccess for TestEntity {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn is_compound_part(&self) -> bool {
        self.compound_part
    }

    fn transform(&self) -> EntityTransform {
        EntityTransform {
            position: self.position,
            head_yaw: self.head_yaw,
            pitch: self.pitch,
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
        Some(Box::new(TestTrackerEntry(self)))
    }
}

/// Everything a [`RecordingTransport`] was asked to deliver.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// One consolidated block update.
    BlockChanges {
        /// Receiving player.
        player: PlayerId,
        /// The message.
        message: BlockChangeMessage,
    },
    /// A ghost spawn.
    GhostSpawn {
        /// Receiving player.
        player: PlayerId,
        /// The descriptor that was sent.
        descriptor: SpawnDescriptor,
        /// The watcher snapshot that was sent.
        watcher: WatcherSnapshot,
    },
    /// A ghost despawn.
    GhostDespawn {
        /// Receiving player.
        player: PlayerId,
        /// The entity removed.
        entity: EntityId,
    },
}

/// Transport that records every delivery for assertions.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    /// Deliveries in order.
    pub events: Vec<TransportEvent>,
}

impl RecordingTransport {
    /// Empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// The block-change messages delivered, in order.
    pub fn block_messages(&self) -> Vec<&BlockChangeMessage> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TransportEvent::BlockChanges { message, .. } => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Entities despawned, in order.
    pub fn despawned(&self) -> Vec<EntityId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TransportEvent::GhostDespawn { entity, .. } => Some(*entity),
                _ => None,
            })
            .collect()
    }
}

impl Transport for RecordingTransport {
    fn send_block_changes(&mut self, player: PlayerId, message: BlockChangeMessage) {
        self.events
            .push(TransportEvent::BlockChanges { player, message });
    }

    fn send_ghost_spawn(
        &mut self,
        player: PlayerId,
        descriptor: &SpawnDescriptor,
        watcher: &WatcherSnapshot,
    ) {
        self.events.push(TransportEvent::GhostSpawn {
            player,
            descriptor: descriptor.clone(),
            watcher: watcher.clone(),
        });
    }

    fn send_ghost_despawn(&mut self, player: PlayerId, entity: EntityId) {
        self.events.push(TransportEvent::GhostDespawn { player, entity });
    }
}
