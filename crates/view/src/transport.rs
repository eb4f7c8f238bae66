//! The transport collaborator.

use crate::{BlockChangeMessage, EntityId, PlayerId, SpawnDescriptor, WatcherSnapshot};

/// Fire-and-forget delivery to one player's client.
///
/// The engine never waits for acknowledgment and never retries; delivery
/// guarantees belong to the implementation behind this trait.
pub trait Transport {
    /// Deliver one consolidated block update.
    fn send_block_changes(&mut self, player: PlayerId, message: BlockChangeMessage);

    /// Show a ghost entity, with its synchronized state snapshot.
    fn send_ghost_spawn(
        &mut self,
        player: PlayerId,
        descriptor: &SpawnDescriptor,
        watcher: &WatcherSnapshot,
    );

    /// Remove a ghost entity.
    fn send_ghost_despawn(&mut self, player: PlayerId, entity: EntityId);
}
