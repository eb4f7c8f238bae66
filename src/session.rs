//! The per-player portal view session.
//!
//! One session exists per player-portal pairing. It owns the player's view
//! state and ghost map exclusively; everything runs on the host's tick
//! thread, so there is no locking here. Closing the session reverts every
//! faked position and despawns every ghost, leaving the client exactly as
//! the real world has it.

use portalveil_core::{BlockPos, Rotation};
use portalveil_view::{
    BlockChangeBatch, EntityAccess, EntityId, GhostEntity, GhostSynthesizer, PlayerId,
    PlayerViewState, Transport,
};
use portalveil_world::{rotate_orientation, BlockSnapshot, FacingRule};
use std::collections::BTreeMap;
use tracing::debug;

/// What one faked position holds: the snapshot the real world has there
/// and the snapshot the client is being shown instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewedBlockInfo {
    /// The true block, restored on conceal and on close.
    pub real: BlockSnapshot,
    /// The transformed far-side block the client currently sees.
    pub faked: BlockSnapshot,
}

/// A live portal view for one player.
pub struct PortalViewSession {
    player: PlayerId,
    synthesizer: GhostSynthesizer,
    view: PlayerViewState<ViewedBlockInfo>,
    staged: BlockChangeBatch,
    ghosts: BTreeMap<EntityId, GhostEntity>,
}

impl PortalViewSession {
    pub(crate) fn new(player: PlayerId, synthesizer: GhostSynthesizer) -> Self {
        debug!(player, "portal view opened");
        Self {
            player,
            synthesizer,
            view: PlayerViewState::new(),
            staged: BlockChangeBatch::new(),
            ghosts: BTreeMap::new(),
        }
    }

    /// The player this session belongs to.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Number of positions currently faked.
    pub fn viewed_len(&self) -> usize {
        self.view.len()
    }

    /// Show `source` (the far-side block) at `pos`, rotated through the
    /// portal transform. `real` is what the world actually holds at `pos`,
    /// kept so the position can be reverted later.
    ///
    /// Returns `true` when the position transitioned to viewable and an
    /// update was staged; `false` when it was already being faked.
    pub fn reveal(
        &mut self,
        pos: BlockPos,
        real: BlockSnapshot,
        source: BlockSnapshot,
        rotation: &Rotation,
        rule: &dyn FacingRule,
    ) -> bool {
        let faked = BlockSnapshot {
            id: source.id,
            orientation: rotate_orientation(rotation, &source.orientation, rule),
        };
        let info = ViewedBlockInfo {
            real,
            faked: faked.clone(),
        };
        if self.view.set_viewable(pos, info) {
            self.staged.record(pos, faked);
            true
        } else {
            false
        }
    }

    /// Stop faking `pos`, staging the real block back to the client.
    ///
    /// Returns `false` when the position was not being faked (benign; no
    /// update is staged).
    pub fn conceal(&mut self, pos: BlockPos, expected: &ViewedBlockInfo) -> bool {
        if self.view.set_non_viewable(pos, expected) {
            self.staged.record(pos, expected.real.clone());
            true
        } else {
            false
        }
    }

    /// Current faked entries, in position order.
    pub fn viewed_entries(&self) -> impl Iterator<Item = (BlockPos, &ViewedBlockInfo)> {
        self.view.entries()
    }

    /// Send everything staged this tick as one consolidated update.
    pub fn flush(&mut self, transport: &mut dyn Transport) {
        std::mem::take(&mut self.staged).flush(self.player, transport);
    }

    /// An entity became visible through the portal. Synthesizes and spawns
    /// a ghost on first visibility; returns `false` when the entity is
    /// already ghosted or cannot be ghosted this tick.
    pub fn ghost_seen(&mut self, entity: &dyn EntityAccess, transport: &mut dyn Transport) -> bool {
        if self.ghosts.contains_key(&entity.entity_id()) {
            return false;
        }
        let Some(ghost) = self.synthesizer.synthesize(entity) else {
            return false;
        };
        transport.send_ghost_spawn(self.player, &ghost.descriptor, &ghost.watcher);
        debug!(player = self.player, entity = ghost.entity, "ghost spawned");
        self.ghosts.insert(ghost.entity, ghost);
        true
    }

    /// An entity left visibility. Despawns its ghost exactly once.
    pub fn ghost_lost(&mut self, entity: EntityId, transport: &mut dyn Transport) -> bool {
        match self.ghosts.remove(&entity) {
            Some(_) => {
                transport.send_ghost_despawn(self.player, entity);
                debug!(player = self.player, entity, "ghost despawned");
                true
            }
            None => false,
        }
    }

    /// Entities currently ghosted, in id order.
    pub fn ghosted(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.ghosts.keys().copied()
    }

    /// Tear the view down: revert every faked position in one final
    /// consolidated update and despawn every ghost. Nothing fake survives.
    pub fn close(mut self, transport: &mut dyn Transport) {
        // Anything staged but unflushed is superseded by the teardown.
        let mut batch = BlockChangeBatch::new();
        let mut reverted = 0usize;
        for (pos, info) in self.view.drain() {
            batch.record(pos, info.real);
            reverted += 1;
        }
        batch.flush(self.player, transport);

        let ghosts = std::mem::take(&mut self.ghosts);
        let ghost_count = ghosts.len();
        for entity in ghosts.into_keys() {
            transport.send_ghost_despawn(self.player, entity);
        }

        debug!(
            player = self.player,
            reverted, ghosts = ghost_count, "portal view closed"
        );
    }
}
