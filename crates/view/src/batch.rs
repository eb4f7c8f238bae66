//! Multi-block change batching.
//!
//! All block updates revealed to one player in one tick are accumulated
//! and flushed as a single consolidated message instead of one message per
//! block. Flushing consumes the batch, so a second flush of the same batch
//! is a compile error rather than a silent duplicate.

use crate::{PlayerId, Transport};
use portalveil_core::BlockPos;
use portalveil_world::BlockSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One consolidated position-to-state update for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockChangeMessage {
    /// Updates in the order they were recorded.
    pub updates: Vec<(BlockPos, BlockSnapshot)>,
}

/// Accumulates block changes for one logical operation.
///
/// Re-recording a position within one batch collapses to the last write.
/// Recording order is preserved for everything else, matching the
/// per-player ordering guarantee.
#[derive(Debug, Default)]
pub struct BlockChangeBatch {
    changes: Vec<(BlockPos, BlockSnapshot)>,
    index: BTreeMap<BlockPos, usize>,
}

impl BlockChangeBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one change. A later write to the same position replaces the
    /// earlier one in place.
    pub fn record(&mut self, pos: BlockPos, state: BlockSnapshot) {
        match self.index.get(&pos) {
            Some(&i) => self.changes[i].1 = state,
            None => {
                self.index.insert(pos, self.changes.len());
                self.changes.push((pos, state));
            }
        }
    }

    /// Number of distinct positions recorded.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Send everything recorded as one message to `player`.
    ///
    /// An empty batch sends nothing. Delivery is fire-and-forget; the
    /// transport owns any guarantees beyond that.
    pub fn flush(self, player: PlayerId, transport: &mut dyn Transport) {
        if self.changes.is_empty() {
            return;
        }
        debug!(player, updates = self.changes.len(), "flushing block changes");
        transport.send_block_changes(
            player,
            BlockChangeMessage {
                updates: self.changes,
            },
        );
    }
}
