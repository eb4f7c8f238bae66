//! Per-player viewed-block bookkeeping.
//!
//! Each player-portal pairing owns one [`PlayerViewState`]. A position is
//! either viewable (an entry exists) or not; the boolean returns report
//! exactly whether a transition happened, and callers rely on that to
//! decide whether a client update must be sent.

use portalveil_core::BlockPos;
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::warn;

/// Map from world position to the fake block info currently shown there.
///
/// `I` is owned by the caller and opaque here; the invariant is over
/// presence and absence only. Owned exclusively by its player-portal
/// pairing and only ever touched from the tick thread, so it carries no
/// synchronization of its own.
#[derive(Debug)]
pub struct PlayerViewState<I> {
    // BTreeMap for deterministic iteration during bulk teardown.
    viewed: BTreeMap<BlockPos, I>,
}

impl<I> Default for PlayerViewState<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> PlayerViewState<I> {
    /// Create an empty view state.
    pub fn new() -> Self {
        Self {
            viewed: BTreeMap::new(),
        }
    }

    /// Mark `pos` as showing fake state.
    ///
    /// Returns `true` when the position transitioned to viewable; the
    /// caller must then push an update. Returns `false` (and leaves the
    /// stored entry untouched) when the position was already viewable.
    pub fn set_viewable(&mut self, pos: BlockPos, info: I) -> bool {
        use std::collections::btree_map::Entry;
        match self.viewed.entry(pos) {
            Entry::Vacant(slot) => {
                slot.insert(info);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Number of positions currently viewable.
    pub fn len(&self) -> usize {
        self.viewed.len()
    }

    /// Whether no position is currently viewable.
    pub fn is_empty(&self) -> bool {
        self.viewed.is_empty()
    }

    /// Whether `pos` is currently viewable.
    pub fn is_viewable(&self, pos: BlockPos) -> bool {
        self.viewed.contains_key(&pos)
    }

    /// Restartable snapshot of the current entries, in position order.
    pub fn entries(&self) -> impl Iterator<Item = (BlockPos, &I)> {
        self.viewed.iter().map(|(pos, info)| (*pos, info))
    }

    /// Remove and yield every entry, for view teardown.
    pub fn drain(&mut self) -> impl Iterator<Item = (BlockPos, I)> {
        std::mem::take(&mut self.viewed).into_iter()
    }
}

impl<I: PartialEq + Debug> PlayerViewState<I> {
    /// Mark `pos` as no longer showing fake state.
    ///
    /// Returns `true` when an entry was removed, `false` when the position
    /// was not viewable. `expected` is validation bookkeeping only: a
    /// mismatch indicates the caller lost track of what it showed, which
    /// is logged, but the entry is still removed by position.
    pub fn set_non_viewable(&mut self, pos: BlockPos, expected: &I) -> bool {
        match self.viewed.remove(&pos) {
            Some(stored) => {
                if stored != *expected {
                    warn!(?pos, ?stored, ?expected, "viewed state mismatch on unset");
                }
                true
            }
            None => false,
        }
    }
}
