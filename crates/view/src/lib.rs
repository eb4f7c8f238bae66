#![warn(missing_docs)]
//! Per-player illusion bookkeeping: which positions are currently being
//! faked to a player, batched client updates, and ghost entity synthesis.

mod batch;
mod ghost;
mod states;
mod transport;
mod version;

pub use batch::{BlockChangeBatch, BlockChangeMessage};
pub use ghost::{
    EntityAccess, EntityTransform, GhostEntity, GhostSynthesizer, SpawnDescriptor, TrackerEntry,
    WatcherSnapshot, WatcherValue,
};
pub use states::PlayerViewState;
pub use transport::Transport;
pub use version::{HostVersion, InitError, SpawnStrategy, YawSource};

/// Player identifier assigned by the host.
pub type PlayerId = u64;

/// Entity identifier assigned by the host.
pub type EntityId = u64;
