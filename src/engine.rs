//! Engine initialization.

use crate::{PlayerId, PortalViewSession};
use portalveil_view::{GhostSynthesizer, HostVersion, InitError};
use tracing::info;

/// Process-wide engine state: the version strategies, selected once.
///
/// Construction fails when the host exposes no usable spawn synthesis
/// path; there is nothing to fall back to, so the plugin must refuse to
/// enable rather than limp along.
#[derive(Debug, Clone, Copy)]
pub struct IllusionEngine {
    version: HostVersion,
    synthesizer: GhostSynthesizer,
}

impl IllusionEngine {
    /// Initialize for a known host version.
    pub fn new(version: HostVersion) -> Result<Self, InitError> {
        let synthesizer = GhostSynthesizer::for_host(version)?;
        info!(
            %version,
            spawn = ?synthesizer.spawn_strategy(),
            yaw = ?synthesizer.yaw_source(),
            "portal illusion engine initialized"
        );
        Ok(Self {
            version,
            synthesizer,
        })
    }

    /// Initialize from the host's reported version string.
    pub fn from_version_str(version: &str) -> Result<Self, InitError> {
        Self::new(HostVersion::parse(version)?)
    }

    /// The host version this engine was initialized against.
    pub fn host_version(&self) -> HostVersion {
        self.version
    }

    /// The ghost synthesizer configured for this host.
    pub fn synthesizer(&self) -> &GhostSynthesizer {
        &self.synthesizer
    }

    /// Open a portal view for one player. The session owns all fake state
    /// shown to that player and must be closed to revert it.
    pub fn open_view(&self, player: PlayerId) -> PortalViewSession {
        PortalViewSession::new(player, self.synthesizer)
    }
}
