//! Host version detection and strategy selection.
//!
//! The host's internals changed shape across versions: newer hosts expose
//! a per-entity-type spawn descriptor directly, older ones only yield it
//! through a throwaway tracker entry, and the body-yaw field disappeared
//! entirely at some point. Which path to take is decided once at
//! initialization and never changes for the life of the process.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Initialization failure. Every later operation depends on the selected
/// strategies, so there is no recovery: the plugin must refuse to enable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    /// The version string could not be parsed.
    #[error("malformed host version string `{0}`")]
    MalformedVersion(String),
    /// No spawn synthesis strategy exists for this host; the internals the
    /// engine needs are missing.
    #[error("host version {0} has no usable spawn synthesis path")]
    UnsupportedHost(HostVersion),
}

/// A host engine version.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HostVersion {
    /// Major version.
    pub major: u16,
    /// Minor version.
    pub minor: u16,
    /// Patch version.
    pub patch: u16,
}

impl HostVersion {
    /// Create a version from its components.
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a `major.minor` or `major.minor.patch` version string.
    pub fn parse(text: &str) -> Result<Self, InitError> {
        let malformed = || InitError::MalformedVersion(text.to_owned());

        let mut parts = text.trim().split('.');
        let mut next = |required: bool| -> Result<u16, InitError> {
            match parts.next() {
                Some(part) => part.parse().map_err(|_| malformed()),
                None if required => Err(malformed()),
                None => Ok(0),
            }
        };

        let version = Self {
            major: next(true)?,
            minor: next(true)?,
            patch: next(false)?,
        };
        if parts.next().is_some() {
            return Err(malformed());
        }
        Ok(version)
    }

    /// Whether this version is at least `other`.
    pub fn at_least(self, other: HostVersion) -> bool {
        self >= other
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// First version where entities expose their own spawn descriptor.
const DIRECT_SPAWN_SINCE: HostVersion = HostVersion::new(1, 14, 0);

/// First version where the tracker-entry fallback exists at all.
const TRACKER_ENTRY_SINCE: HostVersion = HostVersion::new(1, 8, 0);

/// First version where the body-yaw field is gone from entity internals.
const BODY_YAW_REMOVED_IN: HostVersion = HostVersion::new(1, 17, 0);

/// How to obtain the true spawn descriptor for a concrete entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnStrategy {
    /// Ask the entity directly; every concrete type carries its own
    /// descriptor on modern hosts.
    Direct,
    /// Construct a disposable tracker entry purely to extract the
    /// descriptor, then discard it.
    TrackerEntry,
}

impl SpawnStrategy {
    /// Select the strategy for a host version.
    pub fn select(version: HostVersion) -> Result<Self, InitError> {
        if version.at_least(DIRECT_SPAWN_SINCE) {
            Ok(SpawnStrategy::Direct)
        } else if version.at_least(TRACKER_ENTRY_SINCE) {
            Ok(SpawnStrategy::TrackerEntry)
        } else {
            Err(InitError::UnsupportedHost(version))
        }
    }
}

/// Where an entity's true facing comes from.
///
/// The host reports head orientation instead of body orientation for
/// living entities. Where the body-yaw field still exists we read it;
/// where it was removed we fall back to the head-derived direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YawSource {
    /// Read the body-yaw field off the entity internals.
    BodyField,
    /// Use the head-orientation-derived direction as reported.
    HeadFallback,
}

impl YawSource {
    /// Select the yaw source for a host version.
    pub fn select(version: HostVersion) -> Self {
        if version.at_least(BODY_YAW_REMOVED_IN) {
            YawSource::HeadFallback
        } else {
            YawSource::BodyField
        }
    }
}
