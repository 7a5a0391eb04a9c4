//! Unix timestamps used for deadlines.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Seconds since the Unix epoch.
///
/// Every state-changing router call carries a deadline `Timestamp`; the call
/// is rejected once the injected clock reads a later time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// A deadline that never expires.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a timestamp from Unix seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the Unix seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns this timestamp shifted forward, saturating at [`Timestamp::MAX`].
    #[must_use]
    pub const fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
