//! Factories for common third-party types.
//!
//! [`StandardFactories`] registers forgeries for [`uuid::Uuid`] and
//! [`chrono::DateTime<Utc>`]. Both draw only from the Forge's stream, so
//! they replay with the seed like every other forgery.

pub mod timestamp;
pub mod uuid;

use crate::error::ForgeError;
use crate::factory::ForgeConfigurator;
use crate::forge::Forge;
use chrono::{DateTime, Utc};

/// Start of the default timestamp window (2000-01-01T00:00:00Z).
pub const DEFAULT_TIMESTAMP_START: i64 = 946_684_800;
/// End of the default timestamp window (2100-01-01T00:00:00Z).
pub const DEFAULT_TIMESTAMP_END: i64 = 4_102_444_800;

/// Registers UUID and timestamp factories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardFactories {
    timestamp_start: DateTime<Utc>,
    timestamp_end: DateTime<Utc>,
}

impl Default for StandardFactories {
    fn default() -> Self {
        Self {
            timestamp_start: DateTime::from_timestamp(DEFAULT_TIMESTAMP_START, 0)
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            timestamp_end: DateTime::from_timestamp(DEFAULT_TIMESTAMP_END, 0)
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}

impl StandardFactories {
    /// Forge timestamps in `[start, end]` instead of the default window.
    pub fn with_timestamp_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            timestamp_start: start,
            timestamp_end: end,
        }
    }
}

impl ForgeConfigurator for StandardFactories {
    fn configure(&self, forge: &mut Forge) {
        forge.register_factory::<::uuid::Uuid, _>(|forge: &mut Forge| {
            Ok::<_, ForgeError>(uuid::generate_uuid_v4(forge.stream_mut()))
        });

        let (start, end) = (self.timestamp_start, self.timestamp_end);
        forge.register_factory::<DateTime<Utc>, _>(move |forge: &mut Forge| {
            Ok::<_, ForgeError>(timestamp::generate_timestamp_range(
                forge.stream_mut(),
                start,
                end,
            ))
        });
    }
}
