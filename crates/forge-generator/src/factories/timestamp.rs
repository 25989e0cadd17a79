//! Timestamp forgeries.

use chrono::{DateTime, Utc};
use forge_core::RandomStream;

/// Generate a timestamp with second precision in `[start, end]`.
///
/// An empty window yields `start`.
pub fn generate_timestamp_range(
    stream: &mut RandomStream,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let start_ts = start.timestamp();
    let end_ts = end.timestamp();

    if start_ts >= end_ts {
        return start;
    }
    let random_ts = stream.range_i64(start_ts, end_ts.saturating_add(1));
    DateTime::from_timestamp(random_ts, 0).unwrap_or(start)
}
