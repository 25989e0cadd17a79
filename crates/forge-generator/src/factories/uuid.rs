//! UUID forgeries.

use forge_core::RandomStream;
use uuid::Uuid;

/// Generate a random UUID v4 from the stream.
pub fn generate_uuid_v4(stream: &mut RandomStream) -> Uuid {
    let mut bytes = [0u8; 16];
    stream.fill_bytes(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}
