//! Minimal image-dimension sniffing for the placeholder heuristic.
//!
//! Only PNG and GIF headers are parsed; the upstream's video placeholder
//! is a 1×1 PNG, so that is the format the heuristic has to see through.
//! Anything else returns `None` and the caller falls back to the content
//! type.

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Width and height of a PNG or GIF payload, read from its header.
#[must_use]
pub fn sniff_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    png_dimensions(bytes).or_else(|| gif_dimensions(bytes))
}

/// PNG layout: 8-byte signature, 4-byte chunk length, `IHDR`, then
/// width and height as big-endian u32s.
fn png_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.len() < 24 || bytes[..8] != PNG_SIGNATURE || &bytes[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(bytes[16..20].try_into().ok()?);
    let height = u32::from_be_bytes(bytes[20..24].try_into().ok()?);
    Some((width, height))
}

/// GIF layout: `GIF87a` or `GIF89a`, then the logical screen width and
/// height as little-endian u16s.
fn gif_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.len() < 10 || (!bytes.starts_with(b"GIF87a") && !bytes.starts_with(b"GIF89a")) {
        return None;
    }
    let width = u16::from_le_bytes(bytes[6..8].try_into().ok()?);
    let height = u16::from_le_bytes(bytes[8..10].try_into().ok()?);
    Some((u32::from(width), u32::from(height)))
}
