//! Marker word scanning over a RAM dump
//!
//! Markers are matched at every byte position, not only on word boundaries,
//! and matches may overlap. The last word of a dump is read but never
//! accepted as a match.

use tracing::info;

use crate::format::{MAGIC_LEN, NO_MARKER_MAGIC, format_magic};

/// Iterate over the positions of every `magic` word at or after `start`
///
/// Yields the offset of the first byte of each match. A word ending exactly
/// at the end of the dump does not count.
pub fn marker_positions(dump: &[u8], magic: u32, start: usize) -> impl Iterator<Item = usize> + '_ {
    let needle = magic.to_le_bytes();
    dump.get(start..dump.len().saturating_sub(1))
        .unwrap_or_default()
        .windows(MAGIC_LEN)
        .enumerate()
        .filter(move |(_, word)| *word == needle.as_slice())
        .map(move |(i, _)| start + i)
}

/// Find the `occurrence`-th match of `magic` at or after `start`
///
/// Returns the offset just past the matched word, where the block data begins.
/// The unmarked sentinel is never searched for.
pub fn find_marker(dump: &[u8], magic: u32, occurrence: u32, start: usize) -> Option<usize> {
    if magic == NO_MARKER_MAGIC {
        return None;
    }

    let found = marker_positions(dump, magic, start)
        .nth(occurrence as usize)
        .map(|pos| pos + MAGIC_LEN);

    if found.is_none() {
        info!("Failed to find {}", format_magic(magic));
    }
    found
}
