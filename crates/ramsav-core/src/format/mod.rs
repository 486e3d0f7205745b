//! Save layouts recoverable from a RAM dump
//!
//! A dump holds the same blocks as the on-disk save, each one preceded by a
//! 32-bit marker word, but at unrelated positions. A [`FormatDescriptor`] lists
//! every block of one layout in canonical order.
//!
//! # Canonical layout
//!
//! ```text
//! dump:   ..junk.. [magic][skip][payload] ..junk.. [magic][payload] ..
//!                                 │                         │
//!                                 ▼                         ▼
//! image:  [payload @ target - base][zeros][payload @ target - base][pad to 0x200]
//! ```

mod dispatch;
mod tables;

use serde::Serialize;
use strum::Display;

use crate::error::{Error, Result};

pub use dispatch::*;
pub use tables::*;

/// Length of an X / Y RAM dump
pub const XY_DUMP_SIZE: usize = 0x70000;
/// Length of an Omega Ruby / Alpha Sapphire RAM dump
pub const ORAS_DUMP_SIZE: usize = 0x80000;

/// Marker value for blocks that are never searched for and always zero-filled
pub const NO_MARKER_MAGIC: u32 = 0x9669_6996;

/// Reconstructed images are padded to a multiple of this size
pub const SECTOR_SIZE: usize = 0x200;

/// Width of a marker word in bytes
pub const MAGIC_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum SaveVariant {
    #[strum(serialize = "XY")]
    Xy,
    #[strum(serialize = "ORAS")]
    Oras,
}

impl SaveVariant {
    pub fn dump_size(&self) -> usize {
        match self {
            Self::Xy => XY_DUMP_SIZE,
            Self::Oras => ORAS_DUMP_SIZE,
        }
    }

    pub fn from_dump_size(size: usize) -> Option<Self> {
        match size {
            XY_DUMP_SIZE => Some(Self::Xy),
            ORAS_DUMP_SIZE => Some(Self::Oras),
            _ => None,
        }
    }

    /// Get the expanded game name
    pub fn game_name(&self) -> &'static str {
        match self {
            Self::Xy => "Pokemon X / Y",
            Self::Oras => "Pokemon Omega Ruby / Alpha Sapphire",
        }
    }
}

/// Known game builds, each with its own marker table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum BuildRevision {
    #[strum(serialize = "ORAS")]
    Oras,
    #[strum(serialize = "XY (default)")]
    XyDefault,
    #[strum(serialize = "XY 0059E418")]
    XyE418,
    #[strum(serialize = "XY 0059E408")]
    XyE408,
    #[strum(serialize = "XY 0059BEC4")]
    XyBec4,
}

impl BuildRevision {
    pub fn variant(&self) -> SaveVariant {
        match self {
            Self::Oras => SaveVariant::Oras,
            _ => SaveVariant::Xy,
        }
    }

    /// Leading dump word identifying this build, if it has one
    pub fn signature(&self) -> Option<u32> {
        match self {
            Self::XyE418 => Some(0x0059_E418),
            Self::XyE408 => Some(0x0059_E408),
            Self::XyBec4 => Some(0x0059_BEC4),
            Self::Oras | Self::XyDefault => None,
        }
    }

    pub fn blocks(&self) -> &'static [BlockSpec] {
        match self {
            Self::Oras => &ORAS_BLOCKS,
            Self::XyDefault => &XY_DEFAULT_BLOCKS,
            Self::XyE418 => &XY_E418_BLOCKS,
            Self::XyE408 => &XY_E408_BLOCKS,
            Self::XyBec4 => &XY_BEC4_BLOCKS,
        }
    }

    pub fn descriptor(&self) -> FormatDescriptor {
        FormatDescriptor {
            variant: self.variant(),
            revision: *self,
            blocks: self.blocks(),
        }
    }
}

/// One block of the canonical save and the marker that precedes it in a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockSpec {
    /// Offset of the block in the on-disk save
    pub target_offset: u32,
    pub length: u32,
    /// Bytes between the end of the marker and the start of the payload
    pub skip: u32,
    pub magic: u32,
    /// Number of earlier marker matches to pass over
    pub occurrence: u32,
}

impl BlockSpec {
    pub const fn new(target_offset: u32, length: u32, skip: u32, magic: u32, occurrence: u32) -> Self {
        Self {
            target_offset,
            length,
            skip,
            magic,
            occurrence,
        }
    }

    pub fn end(&self) -> u32 {
        self.target_offset + self.length
    }

    /// Whether the block is synthesized without searching the dump
    pub fn is_unmarked(&self) -> bool {
        self.magic == NO_MARKER_MAGIC
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormatDescriptor {
    pub variant: SaveVariant,
    pub revision: BuildRevision,
    pub blocks: &'static [BlockSpec],
}

impl FormatDescriptor {
    /// Canonical offset of the first block; image offsets are relative to it
    pub fn base_offset(&self) -> u32 {
        self.blocks.first().map_or(0, |b| b.target_offset)
    }

    /// Position of a block inside the reconstructed image
    pub fn image_offset(&self, block: &BlockSpec) -> usize {
        (block.target_offset - self.base_offset()) as usize
    }

    /// Length of a reconstructed image, including sector padding
    pub fn canonical_len(&self) -> usize {
        let end = self
            .blocks
            .iter()
            .map(|b| self.image_offset(b) + b.length as usize)
            .max()
            .unwrap_or(0);
        round_up_to_sector(end)
    }
}

pub fn round_up_to_sector(len: usize) -> usize {
    len.div_ceil(SECTOR_SIZE) * SECTOR_SIZE
}

/// Parse a marker word written as hex, with or without `0x` prefix
pub fn parse_magic(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() || digits.len() > 8 {
        return Err(Error::InvalidMagic(s.to_string()));
    }
    u32::from_str_radix(digits, 16).map_err(|e| Error::InvalidMagic(format!("{}: {}", s, e)))
}

pub fn format_magic(magic: u32) -> String {
    format!("{:08X}", magic)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_REVISIONS: [BuildRevision; 5] = [
        BuildRevision::Oras,
        BuildRevision::XyDefault,
        BuildRevision::XyE418,
        BuildRevision::XyE408,
        BuildRevision::XyBec4,
    ];

    #[test]
    fn test_variant_from_dump_size() {
        assert_eq!(SaveVariant::from_dump_size(0x70000), Some(SaveVariant::Xy));
        assert_eq!(SaveVariant::from_dump_size(0x80000), Some(SaveVariant::Oras));
        assert_eq!(SaveVariant::from_dump_size(0x7FFFF), None);
        assert_eq!(SaveVariant::from_dump_size(0), None);
        assert_eq!(SaveVariant::Xy.dump_size(), XY_DUMP_SIZE);
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(ORAS_BLOCKS.len(), 59);
        for revision in &ALL_REVISIONS[1..] {
            assert_eq!(revision.blocks().len(), 56, "{}", revision);
        }
    }

    #[test]
    fn test_xy_revisions_share_layout() {
        for revision in &ALL_REVISIONS[2..] {
            for (a, b) in XY_DEFAULT_BLOCKS.iter().zip(revision.blocks()) {
                assert_eq!(a.target_offset, b.target_offset);
                assert_eq!(a.length, b.length);
                assert_eq!(a.skip, b.skip);
                assert_eq!(a.occurrence, b.occurrence);
            }
        }
    }

    #[test]
    fn test_xy_signature_is_first_marker() {
        for revision in &ALL_REVISIONS[2..] {
            assert_eq!(revision.signature(), Some(revision.blocks()[0].magic));
        }
    }

    #[test]
    fn test_tables_are_ordered_and_disjoint() {
        for revision in ALL_REVISIONS {
            let blocks = revision.blocks();
            for pair in blocks.windows(2) {
                assert!(pair[0].end() <= pair[1].target_offset, "{}", revision);
            }
        }
    }

    #[test]
    fn test_base_offset_and_canonical_len() {
        let xy = BuildRevision::XyDefault.descriptor();
        assert_eq!(xy.base_offset(), 0x5400);
        assert_eq!(xy.canonical_len(), 0x65600);

        let oras = BuildRevision::Oras.descriptor();
        assert_eq!(oras.base_offset(), 0x5400);
        assert_eq!(oras.canonical_len(), 0x76000);
        assert_eq!(oras.canonical_len() % SECTOR_SIZE, 0);
    }

    #[test]
    fn test_only_oras_has_unmarked_block() {
        let unmarked: Vec<_> = ORAS_BLOCKS.iter().filter(|b| b.is_unmarked()).collect();
        assert_eq!(unmarked.len(), 1);
        assert_eq!(unmarked[0].target_offset, 0x27200);
        assert!(!XY_DEFAULT_BLOCKS.iter().any(|b| b.is_unmarked()));
    }

    #[test]
    fn test_round_up_to_sector() {
        assert_eq!(round_up_to_sector(0), 0);
        assert_eq!(round_up_to_sector(1), 0x200);
        assert_eq!(round_up_to_sector(0x200), 0x200);
        assert_eq!(round_up_to_sector(0x201), 0x400);
    }

    #[test]
    fn test_parse_magic() {
        assert_eq!(parse_magic("0x0059E418").unwrap(), 0x0059_E418);
        assert_eq!(parse_magic("96696996").unwrap(), NO_MARKER_MAGIC);
        assert_eq!(parse_magic(" 0XFF ").unwrap(), 0xFF);
        assert!(parse_magic("").is_err());
        assert!(parse_magic("0x").is_err());
        assert!(parse_magic("0x123456789").is_err());
        assert!(parse_magic("GHIJ").is_err());
    }

    #[test]
    fn test_format_magic() {
        assert_eq!(format_magic(0x0059_E418), "0059E418");
        assert_eq!(format_magic(NO_MARKER_MAGIC), "96696996");
    }

    #[test]
    fn test_revision_display() {
        assert_eq!(BuildRevision::XyE418.to_string(), "XY 0059E418");
        assert_eq!(SaveVariant::Oras.to_string(), "ORAS");
    }
}
