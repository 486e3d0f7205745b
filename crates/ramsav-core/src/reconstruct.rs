//! Rebuild the canonical save image from a RAM dump
//!
//! The pass walks the descriptor in table order with a single search cursor.
//! The cursor only moves forward: by the block length for every block, plus
//! the marker width when the marker was found. This keeps each search close
//! to where its block is expected and stops repeated markers from matching
//! twice.
//!
//! Missing markers never abort the pass. The block is written as zeros so
//! every later block still lands at its canonical offset.

use serde::Serialize;
use tracing::{debug, warn};

use crate::format::{BlockSpec, FormatDescriptor, MAGIC_LEN, format_magic, round_up_to_sector};
use crate::locate::find_marker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BlockOutcome {
    /// Marker found and the whole payload copied
    Located {
        marker_offset: usize,
        payload_offset: usize,
    },
    /// Marker found but the payload runs past the end of the dump
    Truncated {
        marker_offset: usize,
        payload_offset: usize,
        copied: usize,
    },
    /// Marker not found, block zero-filled
    Missing,
    /// Block has no marker and is always zero-filled
    Synthesized,
}

impl BlockOutcome {
    pub fn is_located(&self) -> bool {
        matches!(self, Self::Located { .. } | Self::Truncated { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockReport {
    pub index: usize,
    pub spec: BlockSpec,
    /// Where the block was written in the image
    pub image_offset: usize,
    pub outcome: BlockOutcome,
}

#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// Canonical image, a multiple of the sector size
    pub data: Vec<u8>,
    pub blocks: Vec<BlockReport>,
}

impl Reconstruction {
    pub fn located_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.outcome.is_located()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.outcome == BlockOutcome::Missing)
            .count()
    }

    /// Every searchable block was found in full
    pub fn is_complete(&self) -> bool {
        self.blocks.iter().all(|b| {
            matches!(
                b.outcome,
                BlockOutcome::Located { .. } | BlockOutcome::Synthesized
            )
        })
    }
}

/// Reassemble the blocks of `descriptor` found in `dump` into a canonical image
pub fn reconstruct(dump: &[u8], descriptor: &FormatDescriptor) -> Reconstruction {
    let mut data: Vec<u8> = Vec::with_capacity(descriptor.canonical_len());
    let mut blocks = Vec::with_capacity(descriptor.blocks.len());
    let mut cursor = 0usize;

    for (index, spec) in descriptor.blocks.iter().enumerate() {
        let found = find_marker(dump, spec.magic, spec.occurrence, cursor);

        let image_offset = descriptor.image_offset(spec);
        let length = spec.length as usize;
        let end = image_offset + length;
        if data.len() < end {
            data.resize(end, 0);
        }
        let dest = &mut data[image_offset..end];

        cursor += length;

        let outcome = match found {
            Some(marker_end) => {
                cursor += MAGIC_LEN;
                let marker_offset = marker_end - MAGIC_LEN;
                let payload_offset = marker_end + spec.skip as usize;
                let payload = dump
                    .get(payload_offset..)
                    .map(|rest| &rest[..rest.len().min(length)])
                    .unwrap_or_default();

                dest[..payload.len()].copy_from_slice(payload);
                dest[payload.len()..].fill(0);

                if payload.len() == length {
                    debug!(
                        "Block {} ({}): marker at 0x{:X}, {:#x} bytes -> 0x{:X}",
                        index,
                        format_magic(spec.magic),
                        marker_offset,
                        length,
                        image_offset
                    );
                    BlockOutcome::Located {
                        marker_offset,
                        payload_offset,
                    }
                } else {
                    warn!(
                        "Block {} ({}): payload at 0x{:X} truncated to {:#x} of {:#x} bytes",
                        index,
                        format_magic(spec.magic),
                        payload_offset,
                        payload.len(),
                        length
                    );
                    BlockOutcome::Truncated {
                        marker_offset,
                        payload_offset,
                        copied: payload.len(),
                    }
                }
            }
            None => {
                dest.fill(0);
                if spec.is_unmarked() {
                    BlockOutcome::Synthesized
                } else {
                    BlockOutcome::Missing
                }
            }
        };

        blocks.push(BlockReport {
            index,
            spec: *spec,
            image_offset,
            outcome,
        });
    }

    let padded = round_up_to_sector(data.len());
    data.resize(padded, 0);

    debug!(
        "Reconstructed {} image: {:#x} bytes",
        descriptor.revision,
        data.len()
    );

    Reconstruction { data, blocks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{
        BuildRevision, NO_MARKER_MAGIC, ORAS_DUMP_SIZE, SECTOR_SIZE, SaveVariant, XY_DUMP_SIZE,
    };

    const M1: u32 = 0x1122_3344;
    const M2: u32 = 0x5566_7788;

    fn put_word(dump: &mut [u8], pos: usize, word: u32) {
        dump[pos..pos + 4].copy_from_slice(&word.to_le_bytes());
    }

    fn put_fill(dump: &mut [u8], pos: usize, len: usize, value: u8) {
        dump[pos..pos + len].fill(value);
    }

    fn descriptor(blocks: &'static [BlockSpec]) -> FormatDescriptor {
        FormatDescriptor {
            variant: SaveVariant::Xy,
            revision: BuildRevision::XyDefault,
            blocks,
        }
    }

    static REPEATED: [BlockSpec; 3] = [
        BlockSpec::new(0x100, 0x10, 0, M1, 0),
        BlockSpec::new(0x110, 0x10, 0, M1, 0),
        BlockSpec::new(0x120, 0x10, 0, M1, 0),
    ];

    #[test]
    fn test_repeated_marker_follows_cursor() {
        let mut dump = vec![0u8; 0x100];
        for (i, pos) in [0usize, 20, 40].into_iter().enumerate() {
            put_word(&mut dump, pos, M1);
            put_fill(&mut dump, pos + 4, 0x10, i as u8 + 1);
        }

        let result = reconstruct(&dump, &descriptor(&REPEATED));
        assert_eq!(result.data.len(), SECTOR_SIZE);
        assert!(result.data[0x00..0x10].iter().all(|&b| b == 1));
        assert!(result.data[0x10..0x20].iter().all(|&b| b == 2));
        assert!(result.data[0x20..0x30].iter().all(|&b| b == 3));
        assert!(result.data[0x30..].iter().all(|&b| b == 0));
        assert!(result.is_complete());
        assert_eq!(result.blocks[1].index, 1);
        assert_eq!(result.blocks[1].image_offset, 0x10);
        assert_eq!(result.blocks[1].spec, REPEATED[1]);
        assert_eq!(
            result.blocks[1].outcome,
            BlockOutcome::Located {
                marker_offset: 20,
                payload_offset: 24
            }
        );
    }

    static MISSING_FIRST: [BlockSpec; 2] = [
        BlockSpec::new(0x0, 0x10, 0, M2, 0),
        BlockSpec::new(0x10, 0x4, 0, M1, 0),
    ];

    #[test]
    fn test_missing_block_still_advances_cursor() {
        let mut dump = vec![0u8; 0x40];
        // Before the cursor once the missing block has been passed over
        put_word(&mut dump, 8, M1);
        put_fill(&mut dump, 12, 4, 0xAA);
        put_word(&mut dump, 0x20, M1);
        put_fill(&mut dump, 0x24, 4, 0xBB);

        let result = reconstruct(&dump, &descriptor(&MISSING_FIRST));
        assert_eq!(result.blocks[0].outcome, BlockOutcome::Missing);
        assert_eq!(&result.data[0x10..0x14], &[0xBB; 4]);
        assert!(result.data[..0x10].iter().all(|&b| b == 0));
        assert_eq!(result.missing_count(), 1);
        assert_eq!(result.located_count(), 1);
        assert!(!result.is_complete());
    }

    static SKIPPED: [BlockSpec; 1] = [BlockSpec::new(0x40, 0x8, 4, M1, 0)];

    #[test]
    fn test_skip_discards_bytes_after_marker() {
        let mut dump = vec![0u8; 0x40];
        put_word(&mut dump, 0x10, M1);
        put_fill(&mut dump, 0x14, 4, 0xEE);
        put_fill(&mut dump, 0x18, 8, 0x5A);

        let result = reconstruct(&dump, &descriptor(&SKIPPED));
        assert_eq!(&result.data[..8], &[0x5A; 8]);
        assert_eq!(
            result.blocks[0].outcome,
            BlockOutcome::Located {
                marker_offset: 0x10,
                payload_offset: 0x18
            }
        );
    }

    static TAIL: [BlockSpec; 1] = [BlockSpec::new(0x0, 0x10, 0, M1, 0)];

    #[test]
    fn test_payload_past_end_is_truncated() {
        let mut dump = vec![0u8; 0x20];
        put_word(&mut dump, 0x18, M1);
        put_fill(&mut dump, 0x1C, 4, 0x77);

        let result = reconstruct(&dump, &descriptor(&TAIL));
        assert_eq!(&result.data[..4], &[0x77; 4]);
        assert!(result.data[4..].iter().all(|&b| b == 0));
        assert_eq!(
            result.blocks[0].outcome,
            BlockOutcome::Truncated {
                marker_offset: 0x18,
                payload_offset: 0x1C,
                copied: 4
            }
        );
        assert!(result.blocks[0].outcome.is_located());
    }

    #[test]
    fn test_marker_in_last_word_is_missing() {
        let mut dump = vec![0u8; 0x20];
        put_word(&mut dump, 0x1C, M1);

        let result = reconstruct(&dump, &descriptor(&TAIL));
        assert_eq!(result.blocks[0].outcome, BlockOutcome::Missing);
        assert!(result.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_single_block_in_zero_dump() {
        let blocks = BuildRevision::XyDefault.blocks();
        let spec = blocks[2];
        let mut dump = vec![0u8; XY_DUMP_SIZE];
        put_word(&mut dump, 0x3_0000, spec.magic);
        put_fill(&mut dump, 0x3_0004, spec.length as usize, 0xC3);

        let desc = BuildRevision::XyDefault.descriptor();
        let result = reconstruct(&dump, &desc);

        let at = desc.image_offset(&spec);
        let mut expected = vec![0u8; desc.canonical_len()];
        expected[at..at + spec.length as usize].fill(0xC3);
        assert_eq!(result.data, expected);
        assert_eq!(result.located_count(), 1);
    }

    #[test]
    fn test_xy_three_blocks_end_to_end() {
        let desc = BuildRevision::XyE418.descriptor();
        let mut dump = vec![0u8; XY_DUMP_SIZE];

        // Block 0: marker doubles as the build signature
        put_word(&mut dump, 0x0, 0x0059_E418);
        put_fill(&mut dump, 0x4, 0x2C8, 0xA1);
        // Block 1: right where the cursor lands after block 0
        put_word(&mut dump, 0x2CC, 0x0059_E244);
        put_fill(&mut dump, 0x2D0, 0xB88, 0xB2);
        // Block 2: further along than the cursor
        put_word(&mut dump, 0x1000, 0x0059_E184);
        put_fill(&mut dump, 0x1004, 0x2C, 0xC3);
        // Block 3: four bytes skipped after the marker
        put_word(&mut dump, 0x2000, 0x0059_E304);
        put_fill(&mut dump, 0x2004, 4, 0xEE);
        put_fill(&mut dump, 0x2008, 0x38, 0xD4);

        let result = reconstruct(&dump, &desc);

        let mut expected = vec![0u8; 0x65600];
        expected[0x0000..0x02C8].fill(0xA1);
        expected[0x0400..0x0F88].fill(0xB2);
        expected[0x1000..0x102C].fill(0xC3);
        expected[0x1200..0x1238].fill(0xD4);

        assert_eq!(result.data.len(), expected.len());
        assert!(result.data == expected);
        assert_eq!(result.located_count(), 4);
        assert_eq!(result.missing_count(), 52);
        assert_eq!(
            result.blocks[3].outcome,
            BlockOutcome::Located {
                marker_offset: 0x2000,
                payload_offset: 0x2008
            }
        );
    }

    #[test]
    fn test_oras_unmarked_block_is_synthesized() {
        let desc = BuildRevision::Oras.descriptor();
        let mut dump = vec![0xFFu8; ORAS_DUMP_SIZE];
        put_word(&mut dump, 0x100, NO_MARKER_MAGIC);

        let result = reconstruct(&dump, &desc);
        let report = result
            .blocks
            .iter()
            .find(|b| b.spec.is_unmarked())
            .unwrap();
        assert_eq!(report.outcome, BlockOutcome::Synthesized);
        let at = report.image_offset;
        assert!(result.data[at..at + 0x200].iter().all(|&b| b == 0));
        assert_eq!(result.data.len(), 0x76000);
        assert!(result.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_output_length_is_sector_aligned() {
        for revision in [BuildRevision::Oras, BuildRevision::XyBec4] {
            let desc = revision.descriptor();
            let dump = vec![0u8; desc.variant.dump_size()];
            let result = reconstruct(&dump, &desc);
            assert_eq!(result.data.len(), desc.canonical_len());
            assert_eq!(result.data.len() % SECTOR_SIZE, 0);
            assert_eq!(result.blocks.len(), desc.blocks.len());
        }
    }
}
