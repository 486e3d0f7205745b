use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::format::format_magic;
use crate::reader::ReconstructedImage;
use crate::reconstruct::BlockOutcome;

/// Reconstruction summary for diagnostic purposes
#[derive(Debug, Clone, Serialize)]
pub struct DumpReport {
    pub variant: String,
    pub revision: String,
    pub signature: String,
    pub signature_match: String,
    pub image_size: String,
    pub located: usize,
    pub total: usize,
    pub blocks: Vec<BlockRow>,
}

/// One block in hex string format
#[derive(Debug, Clone, Serialize)]
pub struct BlockRow {
    pub index: usize,
    pub magic: String,
    pub target_offset: String,
    pub length: String,
    pub image_offset: String,
    pub marker_offset: Option<String>,
    pub outcome: BlockOutcome,
}

impl DumpReport {
    pub fn from_image(image: &ReconstructedImage) -> Self {
        let blocks = image
            .blocks
            .iter()
            .map(|block| {
                let marker_offset = match block.outcome {
                    BlockOutcome::Located { marker_offset, .. }
                    | BlockOutcome::Truncated { marker_offset, .. } => {
                        Some(format!("0x{:X}", marker_offset))
                    }
                    BlockOutcome::Missing | BlockOutcome::Synthesized => None,
                };
                BlockRow {
                    index: block.index,
                    magic: format_magic(block.spec.magic),
                    target_offset: format!("0x{:X}", block.spec.target_offset),
                    length: format!("0x{:X}", block.spec.length),
                    image_offset: format!("0x{:X}", block.image_offset),
                    marker_offset,
                    outcome: block.outcome,
                }
            })
            .collect();

        Self {
            variant: image.variant.to_string(),
            revision: image.revision.to_string(),
            signature: format!("0x{:08X}", image.signature),
            signature_match: image.signature_match.to_string(),
            image_size: format!("0x{:X}", image.data.len()),
            located: image.located_count(),
            total: image.blocks.len(),
            blocks,
        }
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
