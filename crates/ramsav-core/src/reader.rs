//! Save reader entry point
//!
//! A [`SaveReader`] answers "is this input mine?" and, if so, produces a
//! canonical save image. Callers pass their own list of readers to
//! [`read_with_readers`]; returning `None` is the normal way of declining an input.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::ReaderConfig;
use crate::error::{Error, Result};
use crate::format::{BuildRevision, SaveVariant, SignatureMatch, select_descriptor};
use crate::reconstruct::{BlockReport, reconstruct};

/// Canonical save image rebuilt from a RAM dump
#[derive(Debug, Clone)]
pub struct ReconstructedImage {
    /// Selects the save object model that should interpret `data`
    pub variant: SaveVariant,
    pub revision: BuildRevision,
    pub signature: u32,
    pub signature_match: SignatureMatch,
    pub data: Vec<u8>,
    pub blocks: Vec<BlockReport>,
}

impl ReconstructedImage {
    pub fn located_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.outcome.is_located()).count()
    }
}

pub trait SaveReader {
    fn name(&self) -> &str;

    /// Cheap size check run before the input is handed over
    fn is_recognized(&self, size: usize) -> bool;

    /// Returns `None` when the input does not belong to this reader
    fn read_save_file(&self, data: &[u8], path: Option<&Path>) -> Option<ReconstructedImage>;
}

/// True for the two dump sizes this crate can reconstruct
pub fn is_recognized(size: usize) -> bool {
    SaveVariant::from_dump_size(size).is_some()
}

/// Run descriptor selection and reconstruction on a dump
pub fn reconstruct_dump(dump: &[u8]) -> Option<ReconstructedImage> {
    let selection = select_descriptor(dump)?;
    let result = reconstruct(dump, &selection.descriptor);

    info!(
        "Rebuilt {} save: {}/{} blocks located, {:#x} bytes",
        selection.descriptor.revision,
        result.located_count(),
        result.blocks.len(),
        result.data.len()
    );

    Some(ReconstructedImage {
        variant: selection.descriptor.variant,
        revision: selection.descriptor.revision,
        signature: selection.signature,
        signature_match: selection.signature_match,
        data: result.data,
        blocks: result.blocks,
    })
}

/// Reader for `ramsav.bin` dumps of the 3DS games
#[derive(Debug, Clone, Default)]
pub struct RamSavReader {
    config: ReaderConfig,
}

impl RamSavReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }
}

impl SaveReader for RamSavReader {
    fn name(&self) -> &str {
        "RAMSAV Reader"
    }

    fn is_recognized(&self, size: usize) -> bool {
        is_recognized(size)
    }

    fn read_save_file(&self, data: &[u8], path: Option<&Path>) -> Option<ReconstructedImage> {
        if let Some(path) = path.filter(|p| !self.config.accepts_path(p)) {
            debug!("{}: skipping {:?}, file name does not match", self.name(), path);
            return None;
        }
        if !self.is_recognized(data.len()) {
            return None;
        }
        reconstruct_dump(data)
    }
}

/// Offer the input to each reader in order and return the first image produced
pub fn read_with_readers(
    readers: &[&dyn SaveReader],
    data: &[u8],
    path: Option<&Path>,
) -> Option<ReconstructedImage> {
    readers.iter().find_map(|reader| {
        if !reader.is_recognized(data.len()) {
            return None;
        }
        let image = reader.read_save_file(data, path);
        if image.is_some() {
            debug!("{} accepted {} bytes", reader.name(), data.len());
        }
        image
    })
}

/// Read a dump from disk and reconstruct it, using the path as name hint
pub fn read_dump_file<P: AsRef<Path>>(path: P, config: &ReaderConfig) -> Result<ReconstructedImage> {
    let path = path.as_ref();
    if !config.accepts_path(path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        return Err(Error::NameRejected { name });
    }

    let data = fs::read(path)?;

    let image = reconstruct_dump(&data).ok_or(Error::UnrecognizedDump { size: data.len() })?;
    if image.signature_match == SignatureMatch::Fallback {
        warn!(
            "{:?}: build signature 0x{:08X} is unknown, blocks may be misplaced",
            path, image.signature
        );
    }
    Ok(image)
}
