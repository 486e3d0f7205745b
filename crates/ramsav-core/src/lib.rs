//! # ramsav-core
//!
//! Rebuilds Gen 6 (X / Y, Omega Ruby / Alpha Sapphire) save images from
//! `ramsav.bin` RAM dumps.
//!
//! This crate provides:
//! - Block tables for every known dump layout and build revision
//! - Marker word scanning over the dump
//! - Reconstruction of the canonical, sector-padded save image
//! - A save reader usable in a caller-supplied reader chain
//!
//! The rebuilt image is handed over as raw bytes; interpreting the save
//! itself (boxes, party, checksums) is left to the consumer.

pub mod config;
pub mod error;
pub mod format;
pub mod locate;
pub mod reader;
pub mod reconstruct;
pub mod report;

pub use config::{FilenameRule, ReaderConfig, ReaderConfigBuilder};
pub use error::{Error, Result};
pub use format::{
    BlockSpec, BuildRevision, FormatDescriptor, ORAS_DUMP_SIZE, SECTOR_SIZE, SaveVariant,
    Selection, SignatureMatch, XY_DUMP_SIZE, parse_magic, select_descriptor,
};
pub use locate::{find_marker, marker_positions};
pub use reader::{
    RamSavReader, ReconstructedImage, SaveReader, is_recognized, read_dump_file,
    read_with_readers, reconstruct_dump,
};
pub use reconstruct::{BlockOutcome, BlockReport, Reconstruction, reconstruct};
pub use report::{BlockRow, DumpReport};
