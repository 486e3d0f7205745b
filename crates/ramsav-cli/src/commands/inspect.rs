//! Inspect command implementation.
//!
//! Prints one line per block of the selected table:
//!
//! ```text
//!  idx  magic     target    length   marker    status
//!    0  0059E418  0x5400    0x2C8    0x0       located
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use ramsav_core::{BlockOutcome, DumpReport, ReaderConfig, SignatureMatch, read_dump_file};

use super::hex_utils::format_hex_offset;

/// Short status label for a block outcome
pub fn outcome_label(outcome: &BlockOutcome) -> &'static str {
    match outcome {
        BlockOutcome::Located { .. } => "located",
        BlockOutcome::Truncated { .. } => "truncated",
        BlockOutcome::Missing => "missing",
        BlockOutcome::Synthesized => "zero-filled",
    }
}

/// Run the inspect command
pub fn run(input: &Path, json: Option<&Path>, config: &ReaderConfig) -> Result<()> {
    let image = read_dump_file(input, config)
        .with_context(|| format!("Failed to rebuild save from {}", input.display()))?;
    let report = DumpReport::from_image(&image);

    if let Some(json_path) = json {
        report.save(json_path)?;
        println!("Report saved to: {}", json_path.display());
        return Ok(());
    }

    println!("Game:      {}", image.variant.game_name());
    println!("Table:     {}", image.revision);
    match image.signature_match {
        SignatureMatch::Fallback => println!(
            "Signature: {} {}",
            report.signature,
            "(unknown build, default table used)".yellow()
        ),
        _ => println!("Signature: {} ({})", report.signature, image.signature_match),
    }
    println!("Image:     {} bytes", report.image_size);
    println!();

    println!(
        "{:>4}  {:<8}  {:<8}  {:<7}  {:<8}  status",
        "idx", "magic", "target", "length", "marker"
    );
    for block in &image.blocks {
        let marker = match block.outcome {
            BlockOutcome::Located { marker_offset, .. }
            | BlockOutcome::Truncated { marker_offset, .. } => format_hex_offset(marker_offset),
            BlockOutcome::Missing | BlockOutcome::Synthesized => "-".to_string(),
        };
        let label = outcome_label(&block.outcome);
        let status = match block.outcome {
            BlockOutcome::Located { .. } => label.green().to_string(),
            BlockOutcome::Truncated { .. } => label.yellow().to_string(),
            BlockOutcome::Missing => label.red().to_string(),
            BlockOutcome::Synthesized => label.dimmed().to_string(),
        };
        println!(
            "{:>4}  {:08X}  {:<8}  {:<7}  {:<8}  {}",
            block.index,
            block.spec.magic,
            format_hex_offset(block.spec.target_offset as usize),
            format_hex_offset(block.spec.length as usize),
            marker,
            status
        );
    }

    println!();
    println!("{}/{} blocks located", report.located, report.total);

    Ok(())
}
