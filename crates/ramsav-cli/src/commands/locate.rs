//! Locate command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ramsav_core::format::MAGIC_LEN;
use ramsav_core::{find_marker, marker_positions, parse_magic};

use super::hex_utils::{format_hex_offset, parse_hex_offset};

/// Collect up to `limit` marker positions, flagging whether more exist
fn collect_limited(data: &[u8], magic: u32, start: usize, limit: usize) -> (Vec<usize>, bool) {
    let mut found: Vec<usize> = marker_positions(data, magic, start)
        .take(limit.saturating_add(1))
        .collect();
    let truncated = found.len() > limit;
    found.truncate(limit);
    (found, truncated)
}

/// Run the locate command
pub fn run(
    input: &Path,
    magic: &str,
    occurrence: u32,
    start: &str,
    all: bool,
    limit: usize,
) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let magic = parse_magic(magic)?;
    let start = parse_hex_offset(start)?;

    println!(
        "Searching {} ({} bytes) for {:08X} from {}",
        input.display(),
        data.len(),
        magic,
        format_hex_offset(start)
    );
    println!();

    if all {
        let (found, truncated) = collect_limited(&data, magic, start, limit);
        for (i, pos) in found.iter().enumerate() {
            println!("[{}] {}", i, format_hex_offset(*pos));
        }
        println!();
        println!("Found {} result(s)", found.len());
        if truncated {
            println!("(limit reached, use --limit to increase)");
        }
        return Ok(());
    }

    match find_marker(&data, magic, occurrence, start) {
        Some(payload) => {
            println!("Marker:  {}", format_hex_offset(payload - MAGIC_LEN));
            println!("Payload: {}", format_hex_offset(payload));
        }
        None => println!("No match for occurrence {}", occurrence),
    }

    Ok(())
}
