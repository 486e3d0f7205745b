//! Convert command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ramsav_core::{ReaderConfig, SignatureMatch, read_dump_file};
use tracing::warn;

/// Default output path: `<input stem>_main.bin` next to the input
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ramsav".to_string());
    input.with_file_name(format!("{}_main.bin", stem))
}

/// Run the convert command
pub fn run(input: &Path, output: Option<&Path>, config: &ReaderConfig) -> Result<()> {
    let image = read_dump_file(input, config)
        .with_context(|| format!("Failed to rebuild save from {}", input.display()))?;

    if image.signature_match == SignatureMatch::Fallback {
        warn!("Output may be incomplete, check it with the inspect command");
    }

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));
    fs::write(&output, &image.data)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} ({}): {}/{} blocks located",
        image.variant.game_name(),
        image.revision,
        image.located_count(),
        image.blocks.len()
    );
    println!("Saved {} bytes to: {}", image.data.len(), output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramsav_core::{FilenameRule, XY_DUMP_SIZE};
    use tempfile::TempDir;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("dumps/ramsav.bin")),
            PathBuf::from("dumps/ramsav_main.bin")
        );
        assert_eq!(
            default_output_path(Path::new("ramsav")),
            PathBuf::from("ramsav_main.bin")
        );
    }

    #[test]
    fn test_convert_writes_image() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("ramsav.bin");
        let mut dump = vec![0u8; XY_DUMP_SIZE];
        dump[..4].copy_from_slice(&0x0059_E418u32.to_le_bytes());
        dump[4..8].copy_from_slice(&[1, 2, 3, 4]);
        fs::write(&input, &dump).unwrap();

        run(&input, None, &ReaderConfig::default()).unwrap();

        let written = fs::read(dir.path().join("ramsav_main.bin")).unwrap();
        assert_eq!(written.len(), 0x65600);
        assert_eq!(&written[..4], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_convert_rejects_unknown_dump() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("ramsav.bin");
        fs::write(&input, [0u8; 32]).unwrap();
        let output = dir.path().join("out.bin");

        let config = ReaderConfig::builder()
            .filename_rule(FilenameRule::Contains)
            .build();
        assert!(run(&input, Some(&output), &config).is_err());
        assert!(!output.exists());
    }
}
