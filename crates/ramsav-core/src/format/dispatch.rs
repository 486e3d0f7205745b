//! Pick the block table matching a dump

use serde::Serialize;
use strum::Display;
use tracing::{debug, warn};

use super::{BuildRevision, FormatDescriptor, MAGIC_LEN, SaveVariant};

/// XY builds distinguished by the first word of the dump
const XY_SIGNATURES: [BuildRevision; 3] = [
    BuildRevision::XyE418,
    BuildRevision::XyE408,
    BuildRevision::XyBec4,
];

/// How the build signature contributed to the chosen table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum SignatureMatch {
    /// The signature named a known build
    Known,
    /// Unknown signature; the default XY table was used and may mis-locate blocks
    Fallback,
    /// The variant has a single table, the signature is not consulted
    NotApplicable,
}

#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub descriptor: FormatDescriptor,
    /// First word of the dump, little-endian
    pub signature: u32,
    pub signature_match: SignatureMatch,
}

impl Selection {
    pub fn is_fallback(&self) -> bool {
        self.signature_match == SignatureMatch::Fallback
    }
}

/// Read the build signature from the start of a dump
pub fn read_signature(dump: &[u8]) -> Option<u32> {
    let word: [u8; MAGIC_LEN] = dump.get(..MAGIC_LEN)?.try_into().ok()?;
    Some(u32::from_le_bytes(word))
}

/// Select the format descriptor for a dump from its length and build signature
///
/// Returns `None` when the length matches no known game.
pub fn select_descriptor(dump: &[u8]) -> Option<Selection> {
    let variant = SaveVariant::from_dump_size(dump.len())?;
    let signature = read_signature(dump)?;

    let (revision, signature_match) = match variant {
        SaveVariant::Oras => (BuildRevision::Oras, SignatureMatch::NotApplicable),
        SaveVariant::Xy => match XY_SIGNATURES
            .iter()
            .find(|rev| rev.signature() == Some(signature))
        {
            Some(rev) => (*rev, SignatureMatch::Known),
            None => {
                warn!(
                    "Unknown XY build signature 0x{:08X}, using default marker table",
                    signature
                );
                (BuildRevision::XyDefault, SignatureMatch::Fallback)
            }
        },
    };

    debug!(
        "Selected {} table ({} blocks) for signature 0x{:08X}",
        revision,
        revision.blocks().len(),
        signature
    );

    Some(Selection {
        descriptor: revision.descriptor(),
        signature,
        signature_match,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{ORAS_DUMP_SIZE, XY_DUMP_SIZE};

    fn dump_with_signature(size: usize, signature: u32) -> Vec<u8> {
        let mut dump = vec![0u8; size];
        dump[..4].copy_from_slice(&signature.to_le_bytes());
        dump
    }

    #[test]
    fn test_unrecognized_sizes() {
        assert!(select_descriptor(&[]).is_none());
        assert!(select_descriptor(&[0u8; 3]).is_none());
        assert!(select_descriptor(&vec![0u8; XY_DUMP_SIZE - 1]).is_none());
        assert!(select_descriptor(&vec![0u8; ORAS_DUMP_SIZE + 1]).is_none());
    }

    #[test]
    fn test_oras_ignores_signature() {
        let dump = dump_with_signature(ORAS_DUMP_SIZE, 0x0059_E418);
        let selection = select_descriptor(&dump).unwrap();
        assert_eq!(selection.descriptor.revision, BuildRevision::Oras);
        assert_eq!(selection.signature_match, SignatureMatch::NotApplicable);
        assert!(!selection.is_fallback());
    }

    #[test]
    fn test_known_xy_signatures() {
        for (signature, expected) in [
            (0x0059_E418, BuildRevision::XyE418),
            (0x0059_E408, BuildRevision::XyE408),
            (0x0059_BEC4, BuildRevision::XyBec4),
        ] {
            let dump = dump_with_signature(XY_DUMP_SIZE, signature);
            let selection = select_descriptor(&dump).unwrap();
            assert_eq!(selection.descriptor.revision, expected);
            assert_eq!(selection.descriptor.variant, SaveVariant::Xy);
            assert_eq!(selection.signature, signature);
            assert_eq!(selection.signature_match, SignatureMatch::Known);
        }
    }

    #[test]
    fn test_unknown_xy_signature_falls_back() {
        let dump = dump_with_signature(XY_DUMP_SIZE, 0xDEAD_BEEF);
        let selection = select_descriptor(&dump).unwrap();
        assert_eq!(selection.descriptor.revision, BuildRevision::XyDefault);
        assert!(selection.is_fallback());
    }

    #[test]
    fn test_read_signature() {
        assert_eq!(read_signature(&[0x18, 0xE4, 0x59, 0x00, 0xFF]), Some(0x0059_E418));
        assert_eq!(read_signature(&[0x18, 0xE4, 0x59]), None);
    }
}
