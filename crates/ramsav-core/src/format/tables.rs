//! Block tables for the known dump layouts.
//!
//! Columns: canonical offset, length, skip, marker word, occurrence.
//! The XY revisions share one layout and differ only in marker words.

use super::{BlockSpec, NO_MARKER_MAGIC};

/// Omega Ruby / Alpha Sapphire.
pub static ORAS_BLOCKS: [BlockSpec; 59] = [
    BlockSpec::new(0x05400, 0x002C8, 0, 0x005E0BB8, 0),
    BlockSpec::new(0x05800, 0x00B90, 0, 0x005E09C4, 0),
    BlockSpec::new(0x06400, 0x0002C, 0, 0x005E0904, 0),
    BlockSpec::new(0x06600, 0x00038, 4, 0x005E0AA4, 0),
    BlockSpec::new(0x06800, 0x00150, 0, 0x005E0BF8, 0),
    BlockSpec::new(0x06A00, 0x00004, 0, 0x005E05CC, 0),
    BlockSpec::new(0x06C00, 0x00008, 0, 0x005E0B04, 0),
    BlockSpec::new(0x06E00, 0x001C0, 4, 0x005E0A44, 0),
    BlockSpec::new(0x07000, 0x000BE, 0, 0x005E0AC4, 0),
    BlockSpec::new(0x07200, 0x00024, 0, 0x005E05AC, 0),
    BlockSpec::new(0x07400, 0x02100, 0, 0x005E064C, 0),
    BlockSpec::new(0x09600, 0x00130, 4, 0x005E0944, 0),
    BlockSpec::new(0x09800, 0x00440, 0, 0x005E0924, 0),
    BlockSpec::new(0x09E00, 0x00574, 0, 0x005E0B78, 0),
    BlockSpec::new(0x0A400, 0x04E28, 4, 0x005E0884, 0),
    BlockSpec::new(0x0F400, 0x04E28, 4, 0x005E0884, 0),
    BlockSpec::new(0x14400, 0x04E28, 4, 0x005E0884, 0),
    BlockSpec::new(0x19400, 0x00170, 4, 0x005E0AE4, 0),
    BlockSpec::new(0x19600, 0x0061C, 0, 0x005E068C, 0),
    BlockSpec::new(0x19E00, 0x00504, 0, 0x005DF40C, 0),
    BlockSpec::new(0x1A400, 0x011CC, 0, 0x005E0C18, 0),
    BlockSpec::new(0x1B600, 0x00644, 0, 0x005E072C, 0),
    BlockSpec::new(0x1BE00, 0x00104, 0, 0x005E05EC, 0),
    BlockSpec::new(0x1C000, 0x00004, 0, 0x005E0964, 0),
    BlockSpec::new(0x1C200, 0x00420, 0, 0x005E06AC, 0),
    BlockSpec::new(0x1C800, 0x00064, 0, 0x005E06EC, 0),
    BlockSpec::new(0x1CA00, 0x003F0, 0, 0x005E062C, 0),
    BlockSpec::new(0x1CE00, 0x0070C, 0, 0x005E0BD8, 0),
    BlockSpec::new(0x1D600, 0x00180, 4, 0x005E0A64, 0),
    BlockSpec::new(0x1D800, 0x00004, 0, 0x005E0B98, 0),
    BlockSpec::new(0x1DA00, 0x0000C, 0, 0x005E07CC, 0),
    BlockSpec::new(0x1DC00, 0x00048, 0, 0x005E0A24, 0),
    BlockSpec::new(0x1DE00, 0x00054, 0, 0x005E058C, 0),
    BlockSpec::new(0x1E000, 0x00644, 0, 0x005E04EC, 0),
    BlockSpec::new(0x1E800, 0x005C8, 0, 0x005E056C, 0),
    BlockSpec::new(0x1EE00, 0x002F8, 4, 0x005E082C, 0),
    BlockSpec::new(0x1F200, 0x01B40, 0, 0x005E0984, 0),
    BlockSpec::new(0x20E00, 0x001F4, 0, 0x005E070C, 0),
    BlockSpec::new(0x21000, 0x003E0, 4, 0x005E0B58, 0),
    BlockSpec::new(0x21400, 0x00216, 0, 0x005E054C, 0),
    BlockSpec::new(0x21800, 0x00640, 0, 0x005E050C, 0),
    BlockSpec::new(0x22000, 0x01A90, 0, 0x005E080C, 0),
    BlockSpec::new(0x23C00, 0x00400, 0, 0x005E076C, 0),
    BlockSpec::new(0x24000, 0x00618, 0, 0x005E07AC, 0),
    BlockSpec::new(0x24800, 0x0025C, 0, 0x005E09E4, 0),
    BlockSpec::new(0x24C00, 0x00834, 0, 0x005E08A4, 0),
    BlockSpec::new(0x25600, 0x00318, 0, 0x005E078C, 0),
    BlockSpec::new(0x25A00, 0x007D0, 0, 0x005E074C, 0),
    BlockSpec::new(0x26200, 0x00C48, 0, 0x005E060C, 0),
    BlockSpec::new(0x27000, 0x00078, 0, 0x005E06CC, 0),
    BlockSpec::new(0x27200, 0x00200, 0, NO_MARKER_MAGIC, 0),
    BlockSpec::new(0x27400, 0x00C84, 0, 0x005E0864, 0),
    BlockSpec::new(0x28200, 0x00628, 0, 0x005E07EC, 0),
    BlockSpec::new(0x28A00, 0x00400, 0, 0x005E0A04, 0),
    BlockSpec::new(0x28E00, 0x07AD0, 4, 0x005E052C, 0),
    BlockSpec::new(0x30A00, 0x078B0, 4, 0x005E08C4, 0),
    BlockSpec::new(0x38400, 0x34AD0, 0, 0x005E04CC, 0),
    BlockSpec::new(0x6D000, 0x0E058, 4, 0x005E066C, 0),
    BlockSpec::new(0x7B200, 0x00200, 4, 0x005E09A4, 0),
];

/// X / Y, used when the build signature is not recognized.
pub static XY_DEFAULT_BLOCKS: [BlockSpec; 56] = [
    BlockSpec::new(0x05400, 0x002C8, 0, 0x0059AE94, 0),
    BlockSpec::new(0x05800, 0x00B88, 0, 0x0059ACC0, 0),
    BlockSpec::new(0x06400, 0x0002C, 0, 0x0059AC00, 0),
    BlockSpec::new(0x06600, 0x00038, 4, 0x0059AD80, 0),
    BlockSpec::new(0x06800, 0x00150, 0, 0x0059AED4, 0),
    BlockSpec::new(0x06A00, 0x00004, 0, 0x0059A8E8, 0),
    BlockSpec::new(0x06C00, 0x00008, 0, 0x0059ADE0, 0),
    BlockSpec::new(0x06E00, 0x001C0, 4, 0x0059AD20, 0),
    BlockSpec::new(0x07000, 0x000BE, 0, 0x0059ADA0, 0),
    BlockSpec::new(0x07200, 0x00024, 0, 0x0059A8C8, 0),
    BlockSpec::new(0x07400, 0x02100, 0, 0x0059A968, 0),
    BlockSpec::new(0x09600, 0x00140, 4, 0x0059AC40, 0),
    BlockSpec::new(0x09800, 0x00440, 0, 0x0059AC20, 0),
    BlockSpec::new(0x09E00, 0x00574, 0, 0x0059AE54, 0),
    BlockSpec::new(0x0A400, 0x04E28, 4, 0x0059ABA0, 0),
    BlockSpec::new(0x0F400, 0x04E28, 4, 0x0059ABA0, 0),
    BlockSpec::new(0x14400, 0x04E28, 4, 0x0059ABA0, 0),
    BlockSpec::new(0x19400, 0x00170, 4, 0x0059ADC0, 0),
    BlockSpec::new(0x19600, 0x0061C, 0, 0x0059A9A8, 0),
    BlockSpec::new(0x19E00, 0x00504, 0, 0x00599734, 0),
    BlockSpec::new(0x1A400, 0x006A0, 0, 0x0059AEF4, 0),
    BlockSpec::new(0x1AC00, 0x00644, 0, 0x0059AA48, 0),
    BlockSpec::new(0x1B400, 0x00104, 0, 0x0059A908, 0),
    BlockSpec::new(0x1B600, 0x00004, 0, 0x0059AC60, 0),
    BlockSpec::new(0x1B800, 0x00420, 0, 0x0059A9C8, 0),
    BlockSpec::new(0x1BE00, 0x00064, 0, 0x0059AA08, 0),
    BlockSpec::new(0x1C000, 0x003F0, 0, 0x0059A948, 0),
    BlockSpec::new(0x1C400, 0x0070C, 0, 0x0059AEB4, 0),
    BlockSpec::new(0x1CC00, 0x00180, 4, 0x0059AD40, 0),
    BlockSpec::new(0x1CE00, 0x00004, 0, 0x0059AE74, 0),
    BlockSpec::new(0x1D000, 0x0000C, 0, 0x0059AAE8, 0),
    BlockSpec::new(0x1D200, 0x00048, 0, 0x0059AD00, 0),
    BlockSpec::new(0x1D400, 0x00054, 0, 0x0059A8A8, 0),
    BlockSpec::new(0x1D600, 0x00644, 0, 0x0059A800, 0),
    BlockSpec::new(0x1DE00, 0x005C8, 0, 0x0059A888, 0),
    BlockSpec::new(0x1E400, 0x002F8, 0, 0x0059AB70, 0),
    BlockSpec::new(0x1E800, 0x01B40, 0, 0x0059AC80, 0),
    BlockSpec::new(0x20400, 0x001F4, 0, 0x0059AA28, 0),
    BlockSpec::new(0x20600, 0x001F0, 4, 0x0059AE34, 0),
    BlockSpec::new(0x20800, 0x00216, 0, 0x0059A868, 0),
    BlockSpec::new(0x20C00, 0x00390, 0, 0x0059A820, 0),
    BlockSpec::new(0x21000, 0x01A90, 0, 0x0059AB28, 0),
    BlockSpec::new(0x22C00, 0x00308, 0, 0x0059AA88, 0),
    BlockSpec::new(0x23000, 0x00618, 0, 0x0059AAC8, 0),
    BlockSpec::new(0x23800, 0x0025C, 0, 0x0059ACE0, 0),
    BlockSpec::new(0x23C00, 0x00834, 0, 0x0059ABC0, 0),
    BlockSpec::new(0x24600, 0x00318, 0, 0x0059AAA8, 0),
    BlockSpec::new(0x24A00, 0x007D0, 0, 0x0059AA68, 0),
    BlockSpec::new(0x25200, 0x00C48, 0, 0x0059A928, 0),
    BlockSpec::new(0x26000, 0x00078, 0, 0x0059A9E8, 0),
    BlockSpec::new(0x26200, 0x00200, 0, 0x0059AD60, 0),
    BlockSpec::new(0x26400, 0x00C84, 0, 0x0059AB80, 0),
    BlockSpec::new(0x27200, 0x00628, 0, 0x0059AB08, 0),
    BlockSpec::new(0x27A00, 0x34AD0, 0, 0x0059A7E0, 0),
    BlockSpec::new(0x5C600, 0x0E058, 4, 0x0059A988, 0),
    BlockSpec::new(0x6A800, 0x00200, 4, 0x0059ACA0, 0),
];

/// X / Y build with signature `0x0059E418`.
pub static XY_E418_BLOCKS: [BlockSpec; 56] = [
    BlockSpec::new(0x05400, 0x002C8, 0, 0x0059E418, 0),
    BlockSpec::new(0x05800, 0x00B88, 0, 0x0059E244, 0),
    BlockSpec::new(0x06400, 0x0002C, 0, 0x0059E184, 0),
    BlockSpec::new(0x06600, 0x00038, 4, 0x0059E304, 0),
    BlockSpec::new(0x06800, 0x00150, 0, 0x0059E458, 0),
    BlockSpec::new(0x06A00, 0x00004, 0, 0x0059DE6C, 0),
    BlockSpec::new(0x06C00, 0x00008, 0, 0x0059E364, 0),
    BlockSpec::new(0x06E00, 0x001C0, 4, 0x0059E2A4, 0),
    BlockSpec::new(0x07000, 0x000BE, 0, 0x0059E324, 0),
    BlockSpec::new(0x07200, 0x00024, 0, 0x0059DE4C, 0),
    BlockSpec::new(0x07400, 0x02100, 0, 0x0059DEEC, 0),
    BlockSpec::new(0x09600, 0x00140, 4, 0x0059E1C4, 0),
    BlockSpec::new(0x09800, 0x00440, 0, 0x0059E1A4, 0),
    BlockSpec::new(0x09E00, 0x00574, 0, 0x0059E3D8, 0),
    BlockSpec::new(0x0A400, 0x04E28, 4, 0x0059E124, 0),
    BlockSpec::new(0x0F400, 0x04E28, 4, 0x0059E124, 0),
    BlockSpec::new(0x14400, 0x04E28, 4, 0x0059E124, 0),
    BlockSpec::new(0x19400, 0x00170, 4, 0x0059E344, 0),
    BlockSpec::new(0x19600, 0x0061C, 0, 0x0059DF2C, 0),
    BlockSpec::new(0x19E00, 0x00504, 0, 0x0059CCB8, 0),
    BlockSpec::new(0x1A400, 0x006A0, 0, 0x0059E478, 0),
    BlockSpec::new(0x1AC00, 0x00644, 0, 0x0059DFCC, 0),
    BlockSpec::new(0x1B400, 0x00104, 0, 0x0059DE8C, 0),
    BlockSpec::new(0x1B600, 0x00004, 0, 0x0059E1E4, 0),
    BlockSpec::new(0x1B800, 0x00420, 0, 0x0059DF4C, 0),
    BlockSpec::new(0x1BE00, 0x00064, 0, 0x0059DF8C, 0),
    BlockSpec::new(0x1C000, 0x003F0, 0, 0x0059DECC, 0),
    BlockSpec::new(0x1C400, 0x0070C, 0, 0x0059E438, 0),
    BlockSpec::new(0x1CC00, 0x00180, 4, 0x0059E2C4, 0),
    BlockSpec::new(0x1CE00, 0x00004, 0, 0x0059E3F8, 0),
    BlockSpec::new(0x1D000, 0x0000C, 0, 0x0059E06C, 0),
    BlockSpec::new(0x1D200, 0x00048, 0, 0x0059E284, 0),
    BlockSpec::new(0x1D400, 0x00054, 0, 0x0059DE2C, 0),
    BlockSpec::new(0x1D600, 0x00644, 0, 0x0059DD84, 0),
    BlockSpec::new(0x1DE00, 0x005C8, 0, 0x0059DE0C, 0),
    BlockSpec::new(0x1E400, 0x002F8, 0, 0x0059E0CC, 0),
    BlockSpec::new(0x1E800, 0x01B40, 0, 0x0059E204, 0),
    BlockSpec::new(0x20400, 0x001F4, 0, 0x0059DFAC, 0),
    BlockSpec::new(0x20600, 0x001F0, 4, 0x0059E3B8, 0),
    BlockSpec::new(0x20800, 0x00216, 0, 0x0059DDEC, 0),
    BlockSpec::new(0x20C00, 0x00390, 0, 0x0059DDA4, 0),
    BlockSpec::new(0x21000, 0x01A90, 0, 0x0059E0AC, 0),
    BlockSpec::new(0x22C00, 0x00308, 0, 0x0059E00C, 0),
    BlockSpec::new(0x23000, 0x00618, 0, 0x0059E04C, 0),
    BlockSpec::new(0x23800, 0x0025C, 0, 0x0059E264, 0),
    BlockSpec::new(0x23C00, 0x00834, 0, 0x0059E144, 0),
    BlockSpec::new(0x24600, 0x00318, 0, 0x0059E02C, 0),
    BlockSpec::new(0x24A00, 0x007D0, 0, 0x0059DFEC, 0),
    BlockSpec::new(0x25200, 0x00C48, 0, 0x0059DEAC, 0),
    BlockSpec::new(0x26000, 0x00078, 0, 0x0059DF6C, 0),
    BlockSpec::new(0x26200, 0x00200, 0, 0x0059E2E4, 0),
    BlockSpec::new(0x26400, 0x00C84, 0, 0x0059E104, 0),
    BlockSpec::new(0x27200, 0x00628, 0, 0x0059E08C, 0),
    BlockSpec::new(0x27A00, 0x34AD0, 0, 0x0059DD64, 0),
    BlockSpec::new(0x5C600, 0x0E058, 4, 0x0059DF0C, 0),
    BlockSpec::new(0x6A800, 0x00200, 4, 0x0059E224, 0),
];

/// X / Y build with signature `0x0059E408`.
pub static XY_E408_BLOCKS: [BlockSpec; 56] = [
    BlockSpec::new(0x05400, 0x002C8, 0, 0x0059E408, 0),
    BlockSpec::new(0x05800, 0x00B88, 0, 0x0059E234, 0),
    BlockSpec::new(0x06400, 0x0002C, 0, 0x0059E174, 0),
    BlockSpec::new(0x06600, 0x00038, 4, 0x0059E2F4, 0),
    BlockSpec::new(0x06800, 0x00150, 0, 0x0059E448, 0),
    BlockSpec::new(0x06A00, 0x00004, 0, 0x0059DE5C, 0),
    BlockSpec::new(0x06C00, 0x00008, 0, 0x0059E354, 0),
    BlockSpec::new(0x06E00, 0x001C0, 4, 0x0059E294, 0),
    BlockSpec::new(0x07000, 0x000BE, 0, 0x0059E314, 0),
    BlockSpec::new(0x07200, 0x00024, 0, 0x0059DE3C, 0),
    BlockSpec::new(0x07400, 0x02100, 0, 0x0059DEDC, 0),
    BlockSpec::new(0x09600, 0x00140, 4, 0x0059E1B4, 0),
    BlockSpec::new(0x09800, 0x00440, 0, 0x0059E194, 0),
    BlockSpec::new(0x09E00, 0x00574, 0, 0x0059E3C8, 0),
    BlockSpec::new(0x0A400, 0x04E28, 4, 0x0059E114, 0),
    BlockSpec::new(0x0F400, 0x04E28, 4, 0x0059E114, 0),
    BlockSpec::new(0x14400, 0x04E28, 4, 0x0059E114, 0),
    BlockSpec::new(0x19400, 0x00170, 4, 0x0059E334, 0),
    BlockSpec::new(0x19600, 0x0061C, 0, 0x0059DF1C, 0),
    BlockSpec::new(0x19E00, 0x00504, 0, 0x0059CCA8, 0),
    BlockSpec::new(0x1A400, 0x006A0, 0, 0x0059E468, 0),
    BlockSpec::new(0x1AC00, 0x00644, 0, 0x0059DFBC, 0),
    BlockSpec::new(0x1B400, 0x00104, 0, 0x0059DE7C, 0),
    BlockSpec::new(0x1B600, 0x00004, 0, 0x0059E1D4, 0),
    BlockSpec::new(0x1B800, 0x00420, 0, 0x0059DF3C, 0),
    BlockSpec::new(0x1BE00, 0x00064, 0, 0x0059DF7C, 0),
    BlockSpec::new(0x1C000, 0x003F0, 0, 0x0059DEBC, 0),
    BlockSpec::new(0x1C400, 0x0070C, 0, 0x0059E428, 0),
    BlockSpec::new(0x1CC00, 0x00180, 4, 0x0059E2B4, 0),
    BlockSpec::new(0x1CE00, 0x00004, 0, 0x0059E3E8, 0),
    BlockSpec::new(0x1D000, 0x0000C, 0, 0x0059E05C, 0),
    BlockSpec::new(0x1D200, 0x00048, 0, 0x0059E274, 0),
    BlockSpec::new(0x1D400, 0x00054, 0, 0x0059DE1C, 0),
    BlockSpec::new(0x1D600, 0x00644, 0, 0x0059DD74, 0),
    BlockSpec::new(0x1DE00, 0x005C8, 0, 0x0059DDFC, 0),
    BlockSpec::new(0x1E400, 0x002F8, 0, 0x0059E0BC, 0),
    BlockSpec::new(0x1E800, 0x01B40, 0, 0x0059E1F4, 0),
    BlockSpec::new(0x20400, 0x001F4, 0, 0x0059DF9C, 0),
    BlockSpec::new(0x20600, 0x001F0, 4, 0x0059E3A8, 0),
    BlockSpec::new(0x20800, 0x00216, 0, 0x0059DDDC, 0),
    BlockSpec::new(0x20C00, 0x00390, 0, 0x0059DD94, 0),
    BlockSpec::new(0x21000, 0x01A90, 0, 0x0059E09C, 0),
    BlockSpec::new(0x22C00, 0x00308, 0, 0x0059DFFC, 0),
    BlockSpec::new(0x23000, 0x00618, 0, 0x0059E03C, 0),
    BlockSpec::new(0x23800, 0x0025C, 0, 0x0059E254, 0),
    BlockSpec::new(0x23C00, 0x00834, 0, 0x0059E134, 0),
    BlockSpec::new(0x24600, 0x00318, 0, 0x0059E01C, 0),
    BlockSpec::new(0x24A00, 0x007D0, 0, 0x0059DFDC, 0),
    BlockSpec::new(0x25200, 0x00C48, 0, 0x0059DE9C, 0),
    BlockSpec::new(0x26000, 0x00078, 0, 0x0059DF5C, 0),
    BlockSpec::new(0x26200, 0x00200, 0, 0x0059E2D4, 0),
    BlockSpec::new(0x26400, 0x00C84, 0, 0x0059E0F4, 0),
    BlockSpec::new(0x27200, 0x00628, 0, 0x0059E07C, 0),
    BlockSpec::new(0x27A00, 0x34AD0, 0, 0x0059DD54, 0),
    BlockSpec::new(0x5C600, 0x0E058, 4, 0x0059DEFC, 0),
    BlockSpec::new(0x6A800, 0x00200, 4, 0x0059E214, 0),
];

/// X / Y build with signature `0x0059BEC4`.
pub static XY_BEC4_BLOCKS: [BlockSpec; 56] = [
    BlockSpec::new(0x05400, 0x002C8, 0, 0x0059BEC4, 0),
    BlockSpec::new(0x05800, 0x00B88, 0, 0x0059BCF0, 0),
    BlockSpec::new(0x06400, 0x0002C, 0, 0x0059BC30, 0),
    BlockSpec::new(0x06600, 0x00038, 4, 0x0059BDB0, 0),
    BlockSpec::new(0x06800, 0x00150, 0, 0x0059BF04, 0),
    BlockSpec::new(0x06A00, 0x00004, 0, 0x0059B918, 0),
    BlockSpec::new(0x06C00, 0x00008, 0, 0x0059BE10, 0),
    BlockSpec::new(0x06E00, 0x001C0, 4, 0x0059BD50, 0),
    BlockSpec::new(0x07000, 0x000BE, 0, 0x0059BDD0, 0),
    BlockSpec::new(0x07200, 0x00024, 0, 0x0059B8F8, 0),
    BlockSpec::new(0x07400, 0x02100, 0, 0x0059B998, 0),
    BlockSpec::new(0x09600, 0x00140, 4, 0x0059BC70, 0),
    BlockSpec::new(0x09800, 0x00440, 0, 0x0059BC50, 0),
    BlockSpec::new(0x09E00, 0x00574, 0, 0x0059BE84, 0),
    BlockSpec::new(0x0A400, 0x04E28, 4, 0x0059BBD0, 0),
    BlockSpec::new(0x0F400, 0x04E28, 4, 0x0059BBD0, 0),
    BlockSpec::new(0x14400, 0x04E28, 4, 0x0059BBD0, 0),
    BlockSpec::new(0x19400, 0x00170, 4, 0x0059BDF0, 0),
    BlockSpec::new(0x19600, 0x0061C, 0, 0x0059B9D8, 0),
    BlockSpec::new(0x19E00, 0x00504, 0, 0x0059A764, 0),
    BlockSpec::new(0x1A400, 0x006A0, 0, 0x0059BF24, 0),
    BlockSpec::new(0x1AC00, 0x00644, 0, 0x0059BA78, 0),
    BlockSpec::new(0x1B400, 0x00104, 0, 0x0059B938, 0),
    BlockSpec::new(0x1B600, 0x00004, 0, 0x0059BC90, 0),
    BlockSpec::new(0x1B800, 0x00420, 0, 0x0059B9F8, 0),
    BlockSpec::new(0x1BE00, 0x00064, 0, 0x0059BA38, 0),
    BlockSpec::new(0x1C000, 0x003F0, 0, 0x0059B978, 0),
    BlockSpec::new(0x1C400, 0x0070C, 0, 0x0059BEE4, 0),
    BlockSpec::new(0x1CC00, 0x00180, 4, 0x0059BD70, 0),
    BlockSpec::new(0x1CE00, 0x00004, 0, 0x0059BEA4, 0),
    BlockSpec::new(0x1D000, 0x0000C, 0, 0x0059BB18, 0),
    BlockSpec::new(0x1D200, 0x00048, 0, 0x0059BD30, 0),
    BlockSpec::new(0x1D400, 0x00054, 0, 0x0059B8D8, 0),
    BlockSpec::new(0x1D600, 0x00644, 0, 0x0059B830, 0),
    BlockSpec::new(0x1DE00, 0x005C8, 0, 0x0059B8B8, 0),
    BlockSpec::new(0x1E400, 0x002F8, 0, 0x0059BBA0, 0),
    BlockSpec::new(0x1E800, 0x01B40, 0, 0x0059BCB0, 0),
    BlockSpec::new(0x20400, 0x001F4, 0, 0x0059BA58, 0),
    BlockSpec::new(0x20600, 0x001F0, 4, 0x0059BE64, 0),
    BlockSpec::new(0x20800, 0x00216, 0, 0x0059B898, 0),
    BlockSpec::new(0x20C00, 0x00390, 0, 0x0059B850, 0),
    BlockSpec::new(0x21000, 0x01A90, 0, 0x0059BB58, 0),
    BlockSpec::new(0x22C00, 0x00308, 0, 0x0059BAB8, 0),
    BlockSpec::new(0x23000, 0x00618, 0, 0x0059BAF8, 0),
    BlockSpec::new(0x23800, 0x0025C, 0, 0x0059BD10, 0),
    BlockSpec::new(0x23C00, 0x00834, 0, 0x0059BBF0, 0),
    BlockSpec::new(0x24600, 0x00318, 0, 0x0059BAD8, 0),
    BlockSpec::new(0x24A00, 0x007D0, 0, 0x0059BA98, 0),
    BlockSpec::new(0x25200, 0x00C48, 0, 0x0059B958, 0),
    BlockSpec::new(0x26000, 0x00078, 0, 0x0059BA18, 0),
    BlockSpec::new(0x26200, 0x00200, 0, 0x0059BD90, 0),
    BlockSpec::new(0x26400, 0x00C84, 0, 0x0059BBB0, 0),
    BlockSpec::new(0x27200, 0x00628, 0, 0x0059BB38, 0),
    BlockSpec::new(0x27A00, 0x34AD0, 0, 0x0059B810, 0),
    BlockSpec::new(0x5C600, 0x0E058, 4, 0x0059B9B8, 0),
    BlockSpec::new(0x6A800, 0x00200, 4, 0x0059BCD0, 0),
];
