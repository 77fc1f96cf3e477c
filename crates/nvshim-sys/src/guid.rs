//! Well-known identifiers of the NVENC interface.
//!
//! Codec, profile, and preset selection all go through 16-byte GUIDs whose
//! values are published in the vendor header.

/// Windows-layout GUID, as the interface passes it by value.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GUID {
    pub Data1: u32,
    pub Data2: u16,
    pub Data3: u16,
    pub Data4: [u8; 8],
}

impl GUID {
    pub const fn new(d1: u32, d2: u16, d3: u16, d4: [u8; 8]) -> Self {
        Self {
            Data1: d1,
            Data2: d2,
            Data3: d3,
            Data4: d4,
        }
    }

    /// The all-zero GUID, which no codec, profile, or preset uses.
    pub const fn zeroed() -> Self {
        Self::new(0, 0, 0, [0; 8])
    }
}

// ============================================
// Codec GUIDs
// ============================================

pub const NV_ENC_CODEC_H264_GUID: GUID =
    GUID::new(0x6bc8_2762, 0x4e63, 0x4ca4, [0xaa, 0x85, 0x1e, 0x50, 0xf3, 0x21, 0xf6, 0xbf]);

pub const NV_ENC_CODEC_HEVC_GUID: GUID =
    GUID::new(0x790c_dc88, 0x4522, 0x4d7b, [0x94, 0x25, 0xbd, 0xa9, 0x97, 0x5f, 0x76, 0x03]);

pub const NV_ENC_CODEC_AV1_GUID: GUID =
    GUID::new(0x0a35_2289, 0x0aa7, 0x4759, [0x86, 0x2d, 0x5d, 0x15, 0xcd, 0x16, 0xd2, 0x54]);

// ============================================
// Profile GUIDs
// ============================================

pub const NV_ENC_CODEC_PROFILE_AUTOSELECT_GUID: GUID =
    GUID::new(0xbfd6_f8e7, 0x233c, 0x4341, [0x8b, 0x3e, 0x48, 0x18, 0x52, 0x38, 0x03, 0xf4]);

pub const NV_ENC_H264_PROFILE_BASELINE_GUID: GUID =
    GUID::new(0x0727_bcaa, 0x78c4, 0x4c83, [0x8c, 0x2f, 0xef, 0x3d, 0xff, 0x26, 0x7c, 0x6a]);

pub const NV_ENC_H264_PROFILE_MAIN_GUID: GUID =
    GUID::new(0x60b5_c1d4, 0x67fe, 0x4790, [0x94, 0xd5, 0xc4, 0x72, 0x6d, 0x7b, 0x6e, 0x6d]);

pub const NV_ENC_H264_PROFILE_HIGH_GUID: GUID =
    GUID::new(0xe7cb_c309, 0x4f7a, 0x4b89, [0xaf, 0x2a, 0xd5, 0x37, 0xc9, 0x2b, 0xe3, 0x10]);

pub const NV_ENC_H264_PROFILE_HIGH_444_GUID: GUID =
    GUID::new(0x7ac6_63cb, 0xa598, 0x4960, [0xb8, 0x44, 0x33, 0x9b, 0x26, 0x1a, 0x7d, 0x52]);

pub const NV_ENC_H264_PROFILE_STEREO_GUID: GUID =
    GUID::new(0x4084_7bf5, 0x33f7, 0x4601, [0x90, 0x84, 0xe8, 0xfe, 0x3c, 0x1d, 0xb8, 0xb7]);

pub const NV_ENC_H264_PROFILE_PROGRESSIVE_HIGH_GUID: GUID =
    GUID::new(0xb405_afac, 0xf32b, 0x417b, [0x89, 0xc4, 0x9a, 0xbe, 0xed, 0x3e, 0x59, 0x78]);

pub const NV_ENC_H264_PROFILE_CONSTRAINED_HIGH_GUID: GUID =
    GUID::new(0xaec1_bd87, 0xe85b, 0x48f2, [0x84, 0xc3, 0x98, 0xbc, 0xa6, 0x28, 0x50, 0x72]);

pub const NV_ENC_HEVC_PROFILE_MAIN_GUID: GUID =
    GUID::new(0xb514_c39a, 0xb55b, 0x40fa, [0x87, 0x8f, 0xf1, 0x25, 0x3b, 0x4d, 0xfd, 0xec]);

pub const NV_ENC_HEVC_PROFILE_MAIN10_GUID: GUID =
    GUID::new(0xfa4d_2b6c, 0x3a5b, 0x411a, [0x80, 0x18, 0x0a, 0x3f, 0x5e, 0x3c, 0x9b, 0xe5]);

pub const NV_ENC_HEVC_PROFILE_FREXT_GUID: GUID =
    GUID::new(0x51ec_32b5, 0x1b4c, 0x453c, [0x9c, 0xbd, 0xb6, 0x16, 0xbd, 0x62, 0x13, 0x41]);

pub const NV_ENC_AV1_PROFILE_MAIN_GUID: GUID =
    GUID::new(0x5f2a_39f5, 0xf14e, 0x4f95, [0x9a, 0x9e, 0xb7, 0x6d, 0x56, 0x8f, 0xcf, 0x97]);

// ============================================
// Performance preset GUIDs
// ============================================

// P1 is the fastest preset, P7 the highest quality.

pub const NV_ENC_PRESET_P1_GUID: GUID =
    GUID::new(0xfc0a_8d3e, 0x45f8, 0x4cf8, [0x80, 0xc7, 0x29, 0x88, 0x71, 0x59, 0x0e, 0xbf]);

pub const NV_ENC_PRESET_P2_GUID: GUID =
    GUID::new(0xf581_cfb8, 0x88d6, 0x4381, [0x93, 0xf0, 0xdf, 0x13, 0xf9, 0xc2, 0x7d, 0xab]);

pub const NV_ENC_PRESET_P3_GUID: GUID =
    GUID::new(0x3685_0110, 0x3a07, 0x441f, [0x94, 0xd5, 0x36, 0x70, 0x63, 0x1f, 0x91, 0xf6]);

pub const NV_ENC_PRESET_P4_GUID: GUID =
    GUID::new(0x90a7_b826, 0xdf06, 0x4862, [0xb9, 0xd2, 0xcd, 0x6d, 0x73, 0xa0, 0x86, 0x81]);

pub const NV_ENC_PRESET_P5_GUID: GUID =
    GUID::new(0x21c6_e6b4, 0x297a, 0x4cba, [0x99, 0x8f, 0xb6, 0xcb, 0xde, 0x72, 0xad, 0xe3]);

pub const NV_ENC_PRESET_P6_GUID: GUID =
    GUID::new(0x8e75_c279, 0x6299, 0x4ab6, [0x83, 0x02, 0x0b, 0x21, 0x5a, 0x33, 0x5c, 0xf5]);

pub const NV_ENC_PRESET_P7_GUID: GUID =
    GUID::new(0x8484_8c12, 0x6f71, 0x4c13, [0x93, 0x1b, 0x53, 0xe2, 0x83, 0xf5, 0x79, 0x74]);
