//! Parameter types for the NVENC entry points.
//!
//! Structures the interface only ever passes behind a pointer are opaque: a
//! zero-sized `#[repr(C)]` marker keeps the pointer ABI identical to the
//! vendor definition without committing to a layout this crate never reads.

use libc::c_void;

// ============================================
// Handle aliases
// ============================================

pub type NV_ENC_INPUT_PTR = *mut c_void;
pub type NV_ENC_OUTPUT_PTR = *mut c_void;
pub type NV_ENC_REGISTERED_PTR = *mut c_void;
pub type NV_ENC_CUSTREAM_PTR = *mut c_void;

// ============================================
// By-value enums
// ============================================

/// Input surface formats accepted by the encoder.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NV_ENC_BUFFER_FORMAT {
    NV_ENC_BUFFER_FORMAT_UNDEFINED = 0x0000_0000,
    NV_ENC_BUFFER_FORMAT_NV12 = 0x0000_0001,
    NV_ENC_BUFFER_FORMAT_YV12 = 0x0000_0010,
    NV_ENC_BUFFER_FORMAT_IYUV = 0x0000_0100,
    NV_ENC_BUFFER_FORMAT_YUV444 = 0x0000_1000,
    NV_ENC_BUFFER_FORMAT_YUV420_10BIT = 0x0001_0000,
    NV_ENC_BUFFER_FORMAT_YUV444_10BIT = 0x0010_0000,
    NV_ENC_BUFFER_FORMAT_ARGB = 0x0100_0000,
    NV_ENC_BUFFER_FORMAT_ARGB10 = 0x0200_0000,
    NV_ENC_BUFFER_FORMAT_AYUV = 0x0400_0000,
    NV_ENC_BUFFER_FORMAT_ABGR = 0x1000_0000,
    NV_ENC_BUFFER_FORMAT_ABGR10 = 0x2000_0000,
    NV_ENC_BUFFER_FORMAT_U8 = 0x4000_0000,
}

/// Tuning profile selector for the extended preset-config query.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NV_ENC_TUNING_INFO {
    NV_ENC_TUNING_INFO_UNDEFINED = 0,
    NV_ENC_TUNING_INFO_HIGH_QUALITY = 1,
    NV_ENC_TUNING_INFO_LOW_LATENCY = 2,
    NV_ENC_TUNING_INFO_ULTRA_LOW_LATENCY = 3,
    NV_ENC_TUNING_INFO_LOSSLESS = 4,
    NV_ENC_TUNING_INFO_COUNT = 5,
}

// ============================================
// Pointer-only parameter structs (opaque)
// ============================================

#[repr(C)]
pub struct NV_ENC_CAPS_PARAM {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_PRESET_CONFIG {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_INITIALIZE_PARAMS {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_RECONFIGURE_PARAMS {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_OPEN_ENCODE_SESSION_EX_PARAMS {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_CREATE_INPUT_BUFFER {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_CREATE_BITSTREAM_BUFFER {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_CREATE_MV_BUFFER {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_PIC_PARAMS {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_LOOKAHEAD_PIC_PARAMS {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_MEONLY_PARAMS {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_LOCK_BITSTREAM {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_LOCK_INPUT_BUFFER {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_MAP_INPUT_RESOURCE {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_REGISTER_RESOURCE {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_RESTORE_ENCODER_STATE_PARAMS {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_STAT {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_SEQUENCE_PARAM_PAYLOAD {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct NV_ENC_EVENT_PARAMS {
    _opaque: [u8; 0],
}
