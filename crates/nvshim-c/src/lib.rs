//! Link-time stand-in for the proprietary NVENC driver library.
//!
//! Every export here matches the name, parameter list, and calling
//! convention of the corresponding vendor entry point and immediately
//! reports `NV_ENC_SUCCESS` without reading its inputs or writing its
//! outputs. Linking against this library lets encoder clients build, and
//! exercise their non-encoding paths, on machines without the driver.
//!
//! There is deliberately no state, no validation, and no sequencing: calls
//! succeed in any order, any number of times, from any number of threads.
//! Each entry point emits a TRACE event naming itself so SDK-less CI runs
//! can see which parts of the surface were exercised; the event touches no
//! argument.

use std::os::raw::{c_int, c_void};

use nvshim_sys::{
    GUID, NVENCSTATUS, NV_ENCODE_API_FUNCTION_LIST, NV_ENC_BUFFER_FORMAT, NV_ENC_CAPS_PARAM,
    NV_ENC_CREATE_BITSTREAM_BUFFER, NV_ENC_CREATE_INPUT_BUFFER, NV_ENC_CREATE_MV_BUFFER,
    NV_ENC_CUSTREAM_PTR, NV_ENC_EVENT_PARAMS, NV_ENC_INITIALIZE_PARAMS, NV_ENC_INPUT_PTR,
    NV_ENC_LOCK_BITSTREAM, NV_ENC_LOCK_INPUT_BUFFER, NV_ENC_LOOKAHEAD_PIC_PARAMS,
    NV_ENC_MAP_INPUT_RESOURCE, NV_ENC_MEONLY_PARAMS, NV_ENC_OPEN_ENCODE_SESSION_EX_PARAMS,
    NV_ENC_OUTPUT_PTR, NV_ENC_PIC_PARAMS, NV_ENC_PRESET_CONFIG, NV_ENC_RECONFIGURE_PARAMS,
    NV_ENC_REGISTERED_PTR, NV_ENC_REGISTER_RESOURCE, NV_ENC_RESTORE_ENCODER_STATE_PARAMS,
    NV_ENC_SEQUENCE_PARAM_PAYLOAD, NV_ENC_STAT, NV_ENC_TUNING_INFO,
};

const OK: NVENCSTATUS = NVENCSTATUS::NV_ENC_SUCCESS;

#[inline]
fn entered(entry: &'static str) {
    tracing::trace!(target: "nvenc_shim", entry, "stub call");
}

// ============================================
// Session Lifecycle
// ============================================

#[unsafe(no_mangle)]
pub extern "C" fn NvEncOpenEncodeSession(
    _device: *mut c_void,
    _device_type: u32,
    _encoder: *mut *mut c_void,
) -> NVENCSTATUS {
    entered("NvEncOpenEncodeSession");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncOpenEncodeSessionEx(
    _open_session_ex_params: *mut NV_ENC_OPEN_ENCODE_SESSION_EX_PARAMS,
    _encoder: *mut *mut c_void,
) -> NVENCSTATUS {
    entered("NvEncOpenEncodeSessionEx");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncInitializeEncoder(
    _encoder: *mut c_void,
    _create_encode_params: *mut NV_ENC_INITIALIZE_PARAMS,
) -> NVENCSTATUS {
    entered("NvEncInitializeEncoder");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncReconfigureEncoder(
    _encoder: *mut c_void,
    _re_init_encode_params: *mut NV_ENC_RECONFIGURE_PARAMS,
) -> NVENCSTATUS {
    entered("NvEncReconfigureEncoder");
    OK
}

/// Succeeds even for a handle no open call ever produced.
#[unsafe(no_mangle)]
pub extern "C" fn NvEncDestroyEncoder(_encoder: *mut c_void) -> NVENCSTATUS {
    entered("NvEncDestroyEncoder");
    OK
}

// ============================================
// Capability Enumeration
// ============================================

/// Reports success without writing a count; the caller's integer keeps
/// whatever value it held before the call.
#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetEncodeGUIDCount(
    _encoder: *mut c_void,
    _encode_guid_count: *mut u32,
) -> NVENCSTATUS {
    entered("NvEncGetEncodeGUIDCount");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetEncodeGUIDs(
    _encoder: *mut c_void,
    _guids: *mut GUID,
    _guid_array_size: u32,
    _guid_count: *mut u32,
) -> NVENCSTATUS {
    entered("NvEncGetEncodeGUIDs");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetEncodeProfileGUIDCount(
    _encoder: *mut c_void,
    _encode_guid: GUID,
    _encode_profile_guid_count: *mut u32,
) -> NVENCSTATUS {
    entered("NvEncGetEncodeProfileGUIDCount");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetEncodeProfileGUIDs(
    _encoder: *mut c_void,
    _encode_guid: GUID,
    _profile_guids: *mut GUID,
    _guid_array_size: u32,
    _guid_count: *mut u32,
) -> NVENCSTATUS {
    entered("NvEncGetEncodeProfileGUIDs");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetInputFormatCount(
    _encoder: *mut c_void,
    _encode_guid: GUID,
    _input_fmt_count: *mut u32,
) -> NVENCSTATUS {
    entered("NvEncGetInputFormatCount");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetInputFormats(
    _encoder: *mut c_void,
    _encode_guid: GUID,
    _input_fmts: *mut NV_ENC_BUFFER_FORMAT,
    _input_fmt_array_size: u32,
    _input_fmt_count: *mut u32,
) -> NVENCSTATUS {
    entered("NvEncGetInputFormats");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetEncodeCaps(
    _encoder: *mut c_void,
    _encode_guid: GUID,
    _caps_param: *mut NV_ENC_CAPS_PARAM,
    _caps_val: *mut c_int,
) -> NVENCSTATUS {
    entered("NvEncGetEncodeCaps");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetEncodePresetCount(
    _encoder: *mut c_void,
    _encode_guid: GUID,
    _encode_preset_guid_count: *mut u32,
) -> NVENCSTATUS {
    entered("NvEncGetEncodePresetCount");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetEncodePresetGUIDs(
    _encoder: *mut c_void,
    _encode_guid: GUID,
    _preset_guids: *mut GUID,
    _guid_array_size: u32,
    _encode_preset_guid_count: *mut u32,
) -> NVENCSTATUS {
    entered("NvEncGetEncodePresetGUIDs");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetEncodePresetConfig(
    _encoder: *mut c_void,
    _encode_guid: GUID,
    _preset_guid: GUID,
    _preset_config: *mut NV_ENC_PRESET_CONFIG,
) -> NVENCSTATUS {
    entered("NvEncGetEncodePresetConfig");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetEncodePresetConfigEx(
    _encoder: *mut c_void,
    _encode_guid: GUID,
    _preset_guid: GUID,
    _tuning_info: NV_ENC_TUNING_INFO,
    _preset_config: *mut NV_ENC_PRESET_CONFIG,
) -> NVENCSTATUS {
    entered("NvEncGetEncodePresetConfigEx");
    OK
}

// ============================================
// Buffer Management
// ============================================

#[unsafe(no_mangle)]
pub extern "C" fn NvEncCreateInputBuffer(
    _encoder: *mut c_void,
    _create_input_buffer_params: *mut NV_ENC_CREATE_INPUT_BUFFER,
) -> NVENCSTATUS {
    entered("NvEncCreateInputBuffer");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncDestroyInputBuffer(
    _encoder: *mut c_void,
    _input_buffer: NV_ENC_INPUT_PTR,
) -> NVENCSTATUS {
    entered("NvEncDestroyInputBuffer");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncLockInputBuffer(
    _encoder: *mut c_void,
    _lock_input_buffer_params: *mut NV_ENC_LOCK_INPUT_BUFFER,
) -> NVENCSTATUS {
    entered("NvEncLockInputBuffer");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncUnlockInputBuffer(
    _encoder: *mut c_void,
    _input_buffer: NV_ENC_INPUT_PTR,
) -> NVENCSTATUS {
    entered("NvEncUnlockInputBuffer");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncCreateBitstreamBuffer(
    _encoder: *mut c_void,
    _create_bitstream_buffer_params: *mut NV_ENC_CREATE_BITSTREAM_BUFFER,
) -> NVENCSTATUS {
    entered("NvEncCreateBitstreamBuffer");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncDestroyBitstreamBuffer(
    _encoder: *mut c_void,
    _bitstream_buffer: NV_ENC_OUTPUT_PTR,
) -> NVENCSTATUS {
    entered("NvEncDestroyBitstreamBuffer");
    OK
}

/// A real driver would block here until the bitstream is ready; the stub has
/// no bitstream and returns at once.
#[unsafe(no_mangle)]
pub extern "C" fn NvEncLockBitstream(
    _encoder: *mut c_void,
    _lock_bitstream_buffer_params: *mut NV_ENC_LOCK_BITSTREAM,
) -> NVENCSTATUS {
    entered("NvEncLockBitstream");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncUnlockBitstream(
    _encoder: *mut c_void,
    _bitstream_buffer: NV_ENC_OUTPUT_PTR,
) -> NVENCSTATUS {
    entered("NvEncUnlockBitstream");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncCreateMVBuffer(
    _encoder: *mut c_void,
    _create_mv_buffer_params: *mut NV_ENC_CREATE_MV_BUFFER,
) -> NVENCSTATUS {
    entered("NvEncCreateMVBuffer");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncDestroyMVBuffer(
    _encoder: *mut c_void,
    _mv_buffer: NV_ENC_OUTPUT_PTR,
) -> NVENCSTATUS {
    entered("NvEncDestroyMVBuffer");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncSetIOCudaStreams(
    _encoder: *mut c_void,
    _input_stream: NV_ENC_CUSTREAM_PTR,
    _output_stream: NV_ENC_CUSTREAM_PTR,
) -> NVENCSTATUS {
    entered("NvEncSetIOCudaStreams");
    OK
}

// ============================================
// External Resources
// ============================================

#[unsafe(no_mangle)]
pub extern "C" fn NvEncRegisterResource(
    _encoder: *mut c_void,
    _register_res_params: *mut NV_ENC_REGISTER_RESOURCE,
) -> NVENCSTATUS {
    entered("NvEncRegisterResource");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncUnregisterResource(
    _encoder: *mut c_void,
    _registered_resource: NV_ENC_REGISTERED_PTR,
) -> NVENCSTATUS {
    entered("NvEncUnregisterResource");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncMapInputResource(
    _encoder: *mut c_void,
    _map_input_res_params: *mut NV_ENC_MAP_INPUT_RESOURCE,
) -> NVENCSTATUS {
    entered("NvEncMapInputResource");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncUnmapInputResource(
    _encoder: *mut c_void,
    _mapped_input_buffer: NV_ENC_INPUT_PTR,
) -> NVENCSTATUS {
    entered("NvEncUnmapInputResource");
    OK
}

// ============================================
// Encoding
// ============================================

#[unsafe(no_mangle)]
pub extern "C" fn NvEncEncodePicture(
    _encoder: *mut c_void,
    _encode_pic_params: *mut NV_ENC_PIC_PARAMS,
) -> NVENCSTATUS {
    entered("NvEncEncodePicture");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncLookaheadPicture(
    _encoder: *mut c_void,
    _lookahead_params: *mut NV_ENC_LOOKAHEAD_PIC_PARAMS,
) -> NVENCSTATUS {
    entered("NvEncLookaheadPicture");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncRunMotionEstimationOnly(
    _encoder: *mut c_void,
    _me_only_params: *mut NV_ENC_MEONLY_PARAMS,
) -> NVENCSTATUS {
    entered("NvEncRunMotionEstimationOnly");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncRestoreEncoderState(
    _encoder: *mut c_void,
    _restore_state: *mut NV_ENC_RESTORE_ENCODER_STATE_PARAMS,
) -> NVENCSTATUS {
    entered("NvEncRestoreEncoderState");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncInvalidateRefFrames(
    _encoder: *mut c_void,
    _invalid_ref_frame_time_stamp: u64,
) -> NVENCSTATUS {
    entered("NvEncInvalidateRefFrames");
    OK
}

// ============================================
// Queries & Events
// ============================================

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetEncodeStats(
    _encoder: *mut c_void,
    _encode_stats: *mut NV_ENC_STAT,
) -> NVENCSTATUS {
    entered("NvEncGetEncodeStats");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetSequenceParams(
    _encoder: *mut c_void,
    _sequence_param_payload: *mut NV_ENC_SEQUENCE_PARAM_PAYLOAD,
) -> NVENCSTATUS {
    entered("NvEncGetSequenceParams");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncGetSequenceParamEx(
    _encoder: *mut c_void,
    _enc_init_params: *mut NV_ENC_INITIALIZE_PARAMS,
    _sequence_param_payload: *mut NV_ENC_SEQUENCE_PARAM_PAYLOAD,
) -> NVENCSTATUS {
    entered("NvEncGetSequenceParamEx");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncRegisterAsyncEvent(
    _encoder: *mut c_void,
    _event_params: *mut NV_ENC_EVENT_PARAMS,
) -> NVENCSTATUS {
    entered("NvEncRegisterAsyncEvent");
    OK
}

#[unsafe(no_mangle)]
pub extern "C" fn NvEncUnregisterAsyncEvent(
    _encoder: *mut c_void,
    _event_params: *mut NV_ENC_EVENT_PARAMS,
) -> NVENCSTATUS {
    entered("NvEncUnregisterAsyncEvent");
    OK
}

/// Reports success without writing a version, unlike the real driver. A
/// caller that inspects the version must initialize the pointee itself.
#[unsafe(no_mangle)]
pub extern "C" fn NvEncodeAPIGetMaxSupportedVersion(_version: *mut u32) -> NVENCSTATUS {
    entered("NvEncodeAPIGetMaxSupportedVersion");
    OK
}

// ============================================
// Factory
// ============================================

/// Leaves the caller's table exactly as it arrived: no slot is populated.
#[unsafe(no_mangle)]
pub extern "C" fn NvEncodeAPICreateInstance(
    _function_list: *mut NV_ENCODE_API_FUNCTION_LIST,
) -> NVENCSTATUS {
    entered("NvEncodeAPICreateInstance");
    OK
}

#[cfg(test)]
mod tests;
