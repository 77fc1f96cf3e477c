//! The dispatch table populated by `NvEncodeAPICreateInstance`.
//!
//! Clients hand the driver a versioned struct of function-pointer slots and
//! call the interface through whatever the driver filled in. Field order is
//! ABI; it follows the vendor header, reserved words included.

use libc::{c_char, c_int, c_void};

use crate::guid::GUID;
use crate::status::NVENCSTATUS;
use crate::types::{
    NV_ENC_BUFFER_FORMAT, NV_ENC_CAPS_PARAM, NV_ENC_CREATE_BITSTREAM_BUFFER,
    NV_ENC_CREATE_INPUT_BUFFER, NV_ENC_CREATE_MV_BUFFER, NV_ENC_CUSTREAM_PTR,
    NV_ENC_EVENT_PARAMS, NV_ENC_INITIALIZE_PARAMS, NV_ENC_INPUT_PTR, NV_ENC_LOCK_BITSTREAM,
    NV_ENC_LOCK_INPUT_BUFFER, NV_ENC_MAP_INPUT_RESOURCE, NV_ENC_MEONLY_PARAMS,
    NV_ENC_OPEN_ENCODE_SESSION_EX_PARAMS, NV_ENC_OUTPUT_PTR, NV_ENC_PIC_PARAMS,
    NV_ENC_PRESET_CONFIG, NV_ENC_RECONFIGURE_PARAMS, NV_ENC_REGISTERED_PTR,
    NV_ENC_REGISTER_RESOURCE, NV_ENC_SEQUENCE_PARAM_PAYLOAD, NV_ENC_STAT, NV_ENC_TUNING_INFO,
};

pub type PNVENCOPENENCODESESSION =
    Option<unsafe extern "C" fn(*mut c_void, u32, *mut *mut c_void) -> NVENCSTATUS>;
pub type PNVENCOPENENCODESESSIONEX = Option<
    unsafe extern "C" fn(*mut NV_ENC_OPEN_ENCODE_SESSION_EX_PARAMS, *mut *mut c_void) -> NVENCSTATUS,
>;
pub type PNVENCGETENCODEGUIDCOUNT =
    Option<unsafe extern "C" fn(*mut c_void, *mut u32) -> NVENCSTATUS>;
pub type PNVENCGETENCODEGUIDS =
    Option<unsafe extern "C" fn(*mut c_void, *mut GUID, u32, *mut u32) -> NVENCSTATUS>;
pub type PNVENCGETENCODEPROFILEGUIDCOUNT =
    Option<unsafe extern "C" fn(*mut c_void, GUID, *mut u32) -> NVENCSTATUS>;
pub type PNVENCGETENCODEPROFILEGUIDS =
    Option<unsafe extern "C" fn(*mut c_void, GUID, *mut GUID, u32, *mut u32) -> NVENCSTATUS>;
pub type PNVENCGETINPUTFORMATCOUNT =
    Option<unsafe extern "C" fn(*mut c_void, GUID, *mut u32) -> NVENCSTATUS>;
pub type PNVENCGETINPUTFORMATS = Option<
    unsafe extern "C" fn(*mut c_void, GUID, *mut NV_ENC_BUFFER_FORMAT, u32, *mut u32) -> NVENCSTATUS,
>;
pub type PNVENCGETENCODECAPS =
    Option<unsafe extern "C" fn(*mut c_void, GUID, *mut NV_ENC_CAPS_PARAM, *mut c_int) -> NVENCSTATUS>;
pub type PNVENCGETENCODEPRESETCOUNT =
    Option<unsafe extern "C" fn(*mut c_void, GUID, *mut u32) -> NVENCSTATUS>;
pub type PNVENCGETENCODEPRESETGUIDS =
    Option<unsafe extern "C" fn(*mut c_void, GUID, *mut GUID, u32, *mut u32) -> NVENCSTATUS>;
pub type PNVENCGETENCODEPRESETCONFIG =
    Option<unsafe extern "C" fn(*mut c_void, GUID, GUID, *mut NV_ENC_PRESET_CONFIG) -> NVENCSTATUS>;
pub type PNVENCGETENCODEPRESETCONFIGEX = Option<
    unsafe extern "C" fn(
        *mut c_void,
        GUID,
        GUID,
        NV_ENC_TUNING_INFO,
        *mut NV_ENC_PRESET_CONFIG,
    ) -> NVENCSTATUS,
>;
pub type PNVENCINITIALIZEENCODER =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_INITIALIZE_PARAMS) -> NVENCSTATUS>;
pub type PNVENCCREATEINPUTBUFFER =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_CREATE_INPUT_BUFFER) -> NVENCSTATUS>;
pub type PNVENCDESTROYINPUTBUFFER =
    Option<unsafe extern "C" fn(*mut c_void, NV_ENC_INPUT_PTR) -> NVENCSTATUS>;
pub type PNVENCCREATEBITSTREAMBUFFER =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_CREATE_BITSTREAM_BUFFER) -> NVENCSTATUS>;
pub type PNVENCDESTROYBITSTREAMBUFFER =
    Option<unsafe extern "C" fn(*mut c_void, NV_ENC_OUTPUT_PTR) -> NVENCSTATUS>;
pub type PNVENCENCODEPICTURE =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_PIC_PARAMS) -> NVENCSTATUS>;
pub type PNVENCLOCKBITSTREAM =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_LOCK_BITSTREAM) -> NVENCSTATUS>;
pub type PNVENCUNLOCKBITSTREAM =
    Option<unsafe extern "C" fn(*mut c_void, NV_ENC_OUTPUT_PTR) -> NVENCSTATUS>;
pub type PNVENCLOCKINPUTBUFFER =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_LOCK_INPUT_BUFFER) -> NVENCSTATUS>;
pub type PNVENCUNLOCKINPUTBUFFER =
    Option<unsafe extern "C" fn(*mut c_void, NV_ENC_INPUT_PTR) -> NVENCSTATUS>;
pub type PNVENCGETENCODESTATS =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_STAT) -> NVENCSTATUS>;
pub type PNVENCGETSEQUENCEPARAMS =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_SEQUENCE_PARAM_PAYLOAD) -> NVENCSTATUS>;
pub type PNVENCGETSEQUENCEPARAMEX = Option<
    unsafe extern "C" fn(
        *mut c_void,
        *mut NV_ENC_INITIALIZE_PARAMS,
        *mut NV_ENC_SEQUENCE_PARAM_PAYLOAD,
    ) -> NVENCSTATUS,
>;
pub type PNVENCREGISTERASYNCEVENT =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_EVENT_PARAMS) -> NVENCSTATUS>;
pub type PNVENCUNREGISTERASYNCEVENT =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_EVENT_PARAMS) -> NVENCSTATUS>;
pub type PNVENCMAPINPUTRESOURCE =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_MAP_INPUT_RESOURCE) -> NVENCSTATUS>;
pub type PNVENCUNMAPINPUTRESOURCE =
    Option<unsafe extern "C" fn(*mut c_void, NV_ENC_INPUT_PTR) -> NVENCSTATUS>;
pub type PNVENCDESTROYENCODER = Option<unsafe extern "C" fn(*mut c_void) -> NVENCSTATUS>;
pub type PNVENCINVALIDATEREFFRAMES =
    Option<unsafe extern "C" fn(*mut c_void, u64) -> NVENCSTATUS>;
pub type PNVENCREGISTERRESOURCE =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_REGISTER_RESOURCE) -> NVENCSTATUS>;
pub type PNVENCUNREGISTERRESOURCE =
    Option<unsafe extern "C" fn(*mut c_void, NV_ENC_REGISTERED_PTR) -> NVENCSTATUS>;
pub type PNVENCRECONFIGUREENCODER =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_RECONFIGURE_PARAMS) -> NVENCSTATUS>;
pub type PNVENCCREATEMVBUFFER =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_CREATE_MV_BUFFER) -> NVENCSTATUS>;
pub type PNVENCDESTROYMVBUFFER =
    Option<unsafe extern "C" fn(*mut c_void, NV_ENC_OUTPUT_PTR) -> NVENCSTATUS>;
pub type PNVENCRUNMOTIONESTIMATIONONLY =
    Option<unsafe extern "C" fn(*mut c_void, *mut NV_ENC_MEONLY_PARAMS) -> NVENCSTATUS>;
pub type PNVENCGETLASTERROR = Option<unsafe extern "C" fn(*mut c_void) -> *const c_char>;
pub type PNVENCSETIOCUDASTREAMS = Option<
    unsafe extern "C" fn(*mut c_void, NV_ENC_CUSTREAM_PTR, NV_ENC_CUSTREAM_PTR) -> NVENCSTATUS,
>;

/// Number of trailing reserved pointer slots in the dispatch table.
pub const NV_ENCODE_API_FUNCTION_LIST_RESERVED: usize = 277;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct NV_ENCODE_API_FUNCTION_LIST {
    pub version: u32,
    pub reserved: u32,
    pub nvEncOpenEncodeSession: PNVENCOPENENCODESESSION,
    pub nvEncGetEncodeGUIDCount: PNVENCGETENCODEGUIDCOUNT,
    pub nvEncGetEncodeProfileGUIDCount: PNVENCGETENCODEPROFILEGUIDCOUNT,
    pub nvEncGetEncodeProfileGUIDs: PNVENCGETENCODEPROFILEGUIDS,
    pub nvEncGetEncodeGUIDs: PNVENCGETENCODEGUIDS,
    pub nvEncGetInputFormatCount: PNVENCGETINPUTFORMATCOUNT,
    pub nvEncGetInputFormats: PNVENCGETINPUTFORMATS,
    pub nvEncGetEncodeCaps: PNVENCGETENCODECAPS,
    pub nvEncGetEncodePresetCount: PNVENCGETENCODEPRESETCOUNT,
    pub nvEncGetEncodePresetGUIDs: PNVENCGETENCODEPRESETGUIDS,
    pub nvEncGetEncodePresetConfig: PNVENCGETENCODEPRESETCONFIG,
    pub nvEncInitializeEncoder: PNVENCINITIALIZEENCODER,
    pub nvEncCreateInputBuffer: PNVENCCREATEINPUTBUFFER,
    pub nvEncDestroyInputBuffer: PNVENCDESTROYINPUTBUFFER,
    pub nvEncCreateBitstreamBuffer: PNVENCCREATEBITSTREAMBUFFER,
    pub nvEncDestroyBitstreamBuffer: PNVENCDESTROYBITSTREAMBUFFER,
    pub nvEncEncodePicture: PNVENCENCODEPICTURE,
    pub nvEncLockBitstream: PNVENCLOCKBITSTREAM,
    pub nvEncUnlockBitstream: PNVENCUNLOCKBITSTREAM,
    pub nvEncLockInputBuffer: PNVENCLOCKINPUTBUFFER,
    pub nvEncUnlockInputBuffer: PNVENCUNLOCKINPUTBUFFER,
    pub nvEncGetEncodeStats: PNVENCGETENCODESTATS,
    pub nvEncGetSequenceParams: PNVENCGETSEQUENCEPARAMS,
    pub nvEncRegisterAsyncEvent: PNVENCREGISTERASYNCEVENT,
    pub nvEncUnregisterAsyncEvent: PNVENCUNREGISTERASYNCEVENT,
    pub nvEncMapInputResource: PNVENCMAPINPUTRESOURCE,
    pub nvEncUnmapInputResource: PNVENCUNMAPINPUTRESOURCE,
    pub nvEncDestroyEncoder: PNVENCDESTROYENCODER,
    pub nvEncInvalidateRefFrames: PNVENCINVALIDATEREFFRAMES,
    pub nvEncOpenEncodeSessionEx: PNVENCOPENENCODESESSIONEX,
    pub nvEncRegisterResource: PNVENCREGISTERRESOURCE,
    pub nvEncUnregisterResource: PNVENCUNREGISTERRESOURCE,
    pub nvEncReconfigureEncoder: PNVENCRECONFIGUREENCODER,
    pub reserved1: *mut c_void,
    pub nvEncCreateMVBuffer: PNVENCCREATEMVBUFFER,
    pub nvEncDestroyMVBuffer: PNVENCDESTROYMVBUFFER,
    pub nvEncRunMotionEstimationOnly: PNVENCRUNMOTIONESTIMATIONONLY,
    pub nvEncGetLastErrorString: PNVENCGETLASTERROR,
    pub nvEncSetIOCudaStreams: PNVENCSETIOCUDASTREAMS,
    pub nvEncGetEncodePresetConfigEx: PNVENCGETENCODEPRESETCONFIGEX,
    pub nvEncGetSequenceParamEx: PNVENCGETSEQUENCEPARAMEX,
    pub reserved2: [*mut c_void; NV_ENCODE_API_FUNCTION_LIST_RESERVED],
}

impl NV_ENCODE_API_FUNCTION_LIST {
    /// Empty table carrying the given version word; every slot unpopulated.
    pub const fn empty(version: u32) -> Self {
        Self {
            version,
            reserved: 0,
            nvEncOpenEncodeSession: None,
            nvEncGetEncodeGUIDCount: None,
            nvEncGetEncodeProfileGUIDCount: None,
            nvEncGetEncodeProfileGUIDs: None,
            nvEncGetEncodeGUIDs: None,
            nvEncGetInputFormatCount: None,
            nvEncGetInputFormats: None,
            nvEncGetEncodeCaps: None,
            nvEncGetEncodePresetCount: None,
            nvEncGetEncodePresetGUIDs: None,
            nvEncGetEncodePresetConfig: None,
            nvEncInitializeEncoder: None,
            nvEncCreateInputBuffer: None,
            nvEncDestroyInputBuffer: None,
            nvEncCreateBitstreamBuffer: None,
            nvEncDestroyBitstreamBuffer: None,
            nvEncEncodePicture: None,
            nvEncLockBitstream: None,
            nvEncUnlockBitstream: None,
            nvEncLockInputBuffer: None,
            nvEncUnlockInputBuffer: None,
            nvEncGetEncodeStats: None,
            nvEncGetSequenceParams: None,
            nvEncRegisterAsyncEvent: None,
            nvEncUnregisterAsyncEvent: None,
            nvEncMapInputResource: None,
            nvEncUnmapInputResource: None,
            nvEncDestroyEncoder: None,
            nvEncInvalidateRefFrames: None,
            nvEncOpenEncodeSessionEx: None,
            nvEncRegisterResource: None,
            nvEncUnregisterResource: None,
            nvEncReconfigureEncoder: None,
            reserved1: std::ptr::null_mut(),
            nvEncCreateMVBuffer: None,
            nvEncDestroyMVBuffer: None,
            nvEncRunMotionEstimationOnly: None,
            nvEncGetLastErrorString: None,
            nvEncSetIOCudaStreams: None,
            nvEncGetEncodePresetConfigEx: None,
            nvEncGetSequenceParamEx: None,
            reserved2: [std::ptr::null_mut(); NV_ENCODE_API_FUNCTION_LIST_RESERVED],
        }
    }
}

impl Default for NV_ENCODE_API_FUNCTION_LIST {
    fn default() -> Self {
        Self::empty(crate::version::NV_ENCODE_API_FUNCTION_LIST_VER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::NV_ENCODE_API_FUNCTION_LIST_VER;

    #[test]
    fn empty_table_has_no_populated_slot() {
        let list = NV_ENCODE_API_FUNCTION_LIST::default();
        assert_eq!(list.version, NV_ENCODE_API_FUNCTION_LIST_VER);
        assert!(list.nvEncOpenEncodeSession.is_none());
        assert!(list.nvEncEncodePicture.is_none());
        assert!(list.nvEncDestroyEncoder.is_none());
        assert!(list.reserved1.is_null());
        assert!(list.reserved2.iter().all(|p| p.is_null()));
    }

    #[test]
    fn table_layout_is_pointer_dense() {
        // version + reserved pack into one pointer-sized word on 64-bit; the
        // rest of the struct is 41 function/reserved slots plus the trailing
        // reserved array.
        let expected = std::mem::size_of::<*mut std::ffi::c_void>()
            * (1 + 41 + NV_ENCODE_API_FUNCTION_LIST_RESERVED);
        assert_eq!(std::mem::size_of::<NV_ENCODE_API_FUNCTION_LIST>(), expected);
    }
}
