use std::ptr;
use std::sync::Once;

use nvshim_sys::{
    NV_ENCODE_API_FUNCTION_LIST_VER, NV_ENC_CODEC_H264_GUID, NV_ENC_CODEC_HEVC_GUID,
    NV_ENC_PRESET_P4_GUID,
};

use super::*;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("trace")
            .with_test_writer()
            .init();
    });
}

#[test]
fn every_entry_point_reports_success_for_null_inputs() {
    init_logging();

    let null = ptr::null_mut();
    assert_eq!(NvEncOpenEncodeSession(null, 0, ptr::null_mut()), OK);
    assert_eq!(NvEncOpenEncodeSessionEx(ptr::null_mut(), ptr::null_mut()), OK);
    assert_eq!(NvEncInitializeEncoder(null, ptr::null_mut()), OK);
    assert_eq!(NvEncReconfigureEncoder(null, ptr::null_mut()), OK);
    assert_eq!(NvEncGetEncodeGUIDCount(null, ptr::null_mut()), OK);
    assert_eq!(NvEncGetEncodeGUIDs(null, ptr::null_mut(), 0, ptr::null_mut()), OK);
    assert_eq!(
        NvEncGetEncodeProfileGUIDCount(null, NV_ENC_CODEC_H264_GUID, ptr::null_mut()),
        OK
    );
    assert_eq!(
        NvEncGetEncodeProfileGUIDs(null, NV_ENC_CODEC_H264_GUID, ptr::null_mut(), 0, ptr::null_mut()),
        OK
    );
    assert_eq!(NvEncGetInputFormatCount(null, NV_ENC_CODEC_HEVC_GUID, ptr::null_mut()), OK);
    assert_eq!(
        NvEncGetInputFormats(null, NV_ENC_CODEC_HEVC_GUID, ptr::null_mut(), 0, ptr::null_mut()),
        OK
    );
    assert_eq!(
        NvEncGetEncodeCaps(null, NV_ENC_CODEC_H264_GUID, ptr::null_mut(), ptr::null_mut()),
        OK
    );
    assert_eq!(NvEncGetEncodePresetCount(null, NV_ENC_CODEC_H264_GUID, ptr::null_mut()), OK);
    assert_eq!(
        NvEncGetEncodePresetGUIDs(null, NV_ENC_CODEC_H264_GUID, ptr::null_mut(), 0, ptr::null_mut()),
        OK
    );
    assert_eq!(
        NvEncGetEncodePresetConfig(null, NV_ENC_CODEC_H264_GUID, NV_ENC_PRESET_P4_GUID, ptr::null_mut()),
        OK
    );
    assert_eq!(
        NvEncGetEncodePresetConfigEx(
            null,
            NV_ENC_CODEC_H264_GUID,
            NV_ENC_PRESET_P4_GUID,
            NV_ENC_TUNING_INFO::NV_ENC_TUNING_INFO_LOW_LATENCY,
            ptr::null_mut(),
        ),
        OK
    );
    assert_eq!(NvEncCreateInputBuffer(null, ptr::null_mut()), OK);
    assert_eq!(NvEncDestroyInputBuffer(null, ptr::null_mut()), OK);
    assert_eq!(NvEncLockInputBuffer(null, ptr::null_mut()), OK);
    assert_eq!(NvEncUnlockInputBuffer(null, ptr::null_mut()), OK);
    assert_eq!(NvEncCreateBitstreamBuffer(null, ptr::null_mut()), OK);
    assert_eq!(NvEncDestroyBitstreamBuffer(null, ptr::null_mut()), OK);
    assert_eq!(NvEncLockBitstream(null, ptr::null_mut()), OK);
    assert_eq!(NvEncUnlockBitstream(null, ptr::null_mut()), OK);
    assert_eq!(NvEncCreateMVBuffer(null, ptr::null_mut()), OK);
    assert_eq!(NvEncDestroyMVBuffer(null, ptr::null_mut()), OK);
    assert_eq!(NvEncSetIOCudaStreams(null, ptr::null_mut(), ptr::null_mut()), OK);
    assert_eq!(NvEncRegisterResource(null, ptr::null_mut()), OK);
    assert_eq!(NvEncUnregisterResource(null, ptr::null_mut()), OK);
    assert_eq!(NvEncMapInputResource(null, ptr::null_mut()), OK);
    assert_eq!(NvEncUnmapInputResource(null, ptr::null_mut()), OK);
    assert_eq!(NvEncEncodePicture(null, ptr::null_mut()), OK);
    assert_eq!(NvEncLookaheadPicture(null, ptr::null_mut()), OK);
    assert_eq!(NvEncRunMotionEstimationOnly(null, ptr::null_mut()), OK);
    assert_eq!(NvEncRestoreEncoderState(null, ptr::null_mut()), OK);
    assert_eq!(NvEncInvalidateRefFrames(null, 0), OK);
    assert_eq!(NvEncGetEncodeStats(null, ptr::null_mut()), OK);
    assert_eq!(NvEncGetSequenceParams(null, ptr::null_mut()), OK);
    assert_eq!(NvEncGetSequenceParamEx(null, ptr::null_mut(), ptr::null_mut()), OK);
    assert_eq!(NvEncRegisterAsyncEvent(null, ptr::null_mut()), OK);
    assert_eq!(NvEncUnregisterAsyncEvent(null, ptr::null_mut()), OK);
    assert_eq!(NvEncodeAPIGetMaxSupportedVersion(ptr::null_mut()), OK);
    assert_eq!(NvEncodeAPICreateInstance(ptr::null_mut()), OK);
    assert_eq!(NvEncDestroyEncoder(null), OK);
}

#[test]
fn count_queries_leave_the_output_untouched() {
    init_logging();

    let mut guid_count: u32 = 0xdead_beef;
    assert_eq!(NvEncGetEncodeGUIDCount(ptr::null_mut(), &mut guid_count), OK);
    assert_eq!(guid_count, 0xdead_beef);

    let mut preset_count: u32 = 7;
    assert_eq!(
        NvEncGetEncodePresetCount(ptr::null_mut(), NV_ENC_CODEC_HEVC_GUID, &mut preset_count),
        OK
    );
    assert_eq!(preset_count, 7);

    let mut caps_val: c_int = -17;
    assert_eq!(
        NvEncGetEncodeCaps(ptr::null_mut(), NV_ENC_CODEC_H264_GUID, ptr::null_mut(), &mut caps_val),
        OK
    );
    assert_eq!(caps_val, -17);

    let mut version: u32 = u32::MAX;
    assert_eq!(NvEncodeAPIGetMaxSupportedVersion(&mut version), OK);
    assert_eq!(version, u32::MAX);
}

#[test]
fn guid_arrays_keep_their_caller_contents() {
    init_logging();

    let mut guids = [NV_ENC_CODEC_H264_GUID; 8];
    let mut returned: u32 = 99;
    assert_eq!(
        NvEncGetEncodeGUIDs(ptr::null_mut(), guids.as_mut_ptr(), guids.len() as u32, &mut returned),
        OK
    );
    assert_eq!(returned, 99);
    assert!(guids.iter().all(|g| *g == NV_ENC_CODEC_H264_GUID));
}

#[test]
fn create_instance_populates_nothing() {
    init_logging();

    let mut list = NV_ENCODE_API_FUNCTION_LIST::default();
    assert_eq!(NvEncodeAPICreateInstance(&mut list), OK);

    assert_eq!(list.version, NV_ENCODE_API_FUNCTION_LIST_VER);
    assert!(list.nvEncOpenEncodeSession.is_none());
    assert!(list.nvEncOpenEncodeSessionEx.is_none());
    assert!(list.nvEncEncodePicture.is_none());
    assert!(list.nvEncLockBitstream.is_none());
    assert!(list.nvEncGetLastErrorString.is_none());
    assert!(list.nvEncDestroyEncoder.is_none());
    assert!(list.reserved1.is_null());
    assert!(list.reserved2.iter().all(|p| p.is_null()));
}

#[test]
fn destroying_an_encoder_that_was_never_created_succeeds() {
    init_logging();

    assert_eq!(NvEncDestroyEncoder(ptr::null_mut()), OK);

    // A dangling-looking but valid address is just as acceptable; the stub
    // never dereferences the handle.
    let mut not_an_encoder = 0u64;
    let fake = &mut not_an_encoder as *mut u64 as *mut c_void;
    assert_eq!(NvEncDestroyEncoder(fake), OK);
    assert_eq!(not_an_encoder, 0);
}

#[test]
fn calls_succeed_in_any_order_and_repetition() {
    init_logging();

    // Teardown before setup, locks before creates: the stub enforces no
    // sequencing at all.
    for _ in 0..3 {
        assert_eq!(NvEncDestroyEncoder(ptr::null_mut()), OK);
        assert_eq!(NvEncUnlockBitstream(ptr::null_mut(), ptr::null_mut()), OK);
        assert_eq!(NvEncEncodePicture(ptr::null_mut(), ptr::null_mut()), OK);
        assert_eq!(NvEncInitializeEncoder(ptr::null_mut(), ptr::null_mut()), OK);
        assert_eq!(NvEncOpenEncodeSession(ptr::null_mut(), 1, ptr::null_mut()), OK);
    }
}

#[test]
fn concurrent_callers_observe_identical_behavior() {
    init_logging();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let mut count: u32 = 0x5151_5151;
                for _ in 0..64 {
                    assert_eq!(NvEncOpenEncodeSession(ptr::null_mut(), 1, ptr::null_mut()), OK);
                    assert_eq!(NvEncGetEncodeGUIDCount(ptr::null_mut(), &mut count), OK);
                    assert_eq!(NvEncEncodePicture(ptr::null_mut(), ptr::null_mut()), OK);
                    assert_eq!(NvEncDestroyEncoder(ptr::null_mut()), OK);
                }
                assert_eq!(count, 0x5151_5151);
            });
        }
    });
}

#[test]
fn statuses_convert_cleanly_for_rust_callers() {
    init_logging();

    let status = NvEncEncodePicture(ptr::null_mut(), ptr::null_mut());
    assert!(nvshim_core::check(status).is_ok());

    let status = NvEncodeAPIGetMaxSupportedVersion(ptr::null_mut());
    assert!(status.is_success());
}

#[test]
fn guid_parameters_are_accepted_by_value_without_inspection() {
    init_logging();

    // Even a nonsense GUID is fine; the stub never looks at it.
    let bogus = GUID::zeroed();
    let mut count: u32 = 3;
    assert_eq!(NvEncGetInputFormatCount(ptr::null_mut(), bogus, &mut count), OK);
    assert_eq!(count, 3);
}
