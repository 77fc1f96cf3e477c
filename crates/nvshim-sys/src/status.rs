//! Status codes shared by every NVENC entry point.

/// Return code of the NvEncodeAPI interface.
///
/// Discriminants are fixed by the vendor ABI and must not be reordered.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NVENCSTATUS {
    NV_ENC_SUCCESS = 0,
    NV_ENC_ERR_NO_ENCODE_DEVICE = 1,
    NV_ENC_ERR_UNSUPPORTED_DEVICE = 2,
    NV_ENC_ERR_INVALID_ENCODERDEVICE = 3,
    NV_ENC_ERR_INVALID_DEVICE = 4,
    NV_ENC_ERR_DEVICE_NOT_EXIST = 5,
    NV_ENC_ERR_INVALID_PTR = 6,
    NV_ENC_ERR_INVALID_EVENT = 7,
    NV_ENC_ERR_INVALID_PARAM = 8,
    NV_ENC_ERR_INVALID_CALL = 9,
    NV_ENC_ERR_OUT_OF_MEMORY = 10,
    NV_ENC_ERR_ENCODER_NOT_INITIALIZED = 11,
    NV_ENC_ERR_UNSUPPORTED_PARAM = 12,
    NV_ENC_ERR_LOCK_BUSY = 13,
    NV_ENC_ERR_NOT_ENOUGH_BUFFER = 14,
    NV_ENC_ERR_INVALID_VERSION = 15,
    NV_ENC_ERR_MAP_FAILED = 16,
    NV_ENC_ERR_NEED_MORE_INPUT = 17,
    NV_ENC_ERR_ENCODER_BUSY = 18,
    // The vendor header misspells "registered" here; the name is ABI.
    NV_ENC_ERR_EVENT_NOT_REGISTERD = 19,
    NV_ENC_ERR_GENERIC = 20,
    NV_ENC_ERR_INCOMPATIBLE_CLIENT_KEY = 21,
    NV_ENC_ERR_UNIMPLEMENTED = 22,
    NV_ENC_ERR_RESOURCE_REGISTER_FAILED = 23,
    NV_ENC_ERR_RESOURCE_NOT_REGISTERED = 24,
    NV_ENC_ERR_RESOURCE_NOT_MAPPED = 25,
    NV_ENC_ERR_NEED_MORE_OUTPUT = 26,
}

impl NVENCSTATUS {
    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::NV_ENC_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_a_c_enum() {
        assert_eq!(std::mem::size_of::<NVENCSTATUS>(), 4);
    }

    #[test]
    fn discriminants_match_the_vendor_abi() {
        assert_eq!(NVENCSTATUS::NV_ENC_SUCCESS as u32, 0);
        assert_eq!(NVENCSTATUS::NV_ENC_ERR_INVALID_PTR as u32, 6);
        assert_eq!(NVENCSTATUS::NV_ENC_ERR_ENCODER_BUSY as u32, 18);
        assert_eq!(NVENCSTATUS::NV_ENC_ERR_NEED_MORE_OUTPUT as u32, 26);
    }

    #[test]
    fn only_zero_is_success() {
        assert!(NVENCSTATUS::NV_ENC_SUCCESS.is_success());
        assert!(!NVENCSTATUS::NV_ENC_ERR_GENERIC.is_success());
    }
}
