use nvshim_sys::NVENCSTATUS;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EncodeError>;

/// Rust-side view of a non-success [`NVENCSTATUS`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeError {
    #[error("No encode-capable device detected")]
    NoEncodeDevice,

    #[error("Device is not supported")]
    UnsupportedDevice,

    #[error("Encoder device is not valid")]
    InvalidEncoderDevice,

    #[error("Device passed to the call is invalid")]
    InvalidDevice,

    #[error("Device no longer exists and must be reinitialized")]
    DeviceNotExist,

    #[error("Invalid pointer argument")]
    InvalidPtr,

    #[error("Invalid completion event")]
    InvalidEvent,

    #[error("Invalid parameter")]
    InvalidParam,

    #[error("Call made in the wrong sequence")]
    InvalidCall,

    #[error("Out of memory")]
    OutOfMemory,

    #[error("Encoder has not been initialized")]
    EncoderNotInitialized,

    #[error("Unsupported parameter")]
    UnsupportedParam,

    #[error("Output bitstream is locked; retry shortly")]
    LockBusy,

    #[error("Supplied buffer is too small")]
    NotEnoughBuffer,

    #[error("Invalid struct version")]
    InvalidVersion,

    #[error("Failed to map the input resource")]
    MapFailed,

    #[error("Encoder needs more input before producing output")]
    NeedMoreInput,

    #[error("Encoder is busy; retry shortly")]
    EncoderBusy,

    #[error("Completion event was not registered")]
    EventNotRegistered,

    #[error("Unknown internal error")]
    Generic,

    #[error("Feature not available for the current client key")]
    IncompatibleClientKey,

    #[error("Feature not implemented in this version")]
    Unimplemented,

    #[error("Failed to register the resource")]
    ResourceRegisterFailed,

    #[error("Resource was never registered")]
    ResourceNotRegistered,

    #[error("Resource was never mapped")]
    ResourceNotMapped,

    #[error("Encoder needs more output buffers")]
    NeedMoreOutput,
}

/// Map a raw status to `Ok(())` or the matching [`EncodeError`].
pub fn check(status: NVENCSTATUS) -> Result<()> {
    use NVENCSTATUS::*;

    Err(match status {
        NV_ENC_SUCCESS => return Ok(()),
        NV_ENC_ERR_NO_ENCODE_DEVICE => EncodeError::NoEncodeDevice,
        NV_ENC_ERR_UNSUPPORTED_DEVICE => EncodeError::UnsupportedDevice,
        NV_ENC_ERR_INVALID_ENCODERDEVICE => EncodeError::InvalidEncoderDevice,
        NV_ENC_ERR_INVALID_DEVICE => EncodeError::InvalidDevice,
        NV_ENC_ERR_DEVICE_NOT_EXIST => EncodeError::DeviceNotExist,
        NV_ENC_ERR_INVALID_PTR => EncodeError::InvalidPtr,
        NV_ENC_ERR_INVALID_EVENT => EncodeError::InvalidEvent,
        NV_ENC_ERR_INVALID_PARAM => EncodeError::InvalidParam,
        NV_ENC_ERR_INVALID_CALL => EncodeError::InvalidCall,
        NV_ENC_ERR_OUT_OF_MEMORY => EncodeError::OutOfMemory,
        NV_ENC_ERR_ENCODER_NOT_INITIALIZED => EncodeError::EncoderNotInitialized,
        NV_ENC_ERR_UNSUPPORTED_PARAM => EncodeError::UnsupportedParam,
        NV_ENC_ERR_LOCK_BUSY => EncodeError::LockBusy,
        NV_ENC_ERR_NOT_ENOUGH_BUFFER => EncodeError::NotEnoughBuffer,
        NV_ENC_ERR_INVALID_VERSION => EncodeError::InvalidVersion,
        NV_ENC_ERR_MAP_FAILED => EncodeError::MapFailed,
        NV_ENC_ERR_NEED_MORE_INPUT => EncodeError::NeedMoreInput,
        NV_ENC_ERR_ENCODER_BUSY => EncodeError::EncoderBusy,
        NV_ENC_ERR_EVENT_NOT_REGISTERD => EncodeError::EventNotRegistered,
        NV_ENC_ERR_GENERIC => EncodeError::Generic,
        NV_ENC_ERR_INCOMPATIBLE_CLIENT_KEY => EncodeError::IncompatibleClientKey,
        NV_ENC_ERR_UNIMPLEMENTED => EncodeError::Unimplemented,
        NV_ENC_ERR_RESOURCE_REGISTER_FAILED => EncodeError::ResourceRegisterFailed,
        NV_ENC_ERR_RESOURCE_NOT_REGISTERED => EncodeError::ResourceNotRegistered,
        NV_ENC_ERR_RESOURCE_NOT_MAPPED => EncodeError::ResourceNotMapped,
        NV_ENC_ERR_NEED_MORE_OUTPUT => EncodeError::NeedMoreOutput,
    })
}
