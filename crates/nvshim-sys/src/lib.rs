//! Hand-written C-compatible definitions for the NVENC encoder interface.
//!
//! Only the types that appear in an entry-point signature are defined.
//! Structures the interface passes exclusively by pointer are declared
//! opaque; their layout is owned by the vendor header and never inspected
//! on this side of the boundary.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

pub mod function_list;
pub mod guid;
pub mod status;
pub mod types;
pub mod version;

pub use function_list::*;
pub use guid::*;
pub use status::NVENCSTATUS;
pub use types::*;
pub use version::*;
