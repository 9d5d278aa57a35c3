//! Error taxonomy and native error capture
//!
//! GLFW reports failures through an error callback rather than return values,
//! so this module keeps two channels side by side: a closed [`Error`] enum
//! used by every fallible operation, and a thread-local "last seen" slot the
//! native callback writes into. The slot is a supplementary diagnostic for
//! calls with no natural failure return (geometry queries, attribute sets);
//! it is never a substitute for a per-call `Result`.

use std::cell::Cell;
use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

use glfw::ffi;
use thiserror::Error;

/// Platform layer errors
///
/// Closed mapping of GLFW's error codes. Codes this layer has no use for are
/// folded into their nearest neighbor (see [`map_error_code`]); codes it has
/// never heard of become [`Error::Unknown`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Error {
    /// No error has been observed
    #[default]
    #[error("no error")]
    None,

    /// The library was used before [`crate::lifecycle::init`] succeeded
    #[error("GLFW has not been initialized")]
    NotInitialized,

    /// An argument or enumerant was rejected by the native library
    #[error("invalid value passed to GLFW")]
    InvalidValue,

    /// The native library could not allocate memory
    #[error("GLFW ran out of memory")]
    OutOfMemory,

    /// A required native API or API version is missing on this system
    #[error("requested API is unavailable")]
    ApiUnavailable,

    /// A platform-specific failure with no more precise classification
    #[error("platform-specific GLFW error")]
    Platform,

    /// `glfwCreateWindow` returned a null handle
    #[error("window creation failed")]
    WindowCreationFailed,

    /// An error code this layer does not recognize
    #[error("unrecognized GLFW error")]
    Unknown,
}

/// Result alias used by every fallible operation in this crate.
pub type PlatformResult<T> = Result<T, Error>;

thread_local! {
    static LAST_ERROR: Cell<Error> = const { Cell::new(Error::None) };
}

/// Map a native GLFW error code onto the closed [`Error`] enum.
///
/// Total and deterministic: every code maps to exactly one variant, and
/// unmapped codes map to [`Error::Unknown`], never to [`Error::None`].
#[must_use]
pub fn map_error_code(code: c_int) -> Error {
    match code {
        // GLFW_NO_ERROR
        0 => Error::None,
        ffi::NOT_INITIALIZED => Error::NotInitialized,
        // Invalid enumerants are a caller bug of the same shape as invalid
        // values; fold them together.
        ffi::INVALID_ENUM | ffi::INVALID_VALUE => Error::InvalidValue,
        ffi::OUT_OF_MEMORY => Error::OutOfMemory,
        ffi::API_UNAVAILABLE | ffi::VERSION_UNAVAILABLE => Error::ApiUnavailable,
        ffi::PLATFORM_ERROR | ffi::FORMAT_UNAVAILABLE => Error::Platform,
        // Context-precondition misses: windows here are created with no
        // client API, so these only mean the API was never there to use.
        ffi::NO_CURRENT_CONTEXT | ffi::NO_WINDOW_CONTEXT => Error::ApiUnavailable,
        _ => Error::Unknown,
    }
}

/// Return and clear the thread-local last-seen error.
///
/// Clear-on-read: a second call with no intervening failure returns
/// [`Error::None`]. Only meaningful on the thread that ran the failing
/// operation.
pub fn last_error() -> Error {
    LAST_ERROR.with(|slot| slot.replace(Error::None))
}

pub(crate) fn record(error: Error) {
    LAST_ERROR.with(|slot| slot.set(error));
}

/// Native error callback registered once by [`crate::lifecycle::init`].
pub(crate) extern "C" fn error_callback(code: c_int, description: *const c_char) {
    let error = map_error_code(code);
    if description.is_null() {
        log::warn!("GLFW error {error:?} (code {code:#x})");
    } else {
        // SAFETY: GLFW hands the callback a valid UTF-8 C string that lives
        // for the duration of the call.
        let message = unsafe { CStr::from_ptr(description) }.to_string_lossy();
        log::warn!("GLFW error {error:?} (code {code:#x}): {message}");
    }
    record(error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_is_deterministic_for_known_codes() {
        assert_eq!(map_error_code(0), Error::None);
        assert_eq!(map_error_code(ffi::NOT_INITIALIZED), Error::NotInitialized);
        assert_eq!(map_error_code(ffi::OUT_OF_MEMORY), Error::OutOfMemory);
        assert_eq!(map_error_code(ffi::PLATFORM_ERROR), Error::Platform);
    }

    #[test]
    fn test_mapping_folds_related_codes() {
        assert_eq!(map_error_code(ffi::INVALID_ENUM), Error::InvalidValue);
        assert_eq!(map_error_code(ffi::INVALID_VALUE), Error::InvalidValue);
        assert_eq!(map_error_code(ffi::API_UNAVAILABLE), Error::ApiUnavailable);
        assert_eq!(map_error_code(ffi::VERSION_UNAVAILABLE), Error::ApiUnavailable);
        assert_eq!(map_error_code(ffi::FORMAT_UNAVAILABLE), Error::Platform);
        assert_eq!(map_error_code(ffi::NO_CURRENT_CONTEXT), Error::ApiUnavailable);
        assert_eq!(map_error_code(ffi::NO_WINDOW_CONTEXT), Error::ApiUnavailable);
    }

    #[test]
    fn test_unknown_codes_never_map_to_none() {
        assert_eq!(map_error_code(0x7FFF_0000), Error::Unknown);
        assert_eq!(map_error_code(-1), Error::Unknown);
    }

    #[test]
    fn test_last_error_clears_on_read() {
        record(Error::Platform);
        assert_eq!(last_error(), Error::Platform);
        assert_eq!(last_error(), Error::None);
    }
}
