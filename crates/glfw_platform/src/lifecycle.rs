//! Process-wide GLFW lifecycle
//!
//! Thin wrapper around `glfwInit`/`glfwTerminate`/`glfwPollEvents`, plus the
//! one-time registration of the error callback. All of this is
//! single-threaded by contract: [`poll_events`] is the only point where
//! queued native events are drained and window sinks are invoked.

use glfw::ffi;

use crate::error::{self, Error, PlatformResult};

/// Initialize GLFW and register the global error callback.
///
/// Must succeed before any [`crate::Window`] is created. Calling it while
/// already initialized follows GLFW's own idempotence and succeeds as a
/// no-op.
///
/// # Errors
///
/// Returns the error captured by the native callback during the failed
/// initialization, or [`Error::NotInitialized`] when the callback recorded
/// nothing.
pub fn init() -> PlatformResult<()> {
    // SAFETY: registering the callback and initializing have no
    // preconditions; both are called from the main thread per this crate's
    // single-threaded contract.
    unsafe {
        ffi::glfwSetErrorCallback(Some(error::error_callback));
        if ffi::glfwInit() == ffi::TRUE {
            log::debug!("GLFW initialized");
            return Ok(());
        }
    }

    let err = match error::last_error() {
        Error::None => Error::NotInitialized,
        captured => captured,
    };
    log::error!("GLFW initialization failed: {err}");
    Err(err)
}

/// Tear down GLFW.
///
/// Invalidates the native resources behind every window created since
/// [`init`]; destroy all [`crate::Window`] values before calling this.
pub fn shutdown() {
    log::debug!("terminating GLFW");
    // SAFETY: glfwTerminate is safe to call even when init failed or never
    // ran; it is a no-op in that case.
    unsafe {
        ffi::glfwTerminate();
    }
}

/// Drain the native event queue without blocking.
///
/// Synchronously invokes the registered window sinks for every pending
/// event before returning. This is the sole dispatch point; no callback is
/// ever delivered outside this call.
pub fn poll_events() {
    // SAFETY: main-thread only, per the crate's concurrency contract.
    unsafe {
        ffi::glfwPollEvents();
    }
}
