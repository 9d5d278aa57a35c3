//! Single-window wrapper over a native GLFW handle
//!
//! [`Window`] owns exactly one `GLFWwindow`. The native handle carries a
//! non-owning back-reference (its user pointer) to the window's callback
//! state so native events can find their sinks; the state lives in a heap
//! box, which keeps that address stable when the `Window` value itself is
//! moved. The back-reference is cleared before the handle is destroyed, so
//! an in-flight callback can never dereference freed state.
//!
//! Display modes are not stored as a field; they are realized by native
//! window attributes (monitor attachment, decoration, geometry), and every
//! mode switch re-derives what it needs from the live window.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::ffi::CString;
use std::os::raw::{c_float, c_int, c_void};
use std::ptr;

use glfw::ffi;

use crate::error::{Error, PlatformResult};
use crate::events::{
    CloseSink, ResizeEvent, ResizeGesture, ResizeSink, ScaleEvent, ScaleSink,
};
use crate::geometry::{best_overlap_index, Aspect, Pos, Rect, Scale, Size};

/// Display mode requested at creation or via the mode-switching calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    /// Decorated, movable window
    #[default]
    Windowed,
    /// Undecorated window covering one monitor's work area
    BorderlessFullscreen,
    /// Monitor-attached fullscreen at the display's native video mode
    ExclusiveFullscreen,
}

/// Window creation parameters, consumed once by [`Window::create`].
#[derive(Debug, Clone)]
pub struct WindowCreateInfo {
    /// Title-bar text
    pub title: String,
    /// Initial client-area size; overridden by the display's video mode in
    /// exclusive fullscreen
    pub size: Size,
    /// Minimum client-area size; `None` leaves the axis unconstrained
    pub min_size: Option<Size>,
    /// Maximum client-area size; `None` leaves the axis unconstrained
    pub max_size: Option<Size>,
    /// Aspect ratio constraint; `None` or an invalid ratio clears it
    pub aspect: Option<Aspect>,
    /// Initial display mode
    pub mode: WindowMode,
    /// Whether the window takes input focus when shown
    pub start_focused: bool,
}

impl Default for WindowCreateInfo {
    fn default() -> Self {
        Self {
            title: String::from("glfw_platform"),
            size: Size { w: 1280, h: 720 },
            min_size: None,
            max_size: None,
            aspect: None,
            mode: WindowMode::Windowed,
            start_focused: true,
        }
    }
}

/// Callback-visible state, heap-allocated so its address survives moves of
/// the owning [`Window`]. The native user pointer points here.
struct WindowState {
    /// Null once the window is destroyed; never becomes non-null again.
    handle: Cell<*mut ffi::GLFWwindow>,
    gesture: RefCell<ResizeGesture>,
    on_resize: RefCell<Option<ResizeSink>>,
    on_scale: RefCell<Option<ScaleSink>>,
    on_close: RefCell<Option<CloseSink>>,
    user_data: RefCell<Option<Box<dyn Any>>>,
}

impl WindowState {
    fn new(handle: *mut ffi::GLFWwindow) -> Self {
        Self {
            handle: Cell::new(handle),
            gesture: RefCell::new(ResizeGesture::new()),
            on_resize: RefCell::new(None),
            on_scale: RefCell::new(None),
            on_close: RefCell::new(None),
            user_data: RefCell::new(None),
        }
    }

    // Sinks are taken out of their slot for the duration of the call, so a
    // sink that reaches back into the window cannot alias a live borrow. The
    // slot is only restored if the sink did not replace itself meanwhile.
    fn emit_resize(&self, event: ResizeEvent) {
        let taken = self.on_resize.borrow_mut().take();
        if let Some(mut sink) = taken {
            sink(event);
            let mut slot = self.on_resize.borrow_mut();
            if slot.is_none() {
                *slot = Some(sink);
            }
        }
    }

    fn emit_scale(&self, event: ScaleEvent) {
        let taken = self.on_scale.borrow_mut().take();
        if let Some(mut sink) = taken {
            sink(event);
            let mut slot = self.on_scale.borrow_mut();
            if slot.is_none() {
                *slot = Some(sink);
            }
        }
    }

    fn emit_close(&self) -> bool {
        let taken = self.on_close.borrow_mut().take();
        taken.map_or(true, |mut sink| {
            let allow = sink();
            let mut slot = self.on_close.borrow_mut();
            if slot.is_none() {
                *slot = Some(sink);
            }
            allow
        })
    }
}

/// Recover the callback state behind a native handle.
///
/// Returns `None` once the back-reference has been cleared (window being
/// destroyed), which makes any late callback a no-op.
unsafe fn state_from(window: *mut ffi::GLFWwindow) -> Option<&'static WindowState> {
    // SAFETY: the user pointer is either null or points at the boxed
    // WindowState whose owning Window is still alive; it is cleared before
    // the box can be dropped. The 'static is bounded in practice by the
    // extent of the callback invocation.
    unsafe { ffi::glfwGetWindowUserPointer(window).cast::<WindowState>().as_ref() }
}

fn query_size(window: *mut ffi::GLFWwindow) -> Size {
    let (mut w, mut h) = (0, 0);
    // SAFETY: only called with a live handle from the main thread.
    unsafe { ffi::glfwGetWindowSize(window, &mut w, &mut h) };
    Size { w, h }
}

fn query_framebuffer_size(window: *mut ffi::GLFWwindow) -> Size {
    let (mut w, mut h) = (0, 0);
    // SAFETY: only called with a live handle from the main thread.
    unsafe { ffi::glfwGetFramebufferSize(window, &mut w, &mut h) };
    Size { w, h }
}

fn query_position(window: *mut ffi::GLFWwindow) -> Pos {
    let (mut x, mut y) = (0, 0);
    // SAFETY: only called with a live handle from the main thread.
    unsafe { ffi::glfwGetWindowPos(window, &mut x, &mut y) };
    Pos { x, y }
}

fn monitor_work_area(monitor: *mut ffi::GLFWmonitor) -> Rect {
    let (mut x, mut y, mut w, mut h) = (0, 0, 0, 0);
    // SAFETY: monitor handles stay valid until the configuration changes,
    // which only happens inside poll_events.
    unsafe { ffi::glfwGetMonitorWorkarea(monitor, &mut x, &mut y, &mut w, &mut h) };
    Rect { x, y, w, h }
}

/// Monitor whose work area overlaps the window the most.
///
/// Evaluated fresh on every mode switch since the window may have moved.
/// Falls back to the primary monitor when enumeration yields nothing.
fn pick_monitor_for(window: *mut ffi::GLFWwindow) -> *mut ffi::GLFWmonitor {
    let pos = query_position(window);
    let size = query_size(window);
    let bounds = Rect { x: pos.x, y: pos.y, w: size.w, h: size.h };

    let mut count = 0;
    // SAFETY: GLFW owns the returned array; it is valid until the monitor
    // configuration changes, and we copy out of it immediately.
    let monitors = unsafe { ffi::glfwGetMonitors(&mut count) };
    if monitors.is_null() || count <= 0 {
        return unsafe { ffi::glfwGetPrimaryMonitor() };
    }
    let monitors = unsafe { std::slice::from_raw_parts(monitors, count as usize) };

    let areas: Vec<Rect> = monitors.iter().map(|&m| monitor_work_area(m)).collect();
    best_overlap_index(bounds, &areas).map_or_else(
        || unsafe { ffi::glfwGetPrimaryMonitor() },
        |index| monitors[index],
    )
}

// Native callbacks. Registered once at creation and left in place for the
// window's entire lifetime; they bail out as soon as the back-reference is
// gone.

extern "C" fn window_size_callback(window: *mut ffi::GLFWwindow, width: c_int, height: c_int) {
    let Some(state) = (unsafe { state_from(window) }) else {
        return;
    };
    let phases = state.gesture.borrow_mut().on_logical_size();
    if phases.is_empty() {
        return;
    }
    let framebuffer = query_framebuffer_size(window);
    let logical = Size { w: width, h: height };
    for &phase in phases {
        state.emit_resize(ResizeEvent { logical, framebuffer, phase });
    }
}

extern "C" fn framebuffer_size_callback(window: *mut ffi::GLFWwindow, width: c_int, height: c_int) {
    let Some(state) = (unsafe { state_from(window) }) else {
        return;
    };
    let phases = state.gesture.borrow_mut().on_framebuffer_size();
    if phases.is_empty() {
        return;
    }
    let logical = query_size(window);
    let framebuffer = Size { w: width, h: height };
    for &phase in phases {
        state.emit_resize(ResizeEvent { logical, framebuffer, phase });
    }
}

extern "C" fn content_scale_callback(window: *mut ffi::GLFWwindow, x: c_float, y: c_float) {
    if let Some(state) = unsafe { state_from(window) } {
        state.emit_scale(ScaleEvent { scale: Scale { x, y } });
    }
}

extern "C" fn close_callback(window: *mut ffi::GLFWwindow) {
    if let Some(state) = unsafe { state_from(window) } {
        if !state.emit_close() {
            // Vetoed: reverse the native should-close flag within the same
            // poll cycle.
            unsafe { ffi::glfwSetWindowShouldClose(window, ffi::FALSE) };
        }
    }
}

/// One on-screen window with exclusive ownership of its native handle.
///
/// Move-only by construction, and `!Send`/`!Sync` through the raw handle,
/// matching the single-threaded event model. After [`Window::close_now`]
/// the handle is null and every operation degrades to a safe no-op or a
/// neutral default.
pub struct Window {
    state: Box<WindowState>,
}

impl Window {
    /// Create a window from `info`.
    ///
    /// The window is created with no client graphics API; binding a
    /// rendering context to it is the embedder's job. Borderless and
    /// exclusive fullscreen modes are applied as part of creation.
    ///
    /// # Errors
    ///
    /// [`Error::WindowCreationFailed`] when GLFW returns a null handle,
    /// [`Error::InvalidValue`] when the title contains an interior NUL.
    pub fn create(info: &WindowCreateInfo) -> PlatformResult<Self> {
        let title = CString::new(info.title.as_str()).map_err(|_| Error::InvalidValue)?;

        // SAFETY: hint calls require init and the main thread, both part of
        // this crate's usage contract.
        unsafe {
            ffi::glfwDefaultWindowHints();
            ffi::glfwWindowHint(ffi::CLIENT_API, ffi::NO_API);
            ffi::glfwWindowHint(
                ffi::FOCUS_ON_SHOW,
                if info.start_focused { ffi::TRUE } else { ffi::FALSE },
            );
        }

        let mut size = info.size;
        let mut creation_monitor = ptr::null_mut();
        if info.mode == WindowMode::ExclusiveFullscreen {
            // SAFETY: main thread, post-init.
            creation_monitor = unsafe { ffi::glfwGetPrimaryMonitor() };
            if !creation_monitor.is_null() {
                // SAFETY: the vidmode pointer is valid until the monitor is
                // disconnected; we copy the fields out immediately.
                if let Some(mode) = unsafe { ffi::glfwGetVideoMode(creation_monitor).as_ref() } {
                    size = Size { w: mode.width, h: mode.height };
                }
            }
        }

        // SAFETY: title is a valid C string for the duration of the call.
        let handle = unsafe {
            ffi::glfwCreateWindow(size.w, size.h, title.as_ptr(), creation_monitor, ptr::null_mut())
        };
        if handle.is_null() {
            return Err(Error::WindowCreationFailed);
        }

        let mut window = Self { state: Box::new(WindowState::new(handle)) };

        // Wire the back-reference before any further configuration; the
        // calls below may already fire callbacks.
        // SAFETY: the boxed state outlives the handle, and the pointer is
        // cleared again before the handle is destroyed.
        unsafe {
            let state_ptr: *const WindowState = &*window.state;
            ffi::glfwSetWindowUserPointer(handle, state_ptr.cast_mut().cast::<c_void>());
        }

        window.set_size_limits(info.min_size, info.max_size);
        window.set_aspect_ratio(info.aspect);

        // SAFETY: handle is live; the callbacks stay registered for the
        // window's whole lifetime.
        unsafe {
            ffi::glfwSetWindowSizeCallback(handle, Some(window_size_callback));
            ffi::glfwSetFramebufferSizeCallback(handle, Some(framebuffer_size_callback));
            ffi::glfwSetWindowContentScaleCallback(handle, Some(content_scale_callback));
            ffi::glfwSetWindowCloseCallback(handle, Some(close_callback));
        }

        // Borderless needs the window's post-creation position, so it runs
        // as a transition rather than a creation hint.
        if info.mode == WindowMode::BorderlessFullscreen {
            if let Err(err) = window.set_borderless_fullscreen() {
                log::warn!("borderless transition failed during creation: {err}");
            }
        }

        log::debug!("created window {}x{} (mode {:?})", size.w, size.h, info.mode);
        Ok(window)
    }

    fn raw(&self) -> *mut ffi::GLFWwindow {
        self.state.handle.get()
    }

    // ---- event sinks ----

    /// Register the resize sink, replacing any previous one.
    pub fn set_resize_sink(&mut self, sink: impl FnMut(ResizeEvent) + 'static) {
        *self.state.on_resize.borrow_mut() = Some(Box::new(sink));
    }

    /// Register the content-scale sink, replacing any previous one.
    pub fn set_scale_sink(&mut self, sink: impl FnMut(ScaleEvent) + 'static) {
        *self.state.on_scale.borrow_mut() = Some(Box::new(sink));
    }

    /// Register the close sink, replacing any previous one.
    ///
    /// The sink returns `true` to let a close request proceed, `false` to
    /// veto it. With no sink registered, close requests proceed.
    pub fn set_close_sink(&mut self, sink: impl FnMut() -> bool + 'static) {
        *self.state.on_close.borrow_mut() = Some(Box::new(sink));
    }

    /// Remove all registered sinks.
    pub fn clear_sinks(&mut self) {
        *self.state.on_resize.borrow_mut() = None;
        *self.state.on_scale.borrow_mut() = None;
        *self.state.on_close.borrow_mut() = None;
    }

    // ---- embedder data ----

    /// Attach opaque embedder data to this window.
    pub fn set_user_data(&mut self, data: Box<dyn Any>) {
        *self.state.user_data.borrow_mut() = Some(data);
    }

    /// Detach and return the embedder data, if any.
    pub fn take_user_data(&mut self) -> Option<Box<dyn Any>> {
        self.state.user_data.borrow_mut().take()
    }

    // ---- basic controls ----

    /// Make the window visible.
    pub fn show(&self) {
        let handle = self.raw();
        if !handle.is_null() {
            // SAFETY: live handle, main thread.
            unsafe { ffi::glfwShowWindow(handle) };
        }
    }

    /// Hide the window.
    pub fn hide(&self) {
        let handle = self.raw();
        if !handle.is_null() {
            // SAFETY: live handle, main thread.
            unsafe { ffi::glfwHideWindow(handle) };
        }
    }

    /// Bring the window to front and give it input focus.
    pub fn focus(&self) {
        let handle = self.raw();
        if !handle.is_null() {
            // SAFETY: live handle, main thread.
            unsafe { ffi::glfwFocusWindow(handle) };
        }
    }

    /// Ask the system to highlight the window for the user's attention.
    pub fn request_attention(&self) {
        let handle = self.raw();
        if !handle.is_null() {
            // SAFETY: live handle, main thread.
            unsafe { ffi::glfwRequestWindowAttention(handle) };
        }
    }

    /// Minimize the window.
    pub fn iconify(&self) {
        let handle = self.raw();
        if !handle.is_null() {
            // SAFETY: live handle, main thread.
            unsafe { ffi::glfwIconifyWindow(handle) };
        }
    }

    /// Restore the window from an iconified or maximized state.
    pub fn restore(&self) {
        let handle = self.raw();
        if !handle.is_null() {
            // SAFETY: live handle, main thread.
            unsafe { ffi::glfwRestoreWindow(handle) };
        }
    }

    /// Maximize the window.
    pub fn maximize(&self) {
        let handle = self.raw();
        if !handle.is_null() {
            // SAFETY: live handle, main thread.
            unsafe { ffi::glfwMaximizeWindow(handle) };
        }
    }

    // ---- lifecycle ----

    /// Whether a close has been requested and not vetoed.
    ///
    /// A destroyed window reports `true`.
    #[must_use]
    pub fn should_close(&self) -> bool {
        let handle = self.raw();
        if handle.is_null() {
            return true;
        }
        // SAFETY: live handle, main thread.
        unsafe { ffi::glfwWindowShouldClose(handle) == ffi::TRUE }
    }

    /// Set or clear the native should-close flag.
    pub fn set_should_close(&mut self, value: bool) {
        let handle = self.raw();
        if !handle.is_null() {
            // SAFETY: live handle, main thread.
            unsafe {
                ffi::glfwSetWindowShouldClose(handle, if value { ffi::TRUE } else { ffi::FALSE });
            }
        }
    }

    /// Destroy the native window immediately instead of waiting for drop.
    ///
    /// Clears the back-reference first so no late callback can reach the
    /// state, then destroys the handle. Idempotent; the handle never
    /// becomes non-null again.
    pub fn close_now(&mut self) {
        let handle = self.state.handle.replace(ptr::null_mut());
        if handle.is_null() {
            return;
        }
        // SAFETY: we hold the only owning reference to this handle; the
        // user pointer is cleared before destruction so in-flight callback
        // dispatch finds nothing.
        unsafe {
            ffi::glfwSetWindowUserPointer(handle, ptr::null_mut());
            ffi::glfwDestroyWindow(handle);
        }
    }

    // ---- geometry / DPI ----

    /// Window position in screen coordinates; `{0,0}` once destroyed.
    #[must_use]
    pub fn position(&self) -> Pos {
        let handle = self.raw();
        if handle.is_null() {
            return Pos::default();
        }
        query_position(handle)
    }

    /// Move the window's top-left corner to `pos`.
    pub fn set_position(&mut self, pos: Pos) {
        let handle = self.raw();
        if !handle.is_null() {
            // SAFETY: live handle, main thread.
            unsafe { ffi::glfwSetWindowPos(handle, pos.x, pos.y) };
        }
    }

    /// Client-area size in screen coordinates; `{0,0}` once destroyed.
    #[must_use]
    pub fn size(&self) -> Size {
        let handle = self.raw();
        if handle.is_null() {
            return Size::default();
        }
        query_size(handle)
    }

    /// Resize the client area and synthesize one full resize gesture.
    ///
    /// Emits exactly one Begin/Step/End triplet carrying `size` and the
    /// post-resize framebuffer size, regardless of how many native
    /// callbacks the platform fires underneath; those are suppressed by the
    /// gesture guard.
    pub fn set_size(&mut self, size: Size) {
        let handle = self.raw();
        if handle.is_null() {
            return;
        }

        self.state.gesture.borrow_mut().begin_synthetic();
        // SAFETY: live handle, main thread.
        unsafe { ffi::glfwSetWindowSize(handle, size.w, size.h) };

        let framebuffer = query_framebuffer_size(handle);
        for phase in ResizeGesture::synthetic_phases() {
            self.state.emit_resize(ResizeEvent { logical: size, framebuffer, phase });
        }
        self.state.gesture.borrow_mut().finish_synthetic();
    }

    /// Framebuffer size in pixels; `{0,0}` once destroyed.
    #[must_use]
    pub fn framebuffer_size(&self) -> Size {
        let handle = self.raw();
        if handle.is_null() {
            return Size::default();
        }
        query_framebuffer_size(handle)
    }

    /// Content scale factors; `{1.0,1.0}` once destroyed.
    #[must_use]
    pub fn content_scale(&self) -> Scale {
        let handle = self.raw();
        if handle.is_null() {
            return Scale::default();
        }
        let (mut x, mut y) = (1.0, 1.0);
        // SAFETY: live handle, main thread.
        unsafe { ffi::glfwGetWindowContentScale(handle, &mut x, &mut y) };
        Scale { x, y }
    }

    /// Constrain the client-area size.
    ///
    /// `None`, or any non-positive component, leaves that limit
    /// unconstrained (the native don't-care sentinel, not zero).
    pub fn set_size_limits(&mut self, min: Option<Size>, max: Option<Size>) {
        let handle = self.raw();
        if handle.is_null() {
            return;
        }
        let limit = |value: Option<Size>| {
            value.map_or((ffi::DONT_CARE, ffi::DONT_CARE), |s| {
                (
                    if s.w > 0 { s.w } else { ffi::DONT_CARE },
                    if s.h > 0 { s.h } else { ffi::DONT_CARE },
                )
            })
        };
        let (min_w, min_h) = limit(min);
        let (max_w, max_h) = limit(max);
        // SAFETY: live handle, main thread.
        unsafe { ffi::glfwSetWindowSizeLimits(handle, min_w, min_h, max_w, max_h) };
    }

    /// Constrain or clear the client-area aspect ratio.
    ///
    /// `None` and ratios with a non-positive component both clear the
    /// constraint explicitly.
    pub fn set_aspect_ratio(&mut self, aspect: Option<Aspect>) {
        let handle = self.raw();
        if handle.is_null() {
            return;
        }
        let (num, den) = match aspect {
            Some(a) if a.is_valid() => (a.num, a.den),
            _ => (ffi::DONT_CARE, ffi::DONT_CARE),
        };
        // SAFETY: live handle, main thread.
        unsafe { ffi::glfwSetWindowAspectRatio(handle, num, den) };
    }

    /// Replace the title-bar text. Titles with interior NULs are ignored.
    pub fn set_title(&mut self, title: &str) {
        let handle = self.raw();
        if handle.is_null() {
            return;
        }
        if let Ok(title) = CString::new(title) {
            // SAFETY: live handle; title is a valid C string for the call.
            unsafe { ffi::glfwSetWindowTitle(handle, title.as_ptr()) };
        }
    }

    // ---- mode switching ----

    /// Switch to windowed mode.
    ///
    /// Detaches from any monitor at the current geometry and restores the
    /// window decoration. Cannot fail distinguishably at this layer.
    ///
    /// # Errors
    ///
    /// Always `Ok`; the `Result` keeps the mode-switch surface uniform.
    pub fn set_windowed(&mut self) -> PlatformResult<()> {
        let handle = self.raw();
        if handle.is_null() {
            return Ok(());
        }

        let size = query_size(handle);
        let pos = query_position(handle);
        // SAFETY: live handle, main thread.
        unsafe {
            ffi::glfwSetWindowMonitor(handle, ptr::null_mut(), pos.x, pos.y, size.w, size.h, 0);
            ffi::glfwSetWindowAttrib(handle, ffi::DECORATED, ffi::TRUE);
        }
        log::debug!("windowed mode at {},{} {}x{}", pos.x, pos.y, size.w, size.h);
        Ok(())
    }

    /// Switch to exclusive fullscreen on the best-fit monitor.
    ///
    /// Uses the monitor's current video mode: its native resolution and
    /// refresh rate, origin (0,0) in monitor space.
    ///
    /// # Errors
    ///
    /// [`Error::Platform`] when no monitor or no video mode is resolvable;
    /// the window's current mode is left untouched.
    pub fn set_exclusive_fullscreen(&mut self) -> PlatformResult<()> {
        let handle = self.raw();
        if handle.is_null() {
            return Ok(());
        }

        let monitor = pick_monitor_for(handle);
        if monitor.is_null() {
            return Err(Error::Platform);
        }
        // SAFETY: monitor is live; the vidmode fields are copied before any
        // further native call.
        let Some((width, height, refresh)) = (unsafe {
            ffi::glfwGetVideoMode(monitor)
                .as_ref()
                .map(|m| (m.width, m.height, m.refreshRate))
        }) else {
            return Err(Error::Platform);
        };

        // SAFETY: live handle, main thread.
        unsafe { ffi::glfwSetWindowMonitor(handle, monitor, 0, 0, width, height, refresh) };
        log::debug!("exclusive fullscreen {width}x{height}@{refresh}");
        Ok(())
    }

    /// Switch to borderless fullscreen on the best-fit monitor.
    ///
    /// Strips decoration and covers exactly the monitor's work area, not
    /// its full bounds, so OS-reserved regions (taskbars, menu bars) stay
    /// visible.
    ///
    /// # Errors
    ///
    /// [`Error::Platform`] when no monitor is resolvable at all; the
    /// window's current mode is left untouched.
    pub fn set_borderless_fullscreen(&mut self) -> PlatformResult<()> {
        let handle = self.raw();
        if handle.is_null() {
            return Ok(());
        }

        let mut monitor = pick_monitor_for(handle);
        if monitor.is_null() {
            // SAFETY: main thread, post-init.
            monitor = unsafe { ffi::glfwGetPrimaryMonitor() };
        }
        if monitor.is_null() {
            return Err(Error::Platform);
        }

        let area = monitor_work_area(monitor);
        // SAFETY: live handle, main thread.
        unsafe {
            ffi::glfwSetWindowAttrib(handle, ffi::DECORATED, ffi::FALSE);
            ffi::glfwSetWindowMonitor(handle, ptr::null_mut(), area.x, area.y, area.w, area.h, 0);
        }
        log::debug!(
            "borderless fullscreen over work area {},{} {}x{}",
            area.x, area.y, area.w, area.h
        );
        Ok(())
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.close_now();
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("handle", &self.raw())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_info_defaults_are_windowed_and_unconstrained() {
        let info = WindowCreateInfo::default();
        assert_eq!(info.mode, WindowMode::Windowed);
        assert_eq!(info.size, Size { w: 1280, h: 720 });
        assert!(info.min_size.is_none());
        assert!(info.max_size.is_none());
        assert!(info.aspect.is_none());
        assert!(info.start_focused);
    }

    #[test]
    fn test_window_mode_default_is_windowed() {
        assert_eq!(WindowMode::default(), WindowMode::Windowed);
    }

    #[test]
    fn test_emit_close_defaults_to_allow() {
        let state = WindowState::new(std::ptr::null_mut());
        assert!(state.emit_close());
    }

    #[test]
    fn test_emit_close_reports_veto() {
        let state = WindowState::new(std::ptr::null_mut());
        *state.on_close.borrow_mut() = Some(Box::new(|| false));
        assert!(!state.emit_close());
        // The sink survives dispatch and vetoes again.
        assert!(!state.emit_close());
    }

    #[test]
    fn test_emit_resize_restores_sink_after_dispatch() {
        use std::cell::Cell;
        use std::rc::Rc;

        let state = WindowState::new(std::ptr::null_mut());
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        *state.on_resize.borrow_mut() = Some(Box::new(move |_| {
            counter.set(counter.get() + 1);
        }));

        let event = ResizeEvent {
            logical: Size { w: 640, h: 480 },
            framebuffer: Size { w: 1280, h: 960 },
            phase: crate::events::ResizePhase::Step,
        };
        state.emit_resize(event);
        state.emit_resize(event);
        assert_eq!(hits.get(), 2);
    }
}
