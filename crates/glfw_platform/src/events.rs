//! Phase-tagged window events and the resize gesture machine
//!
//! GLFW reports a resize as two independent callbacks: the logical window
//! size changes (possibly many times while the user drags), then the
//! framebuffer size lands once the OS finalizes it. Applications want one
//! coherent gesture instead, so this module folds both callbacks into a
//! single event stream tagged Begin/Step/End. The folding logic lives in
//! [`ResizeGesture`], a pure state machine with no FFI dependency, so the
//! ordering guarantees are directly testable.

use crate::geometry::{Scale, Size};

/// Position of a resize event within one continuous resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePhase {
    /// First event of a gesture
    Begin,
    /// Intermediate size change
    Step,
    /// Final event of a gesture
    End,
}

/// One resize notification delivered to the resize sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEvent {
    /// Window size in screen coordinates
    pub logical: Size,
    /// Framebuffer size in pixels
    pub framebuffer: Size,
    /// Where this event sits in the gesture
    pub phase: ResizePhase,
}

/// Content-scale notification, emitted standalone (never phase-tagged).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleEvent {
    /// New per-axis scale factors
    pub scale: Scale,
}

/// Application sink for resize gestures.
pub type ResizeSink = Box<dyn FnMut(ResizeEvent)>;

/// Application sink for content-scale changes.
pub type ScaleSink = Box<dyn FnMut(ScaleEvent)>;

/// Application sink for close requests; return `false` to veto the close.
pub type CloseSink = Box<dyn FnMut() -> bool>;

/// Tracks whether a resize gesture is open and whether the current size
/// change was caused by our own `set_size` call.
///
/// The `synthesizing` flag is the re-entrancy guard: a programmatic resize
/// emits its own Begin/Step/End triplet, and the native callbacks the
/// underlying `glfwSetWindowSize` fires must not add a second set.
#[derive(Debug, Default)]
pub(crate) struct ResizeGesture {
    resizing: bool,
    synthesizing: bool,
}

impl ResizeGesture {
    pub(crate) const fn new() -> Self {
        Self {
            resizing: false,
            synthesizing: false,
        }
    }

    /// Phases to emit for a native logical-size callback.
    ///
    /// Opens the gesture if none is in flight; the caller emits Begin with
    /// the live-queried framebuffer size, immediately followed by Step.
    pub(crate) fn on_logical_size(&mut self) -> &'static [ResizePhase] {
        if self.synthesizing {
            return &[];
        }
        if self.resizing {
            &[ResizePhase::Step]
        } else {
            self.resizing = true;
            &[ResizePhase::Begin, ResizePhase::Step]
        }
    }

    /// Phases to emit for a native framebuffer-size callback.
    ///
    /// Closes an open gesture with End; outside a gesture this is a
    /// standalone Step (a DPI-only framebuffer change with no logical-size
    /// callback preceding it).
    pub(crate) fn on_framebuffer_size(&mut self) -> &'static [ResizePhase] {
        if self.synthesizing {
            return &[];
        }
        if self.resizing {
            self.resizing = false;
            &[ResizePhase::End]
        } else {
            &[ResizePhase::Step]
        }
    }

    /// All three phases of a programmatic resize, emitted synchronously.
    pub(crate) const fn synthetic_phases() -> [ResizePhase; 3] {
        [ResizePhase::Begin, ResizePhase::Step, ResizePhase::End]
    }

    pub(crate) fn begin_synthetic(&mut self) {
        self.synthesizing = true;
        self.resizing = true;
    }

    pub(crate) fn finish_synthetic(&mut self) {
        self.synthesizing = false;
        self.resizing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ResizePhase::{Begin, End, Step};

    #[test]
    fn test_drag_gesture_orders_begin_steps_end() {
        let mut gesture = ResizeGesture::new();
        let mut emitted = Vec::new();

        // User drags: three logical-size callbacks, then the framebuffer
        // callback lands once the OS settles.
        emitted.extend_from_slice(gesture.on_logical_size());
        emitted.extend_from_slice(gesture.on_logical_size());
        emitted.extend_from_slice(gesture.on_logical_size());
        emitted.extend_from_slice(gesture.on_framebuffer_size());

        assert_eq!(emitted, vec![Begin, Step, Step, Step, End]);
    }

    #[test]
    fn test_framebuffer_only_change_is_standalone_step() {
        let mut gesture = ResizeGesture::new();
        // DPI change: framebuffer resizes with no logical-size callback.
        assert_eq!(gesture.on_framebuffer_size(), &[Step]);
        // No gesture was opened, so the next drag starts fresh.
        assert_eq!(gesture.on_logical_size(), &[Begin, Step]);
    }

    #[test]
    fn test_gesture_closes_and_can_reopen() {
        let mut gesture = ResizeGesture::new();
        assert_eq!(gesture.on_logical_size(), &[Begin, Step]);
        assert_eq!(gesture.on_framebuffer_size(), &[End]);
        assert_eq!(gesture.on_logical_size(), &[Begin, Step]);
        assert_eq!(gesture.on_framebuffer_size(), &[End]);
    }

    #[test]
    fn test_synthetic_gesture_suppresses_native_callbacks() {
        let mut gesture = ResizeGesture::new();
        gesture.begin_synthetic();

        // Whatever the platform fires underneath glfwSetWindowSize is
        // swallowed; only the synthetic triplet reaches the sink.
        assert!(gesture.on_logical_size().is_empty());
        assert!(gesture.on_framebuffer_size().is_empty());
        assert!(gesture.on_logical_size().is_empty());

        assert_eq!(ResizeGesture::synthetic_phases(), [Begin, Step, End]);

        gesture.finish_synthetic();
        assert_eq!(gesture.on_logical_size(), &[Begin, Step]);
    }
}
