//! # glfw_platform
//!
//! A single-window platform layer over GLFW: lifecycle management, geometry
//! queries, display-mode switching, and event dispatch.
//!
//! ## Features
//!
//! - **No client API**: windows are created without a graphics context, so
//!   any renderer can bind its own surface to them
//! - **Phase-tagged resizes**: GLFW's two independent size callbacks are
//!   folded into one Begin/Step/End gesture stream
//! - **Display modes**: windowed, borderless (work-area) fullscreen, and
//!   exclusive fullscreen with best-fit monitor selection
//! - **Closed error taxonomy**: every native error code maps onto one enum,
//!   with a clear-on-read diagnostic channel for void-returning calls
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glfw_platform::{lifecycle, Window, WindowCreateInfo};
//!
//! fn main() -> Result<(), glfw_platform::Error> {
//!     lifecycle::init()?;
//!
//!     let mut window = Window::create(&WindowCreateInfo::default())?;
//!     window.set_resize_sink(|event| {
//!         println!("{:?} -> {:?}", event.phase, event.framebuffer);
//!     });
//!
//!     while !window.should_close() {
//!         lifecycle::poll_events();
//!     }
//!
//!     window.close_now();
//!     lifecycle::shutdown();
//!     Ok(())
//! }
//! ```
//!
//! All of this is single-threaded and cooperative: [`lifecycle::poll_events`]
//! is the only point where sinks are invoked, and the thread-local error
//! channel is only meaningful on the thread that ran the failing call.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod error;
pub mod events;
pub mod geometry;
pub mod lifecycle;
pub mod window;

pub use error::{last_error, Error, PlatformResult};
pub use events::{ResizeEvent, ResizePhase, ScaleEvent};
pub use geometry::{Aspect, Pos, Rect, Scale, Size};
pub use window::{Window, WindowCreateInfo, WindowMode};
