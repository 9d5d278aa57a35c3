//! Window demo application
//!
//! Opens a single window and logs every resize/scale/close event. Close
//! requests cycle the display mode: the first switches to borderless
//! fullscreen, the second back to windowed, and the third closes for real.

use std::cell::Cell;
use std::rc::Rc;

use glfw_platform::{lifecycle, Aspect, Size, Window, WindowCreateInfo, WindowMode};

fn main() -> Result<(), glfw_platform::Error> {
    env_logger::init();

    log::info!("initializing platform...");
    lifecycle::init()?;

    let info = WindowCreateInfo {
        title: String::from("glfw_platform demo"),
        size: Size { w: 960, h: 540 },
        min_size: Some(Size { w: 320, h: 180 }),
        aspect: Some(Aspect { num: 16, den: 9 }),
        mode: WindowMode::Windowed,
        ..WindowCreateInfo::default()
    };

    let mut window = Window::create(&info)?;
    log::info!(
        "window created: size {:?}, framebuffer {:?}, scale {:?}",
        window.size(),
        window.framebuffer_size(),
        window.content_scale()
    );

    window.set_resize_sink(|event| {
        log::info!(
            "resize {:?}: logical {}x{}, framebuffer {}x{}",
            event.phase,
            event.logical.w,
            event.logical.h,
            event.framebuffer.w,
            event.framebuffer.h
        );
    });
    window.set_scale_sink(|event| {
        log::info!("content scale changed: {}x{}", event.scale.x, event.scale.y);
    });

    let close_requests = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&close_requests);
    window.set_close_sink(move || {
        let seen = counter.get() + 1;
        counter.set(seen);
        log::info!("close request #{seen}");
        seen >= 3
    });

    let mut handled_requests = 0;
    while !window.should_close() {
        lifecycle::poll_events();

        let seen = close_requests.get();
        if seen != handled_requests {
            handled_requests = seen;
            let result = match seen {
                1 => {
                    log::info!("switching to borderless fullscreen");
                    window.set_borderless_fullscreen()
                }
                2 => {
                    log::info!("switching back to windowed");
                    window.set_windowed()
                }
                _ => Ok(()),
            };
            if let Err(err) = result {
                log::warn!("mode switch failed: {err} (last native error: {})", glfw_platform::last_error());
            }
        }
    }

    log::info!("closing down");
    window.close_now();
    lifecycle::shutdown();
    Ok(())
}
