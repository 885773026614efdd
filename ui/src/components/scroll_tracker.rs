use dioxus::prelude::*;
use futures::StreamExt;

use crate::core::scroll::ScrollState;

/// Navbar scroll state, refreshed at most once per animation frame while the
/// calling component is mounted. Stays at the default off the web.
pub fn use_scroll_tracker() -> Signal<ScrollState> {
    let mut state = use_signal(ScrollState::default);

    // Measurements arrive from a JS callback; the coroutine applies them inside
    // the Dioxus runtime and skips unchanged values to avoid re-renders.
    let tracker = use_coroutine(move |mut rx: UnboundedReceiver<ScrollState>| async move {
        while let Some(next) = rx.next().await {
            if *state.peek() != next {
                state.set(next);
            }
        }
    });

    #[cfg(target_arch = "wasm32")]
    {
        let listener = use_hook(move || std::rc::Rc::new(web::ScrollListener::install(tracker.tx())));
        use_drop(move || {
            if let Some(listener) = listener.as_ref() {
                listener.detach();
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = tracker;

    state
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures_channel::mpsc::UnboundedSender;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use crate::core::platform;
    use crate::core::scroll::{self, FrameThrottle, ScrollState};

    pub(super) struct ScrollListener {
        window: web_sys::Window,
        on_scroll: Closure<dyn FnMut()>,
    }

    impl ScrollListener {
        pub(super) fn install(tx: UnboundedSender<ScrollState>) -> Option<Self> {
            let window = web_sys::window()?;
            let throttle = Rc::new(RefCell::new(FrameThrottle::default()));

            let on_frame = {
                let throttle = throttle.clone();
                Rc::new(Closure::<dyn FnMut()>::new(move || {
                    throttle.borrow_mut().frame_ran();
                    let state = scroll::evaluate(platform::scroll_offset(), |section| {
                        platform::element_rect(section.anchor())
                    });
                    let _ = tx.unbounded_send(state);
                }))
            };

            let schedule = {
                let window = window.clone();
                move || {
                    if throttle.borrow_mut().request() {
                        if let Err(err) =
                            window.request_animation_frame((*on_frame).as_ref().unchecked_ref())
                        {
                            tracing::warn!(?err, "requestAnimationFrame failed");
                            throttle.borrow_mut().frame_ran();
                        }
                    }
                }
            };

            // Measure once so a reload mid-page highlights the right section.
            schedule();

            let on_scroll = Closure::<dyn FnMut()>::new(schedule);
            if let Err(err) =
                window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "could not attach scroll listener");
                return None;
            }

            Some(Self { window, on_scroll })
        }

        pub(super) fn detach(&self) {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        }
    }
}
