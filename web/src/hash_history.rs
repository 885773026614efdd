//! Router history kept in the URL fragment (`#/route`), so the site can be
//! served as static files without server-side rewrites.

/// Maps a `location.hash` value to a router path. An empty fragment is `/`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn route_from_hash(hash: &str) -> String {
    let route = hash.strip_prefix('#').unwrap_or(hash);
    if route.starts_with('/') {
        route.to_string()
    } else {
        format!("/{route}")
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::HashHistory;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::sync::Arc;

    use dioxus::history::History;
    use dioxus::logger::tracing;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Event, Window};

    use super::route_from_hash;

    pub struct HashHistory {
        window: Window,
    }

    impl HashHistory {
        /// `None` outside a browser window.
        pub fn new() -> Option<Self> {
            web_sys::window().map(|window| Self { window })
        }

        fn navigate_history(&self, back: bool) {
            let result = self.window.history().and_then(|history| {
                if back {
                    history.back()
                } else {
                    history.forward()
                }
            });
            if let Err(err) = result {
                tracing::warn!(?err, back, "history navigation failed");
            }
        }
    }

    impl History for HashHistory {
        fn current_route(&self) -> String {
            let hash = self.window.location().hash().unwrap_or_default();
            route_from_hash(&hash)
        }

        fn current_prefix(&self) -> Option<String> {
            Some("#".to_string())
        }

        fn go_back(&self) {
            self.navigate_history(true);
        }

        fn go_forward(&self) {
            self.navigate_history(false);
        }

        fn push(&self, route: String) {
            if let Err(err) = self.window.location().set_hash(&route) {
                tracing::warn!(?err, %route, "failed to push route");
            }
        }

        fn replace(&self, path: String) {
            if let Err(err) = self.window.location().replace(&format!("#{path}")) {
                tracing::warn!(?err, %path, "failed to replace route");
            }
        }

        fn external(&self, url: String) -> bool {
            match self.window.location().set_href(&url) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(?err, %url, "failed to open external url");
                    false
                }
            }
        }

        fn updater(&self, callback: Arc<dyn Fn() + Send + Sync>) {
            let listener = Closure::<dyn FnMut(Event)>::new(move |_| (*callback)());
            if let Err(err) = self.window.add_event_listener_with_callback(
                "hashchange",
                &listener.into_js_value().unchecked_into(),
            ) {
                tracing::warn!(?err, "failed to watch hashchange");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_is_home() {
        assert_eq!(route_from_hash(""), "/");
        assert_eq!(route_from_hash("#"), "/");
        assert_eq!(route_from_hash("#/"), "/");
    }

    #[test]
    fn fragment_keeps_nested_segments() {
        assert_eq!(route_from_hash("#/services/web"), "/services/web");
    }

    #[test]
    fn bare_anchor_becomes_a_route() {
        assert_eq!(route_from_hash("#about"), "/about");
    }
}
