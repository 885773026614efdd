//! Inline stroke icons (24×24 grid, `currentColor`).

use dioxus::prelude::*;

#[component]
fn Icon(#[props(default)] class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn SunIcon() -> Element {
    rsx! {
        Icon {
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" }
        }
    }
}

#[component]
pub fn MoonIcon() -> Element {
    rsx! {
        Icon { path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" } }
    }
}

#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        Icon { path { d: "M4 6h16M4 12h16M4 18h16" } }
    }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        Icon { path { d: "M18 6 6 18M6 6l12 12" } }
    }
}

#[component]
pub fn ArrowIcon() -> Element {
    rsx! {
        Icon { class: "icon--directional", path { d: "M5 12h14M12 5l7 7-7 7" } }
    }
}

#[component]
pub fn SendIcon() -> Element {
    rsx! {
        Icon { class: "icon--directional", path { d: "m22 2-7 20-4-9-9-4Z M22 2 11 13" } }
    }
}

#[component]
pub fn CheckCircleIcon() -> Element {
    rsx! {
        Icon { class: "icon--success",
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m9 12 2 2 4-4" }
        }
    }
}

#[component]
pub fn AlertCircleIcon() -> Element {
    rsx! {
        Icon { class: "icon--error",
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 8v4M12 16h.01" }
        }
    }
}

#[component]
pub fn MailIcon() -> Element {
    rsx! {
        Icon {
            path { d: "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z" }
            path { d: "m22 6-10 7L2 6" }
        }
    }
}

#[component]
pub fn PhoneIcon() -> Element {
    rsx! {
        Icon { path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.8 19.8 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92Z" } }
    }
}

#[component]
pub fn PinIcon() -> Element {
    rsx! {
        Icon {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        }
    }
}

#[component]
pub fn ChartIcon() -> Element {
    rsx! {
        Icon { path { d: "M3 3v18h18M18 17V9M13 17V5M8 17v-3" } }
    }
}

#[component]
pub fn BuildingIcon() -> Element {
    rsx! {
        Icon {
            path { d: "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z" }
            path { d: "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2M10 6h4M10 10h4M10 14h4M10 18h4" }
        }
    }
}

#[component]
pub fn TrendingIcon() -> Element {
    rsx! {
        Icon { class: "icon--directional", path { d: "m22 7-8.5 8.5-5-5L2 17M16 7h6v6" } }
    }
}

#[component]
pub fn UsersIcon() -> Element {
    rsx! {
        Icon {
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75" }
        }
    }
}
