//! Thin DOM accessors used by the shell; everything here is side-effect plumbing.

use crate::core::breakpoints::{Viewport, css_pixels};
use crate::core::config::LayoutConfig;
use crate::core::device::{DeviceCaps, MANAGED_BODY_CLASSES, has_scroll_shadow};
use crate::core::events::ShellEvent;
use gloo::console;
use gloo::utils::{body, document, window};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CustomEvent, CustomEventInit, Element, Event, HtmlElement, TouchEvent, TouchList,
};

pub(crate) fn measure_viewport(config: &LayoutConfig) -> Viewport {
    let window = window();
    let width = dimension(window.inner_width(), 1280);
    let height = dimension(window.inner_height(), 800);
    Viewport::measure(width, height, config)
}

pub(crate) fn detect_caps() -> DeviceCaps {
    let window = window();
    let has_touch_start =
        js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    DeviceCaps::detect(has_touch_start, window.navigator().max_touch_points())
}

pub(crate) fn layout_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub(crate) fn visual_height() -> f64 {
    window()
        .visual_viewport()
        .map_or_else(layout_height, |viewport| viewport.height())
}

pub(crate) fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Replace every managed body class with `classes`.
pub(crate) fn sync_body_classes(classes: &[&str]) {
    let list = body().class_list();
    for class in MANAGED_BODY_CLASSES {
        if !classes.contains(&class) {
            let _ = list.remove_1(class);
        }
    }
    for class in classes {
        let _ = list.add_1(class);
    }
}

pub(crate) fn set_body_class(class: &str, enabled: bool) {
    let list = body().class_list();
    let result = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(err) = result {
        console::warn!("body class update failed", class, err);
    }
}

pub(crate) fn set_document_title(title: &str) {
    document().set_title(title);
}

/// Mirror a shell event to `document` as a `CustomEvent` with a JSON detail.
pub(crate) fn emit_dom_event(event: ShellEvent) {
    let init = CustomEventInit::new();
    init.set_detail(&JsValue::from_str(&event.detail_json()));
    match CustomEvent::new_with_event_init_dict(event.name(), &init) {
        Ok(custom) => {
            if let Err(err) = document().dispatch_event(&custom) {
                console::error!("event dispatch failed", event.name(), err);
            }
        }
        Err(err) => console::error!("event construction failed", event.name(), err),
    }
}

/// String detail of a DOM `CustomEvent`, if any.
pub(crate) fn custom_event_detail(event: &Event) -> Option<String> {
    event
        .dyn_ref::<CustomEvent>()
        .and_then(|custom| custom.detail().as_string())
}

/// Client coordinates of the first touch in `list`.
pub(crate) fn first_touch(list: &TouchList) -> Option<(f64, f64)> {
    list.get(0)
        .map(|touch| (f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Coordinates of the primary finger for a raw touch event; `changed` reads
/// `changedTouches`, which is the only populated list on `touchend`.
pub(crate) fn touch_event_point(event: &Event, changed: bool) -> Option<(f64, f64)> {
    let touch = event.dyn_ref::<TouchEvent>()?;
    if changed {
        first_touch(&touch.changed_touches())
    } else {
        first_touch(&touch.touches())
    }
}

/// Whether a horizontally scrollable element still hides content on its right.
pub(crate) fn element_scroll_shadow(element: &Element) -> bool {
    has_scroll_shadow(
        f64::from(element.scroll_left()),
        f64::from(element.client_width()),
        f64::from(element.scroll_width()),
    )
}

/// Whether a keyboard event was aimed at a form field or an editable region.
pub(crate) fn event_target_is_editable(event: &Event) -> bool {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
        return false;
    };
    if element.is_content_editable() {
        return true;
    }
    matches!(
        element.tag_name().to_ascii_lowercase().as_str(),
        "input" | "textarea" | "select"
    )
}

fn dimension(value: Result<JsValue, JsValue>, fallback: u32) -> u32 {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .and_then(css_pixels)
        .unwrap_or(fallback)
}
