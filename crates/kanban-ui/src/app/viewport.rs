//! Browser listeners feeding viewport, scroll and keyboard state into the store.

use crate::app::dom::{
    detect_caps, layout_height, measure_viewport, scroll_y, sync_body_classes, visual_height,
};
use crate::app::effects::reduce_with_effects;
use crate::app::preferences::load_sidebar_prefs;
use crate::core::config::LayoutConfig;
use crate::core::device::{body_classes, header_scrolled, keyboard_open};
use crate::core::sidebar::SidebarSet;
use crate::core::store::{AppStore, LayoutSlice, apply_viewport};
use gloo::events::EventListener;
use gloo::utils::window;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Measure once, then keep the store in sync with resize, orientation, scroll and
/// on-screen keyboard changes for as long as the calling component is mounted.
#[hook]
pub(crate) fn use_viewport_watcher(config: LayoutConfig) {
    let layout = use_selector(|store: &AppStore| store.layout);

    use_effect_with_deps(
        move |_| {
            let dispatch = Dispatch::<AppStore>::new();
            boot_layout(&dispatch, &config);

            let refresh = {
                let dispatch = dispatch.clone();
                move || {
                    let viewport = measure_viewport(&config);
                    reduce_with_effects(&dispatch, |store| {
                        store.layout.keyboard_open = keyboard_open(
                            store.layout.caps,
                            layout_height(),
                            visual_height(),
                            &config,
                        );
                        apply_viewport(store, viewport)
                    });
                }
            };

            let pending_resize: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let mut listeners = Vec::new();
            listeners.push(EventListener::new(&window(), "resize", {
                let refresh = refresh.clone();
                let pending_resize = pending_resize.clone();
                move |_event| {
                    let refresh = refresh.clone();
                    // Replacing the handle drops (and cancels) the previous timer.
                    *pending_resize.borrow_mut() =
                        Some(Timeout::new(config.resize_debounce_ms, refresh));
                }
            }));
            listeners.push(EventListener::new(&window(), "orientationchange", {
                let refresh = refresh.clone();
                move |_event| refresh()
            }));
            listeners.push(EventListener::new(&window(), "scroll", {
                let dispatch = dispatch.clone();
                move |_event| {
                    let scrolled = header_scrolled(scroll_y());
                    if dispatch.get().layout.scrolled != scrolled {
                        dispatch.reduce_mut(|store| store.layout.scrolled = scrolled);
                    }
                }
            }));
            if let Some(visual) = window().visual_viewport() {
                listeners.push(EventListener::new(&visual, "resize", {
                    let dispatch = dispatch.clone();
                    move |_event| {
                        let state = dispatch.get();
                        let open = keyboard_open(
                            state.layout.caps,
                            layout_height(),
                            visual_height(),
                            &config,
                        );
                        if state.layout.keyboard_open != open {
                            dispatch.reduce_mut(|store| store.layout.keyboard_open = open);
                        }
                    }
                }));
            }

            move || {
                pending_resize.borrow_mut().take();
                drop(listeners);
            }
        },
        (),
    );

    use_effect_with_deps(
        |layout: &Rc<LayoutSlice>| {
            sync_body_classes(&body_classes(
                layout.viewport,
                layout.caps,
                layout.keyboard_open,
            ));
            || ()
        },
        layout,
    );
}

fn boot_layout(dispatch: &Dispatch<AppStore>, config: &LayoutConfig) {
    let viewport = measure_viewport(config);
    let caps = detect_caps();
    let prefs = load_sidebar_prefs();
    reduce_with_effects(dispatch, |store| {
        store.layout = LayoutSlice {
            viewport,
            caps,
            keyboard_open: false,
            scrolled: header_scrolled(scroll_y()),
        };
        store.sidebars = SidebarSet::new(viewport, prefs);
        Vec::new()
    });
}
