//! Kanban board: columns side by side on wide layouts, a swipeable pager on mobile.
//!
//! # Design
//! - Pager position and the live drag offset live in the store so the indicator,
//!   dots and track stay consistent across re-renders.
//! - Touch listeners are attached manually so `touchmove` can cancel native scrolling
//!   once a horizontal drag is recognised.

use crate::app::api::ApiCtx;
use crate::app::dom::{element_scroll_shadow, event_target_is_editable, touch_event_point};
use crate::app::effects::reduce_with_effects;
use crate::app::load_board;
use crate::core::device::SCROLL_SHADOW_CLASS;
use crate::core::models::{Card, Column, DEMO_BOARD_ID};
use crate::core::store::{AppStore, arrow_key_column, go_to_column, swipe_column};
use crate::core::swipe::{MoveOutcome, SwipeDirection, SwipeOutcome, SwipeTracker};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::document;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

fn reset_drag(dispatch: &Dispatch<AppStore>) {
    if dispatch.get().board.drag_offset.abs() > f64::EPSILON {
        dispatch.reduce_mut(|store| store.board.drag_offset = 0.0);
    }
}

fn attach_swipe(track: &HtmlElement) -> Vec<EventListener> {
    let dispatch = Dispatch::<AppStore>::new();
    let tracker = Rc::new(RefCell::new(SwipeTracker::default()));

    let touch_start = {
        let tracker = tracker.clone();
        EventListener::new(track, "touchstart", move |event| {
            if let Some((x, y)) = touch_event_point(event, false) {
                tracker.borrow_mut().start(x, y, event.time_stamp());
            }
        })
    };
    let touch_move = {
        let tracker = tracker.clone();
        let dispatch = dispatch.clone();
        EventListener::new_with_options(
            track,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some((x, y)) = touch_event_point(event, false) else {
                    return;
                };
                let edges = dispatch.get().board.pager.edges();
                let outcome = tracker.borrow_mut().update(x, y, edges);
                if let MoveOutcome::Drag { offset } = outcome {
                    event.prevent_default();
                    dispatch.reduce_mut(|store| store.board.drag_offset = offset);
                }
            },
        )
    };
    let touch_end = {
        let tracker = tracker.clone();
        let dispatch = dispatch.clone();
        EventListener::new(track, "touchend", move |event| {
            let outcome = match touch_event_point(event, true) {
                Some((x, _)) => tracker.borrow_mut().finish(x, event.time_stamp()),
                None => {
                    tracker.borrow_mut().cancel();
                    SwipeOutcome::Ignored
                }
            };
            match outcome {
                SwipeOutcome::Swipe(direction) => {
                    reduce_with_effects(&dispatch, |store| swipe_column(store, direction));
                }
                SwipeOutcome::SnapBack | SwipeOutcome::Ignored => reset_drag(&dispatch),
            }
        })
    };
    let touch_cancel = EventListener::new(track, "touchcancel", move |_event| {
        tracker.borrow_mut().cancel();
        reset_drag(&dispatch);
    });

    vec![touch_start, touch_move, touch_end, touch_cancel]
}

fn attach_arrow_keys() -> EventListener {
    let dispatch = Dispatch::<AppStore>::new();
    EventListener::new(&document(), "keydown", move |event| {
        let Some(key) = event
            .dyn_ref::<web_sys::KeyboardEvent>()
            .map(web_sys::KeyboardEvent::key)
        else {
            return;
        };
        let editable = event_target_is_editable(event);
        reduce_with_effects(&dispatch, |store| arrow_key_column(store, &key, editable));
    })
}

/// Move a card one column to the right, then persist the move.
fn advance_card(api_ctx: Option<ApiCtx>, card_id: String, to_column: usize) {
    let dispatch = Dispatch::<AppStore>::new();
    let mut request = None;
    let mut board_id = None;
    reduce_with_effects(&dispatch, |store| {
        if let Some(board) = store.board.board.as_mut() {
            request = board.move_card(&card_id, to_column);
            board_id = Some(board.id.clone());
        }
        Vec::new()
    });
    let (Some(request), Some(board_id)) = (request, board_id) else {
        return;
    };
    if board_id == DEMO_BOARD_ID {
        return;
    }
    let Some(ctx) = api_ctx else {
        return;
    };
    yew::platform::spawn_local(async move {
        if let Err(err) = ctx
            .client
            .move_card(&card_id, &request.column_id, request.position)
            .await
        {
            console::warn!("card move rejected; reloading board", err.to_string());
            load_board(dispatch, Some(ctx));
        }
    });
}

#[function_component(KanbanBoard)]
pub(crate) fn kanban_board() -> Html {
    let slice = use_selector(|store: &AppStore| store.board.clone());
    let breakpoint = use_selector(|store: &AppStore| store.layout.viewport.breakpoint);
    let api_ctx = use_context::<ApiCtx>();
    let track_ref = use_node_ref();
    let columns_ref = use_node_ref();
    let shadow = use_state(|| false);

    let mobile = breakpoint.is_mobile();
    let has_board = slice.board.is_some();

    {
        let track_ref = track_ref.clone();
        use_effect_with_deps(
            move |(mobile, _): &(bool, bool)| {
                let mut listeners = Vec::new();
                if *mobile {
                    if let Some(track) = track_ref.cast::<HtmlElement>() {
                        listeners.extend(attach_swipe(&track));
                    }
                    listeners.push(attach_arrow_keys());
                }
                move || drop(listeners)
            },
            (mobile, has_board),
        );
    }
    {
        let columns_ref = columns_ref.clone();
        let shadow = shadow.clone();
        use_effect_with_deps(
            move |_| {
                let next = !mobile
                    && columns_ref
                        .cast::<Element>()
                        .is_some_and(|element| element_scroll_shadow(&element));
                shadow.set(next);
                || ()
            },
            (mobile, slice.clone()),
        );
    }

    let Some(board) = slice.board.as_ref() else {
        return html! {
            <section class="kanban-board loading" aria-busy="true">
                <p class="board-status">{"Loading board…"}</p>
            </section>
        };
    };

    let onscroll = {
        let shadow = shadow.clone();
        let columns_ref = columns_ref.clone();
        Callback::from(move |_: Event| {
            if let Some(element) = columns_ref.cast::<Element>() {
                shadow.set(!mobile && element_scroll_shadow(&element));
            }
        })
    };

    let pager = slice.pager;
    let dragging = slice.drag_offset.abs() > f64::EPSILON;
    let column_count = board.columns.len();
    let track_style = mobile.then(|| {
        let transition = if dragging { "transition: none; " } else { "" };
        format!("{transition}transform: {};", pager.track_transform(slice.drag_offset))
    });
    let current_name = board.column(pager.index()).map(|column| column.name.as_str());

    let go_to = |index: usize| {
        Callback::from(move |_: MouseEvent| {
            reduce_with_effects(&Dispatch::<AppStore>::new(), |store| {
                go_to_column(store, index)
            });
        })
    };
    let step = |direction: SwipeDirection| {
        Callback::from(move |_: MouseEvent| {
            reduce_with_effects(&Dispatch::<AppStore>::new(), |store| {
                swipe_column(store, direction)
            });
        })
    };

    html! {
        <section class={classes!("kanban-board", mobile.then_some("is-paged"))} data-board={board.id.clone()}>
            if let Some(error) = slice.error.as_ref() {
                <p class="board-status board-error" role="status">
                    {format!("Offline copy shown: {error}")}
                </p>
            }
            if mobile {
                <div class="column-indicator">
                    <button
                        type="button"
                        class="column-prev"
                        aria-label="Previous column"
                        disabled={!pager.can_prev()}
                        onclick={step(SwipeDirection::Previous)}
                    >{"‹"}</button>
                    <span class="column-indicator-label" aria-live="polite">
                        {pager.indicator_label(current_name)}
                    </span>
                    <button
                        type="button"
                        class="column-next"
                        aria-label="Next column"
                        disabled={!pager.can_next()}
                        onclick={step(SwipeDirection::Next)}
                    >{"›"}</button>
                </div>
            }
            <div
                class={classes!("kanban-columns", (*shadow).then_some(SCROLL_SHADOW_CLASS))}
                ref={columns_ref}
                {onscroll}
            >
                <div
                    class={classes!("kanban-track", dragging.then_some("dragging"))}
                    ref={track_ref}
                    style={track_style}
                >
                    {for board.columns.iter().enumerate().map(|(index, column)| {
                        let hidden = mobile && index != pager.index();
                        let next_column = (index + 1 < column_count).then_some(index + 1);
                        column_view(column, hidden, next_column, api_ctx.as_ref())
                    })}
                </div>
            </div>
            if mobile {
                <div class="column-dots" role="tablist" aria-label="Columns">
                    {for pager.dots().into_iter().map(|dot| html! {
                        <button
                            type="button"
                            role="tab"
                            class={classes!("column-dot", dot.active.then_some("active"))}
                            aria-selected={if dot.active { "true" } else { "false" }}
                            aria-label={format!("Go to column {}", dot.index + 1)}
                            onclick={go_to(dot.index)}
                        ></button>
                    })}
                </div>
            }
        </section>
    }
}

fn column_view(
    column: &Column,
    hidden: bool,
    next_column: Option<usize>,
    api_ctx: Option<&ApiCtx>,
) -> Html {
    html! {
        <div
            class="kanban-column"
            data-column={column.id.clone()}
            aria-hidden={if hidden { "true" } else { "false" }}
        >
            <h2 class="column-title">
                {column.name.clone()}
                <span class="column-count">{column.cards.len()}</span>
            </h2>
            <ul class="column-cards">
                {for column.cards.iter().map(|card| card_view(card, next_column, api_ctx))}
            </ul>
        </div>
    }
}

fn card_view(card: &Card, next_column: Option<usize>, api_ctx: Option<&ApiCtx>) -> Html {
    let advance = next_column.map(|to_column| {
        let api_ctx = api_ctx.cloned();
        let card_id = card.id.clone();
        Callback::from(move |_: MouseEvent| {
            advance_card(api_ctx.clone(), card_id.clone(), to_column);
        })
    });
    html! {
        <li class="kanban-card" data-card={card.id.clone()}>
            <p class="card-title">{card.title.clone()}</p>
            if let Some(description) = card.description.as_ref() {
                <p class="card-description">{description.clone()}</p>
            }
            <div class="card-footer">
                if let Some(assignee) = card.assignee.as_ref() {
                    <span class="card-assignee">{assignee.clone()}</span>
                }
                if let Some(onclick) = advance {
                    <button type="button" class="card-advance" aria-label="Move to next column" {onclick}>
                        {"→"}
                    </button>
                }
            </div>
        </li>
    }
}
