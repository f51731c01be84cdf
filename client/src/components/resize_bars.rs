//! Resize bars — invisible hotzones along a board element's border.
//!
//! Eight transparent strips (four edges, four corners) initiate resize
//! gestures. The bars only forward the press and its direction to the
//! owning element; pointer tracking, the global cursor override, and
//! teardown are the element's concern.

use engine::direction::Direction;
use leptos::ev::PointerEvent;
use leptos::prelude::*;

use crate::components::editable_board_element::ElementContext;

/// The eight resize hotzones of a board element.
///
/// Must be rendered inside an `EditableBoardElement`; anything else is a
/// fatal integration error, surfaced immediately. When the element is
/// inactive the bars stay in the tree but never start gestures, and their
/// cursor affordance is suppressed.
#[component]
pub fn ResizeBars() -> impl IntoView {
    let Some(ctx) = use_context::<ElementContext>() else {
        panic!("ResizeBars must be used within an EditableBoardElement component");
    };

    Direction::ALL
        .into_iter()
        .map(|direction| {
            let class = format!("resize-bar {}-resize-bar", direction.as_str());
            let cursor = move || if ctx.is_active.get() { direction.cursor() } else { "default" };
            let on_pointer_down = move |ev: PointerEvent| {
                // A press in a hotzone never reaches the drag handle or the
                // body activation handler.
                ev.stop_propagation();
                if !ctx.is_active.get_untracked() {
                    return;
                }
                ev.prevent_default();
                ctx.on_zone_down.run((direction, ev));
            };
            view! {
                <div class=class style:cursor=cursor on:pointerdown=on_pointer_down></div>
            }
        })
        .collect_view()
}
