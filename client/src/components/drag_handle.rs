//! Drag handle — the grab strip across the top of a board element.

use leptos::ev::PointerEvent;
use leptos::prelude::*;

use crate::components::editable_board_element::ElementContext;

/// The designated drag region of a board element.
///
/// Must be rendered inside an `EditableBoardElement`; anything else is a
/// fatal integration error, surfaced immediately. The cursor reflects the
/// drag state: grabbable when idle, grabbing mid-drag, default when the
/// element is not the active one.
#[component]
pub fn DragHandle(children: Children) -> impl IntoView {
    let Some(ctx) = use_context::<ElementContext>() else {
        panic!("DragHandle must be used within an EditableBoardElement component");
    };

    let class = move || {
        if !ctx.is_active.get() {
            "board-element__handle"
        } else if ctx.is_dragging.get() {
            "board-element__handle board-element__handle--grabbing"
        } else {
            "board-element__handle board-element__handle--grab"
        }
    };

    let on_pointer_down = move |ev: PointerEvent| {
        // A handle press never falls through to body activation.
        ev.stop_propagation();
        if !ctx.is_active.get_untracked() {
            return;
        }
        ev.prevent_default();
        ctx.on_handle_down.run(ev);
    };

    view! {
        <div class=class on:pointerdown=on_pointer_down>
            {children()}
        </div>
    }
}
