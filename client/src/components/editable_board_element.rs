//! The editable board element: a draggable, resizable framed container.
//!
//! Owns the element's [`ElementCore`], wires pointer events into it, and
//! applies the resulting geometry imperatively to the rendered node so the
//! element tracks the pointer on every move event. Committed geometry and
//! activation requests are pushed into the shared [`BoardState`] context at
//! gesture stop — the continuous-application path and the commit path stay
//! separate.

use engine::board::BoardElement;
use engine::direction::Direction;
use engine::element::{Action, ElementCore};
use engine::geometry::{Geometry, Point, Size};
use engine::zone::HitPart;
use leptos::ev::PointerEvent;
use leptos::prelude::*;

use crate::components::drag_handle::DragHandle;
use crate::components::resize_bars::ResizeBars;
use crate::state::board::BoardState;
use crate::util::style_guard::ResizeGuard;

/// Snapshot a board element shares with its handle and hotzone children.
///
/// [`DragHandle`] and [`ResizeBars`] must be rendered inside an
/// [`EditableBoardElement`]; a missing context is a fatal integration
/// error, surfaced immediately.
#[derive(Clone, Copy)]
pub struct ElementContext {
    /// True while a drag gesture is in progress.
    pub is_dragging: RwSignal<bool>,
    /// True when this element is the board's active element.
    pub is_active: Signal<bool>,
    /// Begin a drag gesture from the handle.
    pub on_handle_down: Callback<PointerEvent>,
    /// Begin a resize gesture from a hotzone.
    pub on_zone_down: Callback<(Direction, PointerEvent)>,
}

fn client_point(ev: &PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Write the engine geometry to the rendered node.
///
/// Kept separate from the board-state commit so per-move application stays
/// cheap and synchronous with the pointer.
fn apply_geometry(node: &web_sys::HtmlElement, geometry: Geometry) {
    let style = node.style();
    let _ = style.set_property("width", &format!("{}px", geometry.size.width));
    let _ = style.set_property("height", &format!("{}px", geometry.size.height));
    let _ = style.set_property(
        "transform",
        &format!("translate({}px, {}px)", geometry.position.x, geometry.position.y),
    );
}

/// A draggable, resizable board element.
///
/// The `record` supplies identity, constraints, and seed geometry. An
/// invalid record is a fatal integration error: the component panics at
/// mount instead of rendering half-working.
#[component]
pub fn EditableBoardElement(record: BoardElement) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let id = record.id;
    let class = record.class.clone();
    let label = record
        .data
        .get("label")
        .and_then(|value| value.as_str())
        .unwrap_or("Drag Handle")
        .to_owned();

    let core = match ElementCore::new(&record) {
        Ok(core) => core,
        Err(err) => panic!("invalid board element {id}: {err}"),
    };
    let core = StoredValue::new(core);
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let is_dragging = RwSignal::new(false);
    let guard = StoredValue::new_local(None::<ResizeGuard>);

    let is_active = Memo::new(move |_| board.read().board.active_id() == Some(id));
    let z_index = Memo::new(move |_| {
        board.read().board.get(&id).map_or(0, BoardElement::z_index)
    });

    // Keep the core's activation gate in sync with the board.
    Effect::new(move || {
        let active = is_active.get();
        core.update_value(|core| core.set_active(active));
    });

    // Seed the rendered geometry once the node exists.
    Effect::new(move || {
        if let Some(node) = node_ref.get() {
            apply_geometry(&node, core.with_value(ElementCore::geometry));
        }
    });

    // Release any in-flight gesture overrides on teardown.
    on_cleanup(move || guard.set_value(None));

    let process = move |actions: Vec<Action>| {
        for action in actions {
            match action {
                Action::DragStarted => {
                    is_dragging.set(true);
                    log::debug!("element {id}: drag started");
                }
                Action::Moved { .. } | Action::Resized { .. } => {
                    if let Some(node) = node_ref.get_untracked() {
                        apply_geometry(&node, core.with_value(ElementCore::geometry));
                    }
                }
                Action::DragCommitted { position } => {
                    is_dragging.set(false);
                    log::debug!("element {id}: drag committed at {position:?}");
                    board.update(|state| {
                        state.board.apply_move(&id, position);
                    });
                }
                Action::ResizeStarted { direction } => {
                    guard.set_value(Some(ResizeGuard::acquire(direction.cursor())));
                    log::debug!("element {id}: resize started from {direction:?}");
                }
                Action::ResizeCommitted { direction, geometry } => {
                    guard.set_value(None);
                    log::debug!("element {id}: resize from {direction:?} committed at {geometry:?}");
                    board.update(|state| {
                        state.board.apply_resize(&id, geometry);
                    });
                }
                Action::ActivationRequested { id } => {
                    log::debug!("element {id}: activation requested");
                    board.update(|state| {
                        state.board.activate(&id);
                    });
                }
            }
        }
    };

    let capture_pointer = move |ev: &PointerEvent| {
        if let Some(node) = node_ref.get_untracked() {
            // Route every further move/up of this pointer to the element,
            // however far it leaves the hotzone or handle.
            let _ = node.set_pointer_capture(ev.pointer_id());
        }
    };

    let on_handle_down = Callback::new(move |ev: PointerEvent| {
        capture_pointer(&ev);
        let at = client_point(&ev);
        let actions = core
            .try_update_value(|core| core.on_pointer_down(HitPart::DragHandle, at))
            .unwrap_or_default();
        process(actions);
    });

    let on_zone_down = Callback::new(move |(direction, ev): (Direction, PointerEvent)| {
        capture_pointer(&ev);
        let at = client_point(&ev);
        let actions = core
            .try_update_value(|core| core.on_pointer_down(HitPart::ResizeZone(direction), at))
            .unwrap_or_default();
        process(actions);
    });

    let on_body_down = move |ev: PointerEvent| {
        // Handle and hotzone presses stop propagation, so only true body
        // presses reach this handler.
        let at = client_point(&ev);
        let actions = core
            .try_update_value(|core| core.on_pointer_down(HitPart::Body, at))
            .unwrap_or_default();
        process(actions);
    };

    let on_pointer_move = move |ev: PointerEvent| {
        let at = client_point(&ev);
        let actions = core
            .try_update_value(|core| core.on_pointer_move(at))
            .unwrap_or_default();
        process(actions);
    };

    let on_pointer_up = move |_ev: PointerEvent| {
        // Read the rendered dimensions back before a resize commit so any
        // rendering-side rounding lands in persistent state.
        let rendered = node_ref
            .get_untracked()
            .map(|node| Size::new(f64::from(node.offset_width()), f64::from(node.offset_height())));
        let actions = core
            .try_update_value(|core| {
                if core.gesture().is_resizing() {
                    if let Some(size) = rendered {
                        core.reconcile_live_size(size);
                    }
                }
                core.on_pointer_up()
            })
            .unwrap_or_default();
        process(actions);
    };

    provide_context(ElementContext {
        is_dragging,
        is_active: is_active.into(),
        on_handle_down,
        on_zone_down,
    });

    view! {
        <div
            node_ref=node_ref
            class=format!("board-element {class}")
            class=("board-element--active", move || is_active.get())
            style=("--bar-thickness", format!("{}px", record.bar_thickness))
            style:z-index=move || z_index.get().to_string()
            on:pointerdown=on_body_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
        >
            <DragHandle>{label}</DragHandle>
            <div class="board-element__content">
                <button class="board-element__cta" on:click=move |_| log::debug!("cta clicked")>
                    "CTA"
                </button>
            </div>
            <ResizeBars/>
        </div>
    }
}
