//! Board page — the demo workspace with three editable elements.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use engine::board::BoardElement;
use engine::geometry::{Bounds, Grid, Point};
use leptos::prelude::*;
use uuid::Uuid;

use crate::components::editable_board_element::EditableBoardElement;
use crate::state::board::BoardState;

/// The demo element set: one free-roaming element, one confined to a
/// 350×350 region, and one grid-snapped inside its own region.
fn demo_elements() -> Vec<BoardElement> {
    let mut free = BoardElement::new(Uuid::new_v4());
    free.class = "cla".to_owned();
    free.position = Point::new(480.0, 40.0);
    free.active = true;
    free.index = 0;
    free.data = serde_json::json!({ "label": "Free element" });

    let mut bounded = BoardElement::new(Uuid::new_v4());
    bounded.class = "clb".to_owned();
    bounded.bounds = Bounds::new(50.0, 400.0, 400.0, 50.0);
    bounded.position = Point::new(50.0, 50.0);
    bounded.index = 1;
    bounded.data = serde_json::json!({ "label": "Bounded element" });

    let mut gridded = BoardElement::new(Uuid::new_v4());
    gridded.class = "clb".to_owned();
    gridded.bounds = Bounds::new(420.0, 900.0, 820.0, 450.0);
    gridded.position = Point::new(450.0, 420.0);
    gridded.grid = Some(Grid::new(20.0, 20.0));
    gridded.index = 2;
    gridded.data = serde_json::json!({ "label": "Snapped element" });

    vec![free, bounded, gridded]
}

/// Board page — seeds the demo elements into the shared board state and
/// renders one `EditableBoardElement` per record. Clicking an element's
/// body activates it and raises it above all inactive elements.
#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let elements = demo_elements();
    board.update(|state| {
        for element in &elements {
            state.board.insert(element.clone());
        }
    });

    view! {
        <main class="board-page">
            {elements
                .into_iter()
                .map(|record| view! { <EditableBoardElement record/> })
                .collect_view()}
        </main>
    }
}
