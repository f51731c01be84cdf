//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::board::BoardPage;
use crate::state::board::BoardState;

/// Root application component.
///
/// Provides the shared board state context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = RwSignal::new(BoardState::default());
    provide_context(board);

    view! {
        <Title text="Board"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BoardPage/>
            </Routes>
        </Router>
    }
}
