//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::board::BoardPage;

/// Root application component. The board is the only page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Activity Board"/>
        <BoardPage/>
    }
}
