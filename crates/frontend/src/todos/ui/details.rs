use contracts::todos::Todo;
use leptos::prelude::*;

use crate::todos::api;
use crate::todos::model::{self, PageState};

/// Details page of a single to-do. Fetches the record by id before
/// rendering; a missing or unreachable record becomes the not-found view.
#[component]
pub fn TodoPage(id: String) -> impl IntoView {
    let (state, set_state) = signal::<PageState<Todo>>(PageState::Loading);

    wasm_bindgen_futures::spawn_local(async move {
        set_state.set(model::resolve(api::fetch_todo(&id).await));
    });

    // Local-state-only update handler; no edit form invokes it and
    // nothing is sent to the backend.
    let _handle_update_todo = move |updated: Todo| {
        set_state.update(|state| model::replace_todo(state, updated));
    };

    view! {
        <div class="container">
            <h1 class="text-center mt-5">"To-Do Details"</h1>
            {move || match state.get() {
                PageState::Loading => ().into_any(),
                PageState::Loaded(todo) => {
                    view! {
                        <div>
                            <p>{todo.title}</p>
                            <p>{if todo.completed { "completed" } else { "open" }}</p>
                        </div>
                    }
                        .into_any()
                }
                PageState::NotFound => view! { <p>"Not Found"</p> }.into_any(),
            }}
        </div>
    }
}
