use contracts::todos::Todo;
use leptos::prelude::*;

use crate::todos::api;
use crate::todos::model::{self, PageState};

/// The to-dos collection page. Fetches the list before rendering; any
/// failure renders the not-found view, with the cause discarded.
#[component]
pub fn TodosPage(on_select: Callback<String>) -> impl IntoView {
    let (state, set_state) = signal::<PageState<Vec<Todo>>>(PageState::Loading);

    wasm_bindgen_futures::spawn_local(async move {
        set_state.set(model::resolve(api::fetch_todos().await));
    });

    // Local-state-only add handler; no form invokes it and nothing is
    // sent to the backend.
    let _handle_add_todo = move |todo: Todo| {
        set_state.update(|state| model::append_todo(state, todo));
    };

    view! {
        <div class="container">
            <h1 class="text-center mt-5">"To-Dos"</h1>
            {move || match state.get() {
                PageState::Loading => ().into_any(),
                PageState::Loaded(todos) => {
                    todos
                        .into_iter()
                        .map(|todo| {
                            let id = todo.id.clone();
                            let marker = if todo.completed { "[x] " } else { "[ ] " };
                            view! {
                                <p on:click=move |_| on_select.run(id.clone())>
                                    {marker}
                                    {todo.title}
                                </p>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
                PageState::NotFound => view! { <p>"Not Found"</p> }.into_any(),
            }}
        </div>
    }
}
