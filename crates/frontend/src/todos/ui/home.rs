use leptos::prelude::*;

/// Landing page of the to-do app.
#[component]
pub fn TodoHome(on_open: Callback<()>) -> impl IntoView {
    view! {
        <main class="mt-5">
            <h1 class="text-center">"To-Do App"</h1>
            <p class="text-center">"A simple to-do app"</p>
            <button class="btn" on:click=move |_| on_open.run(())>
                "Go to To-Dos"
            </button>
        </main>
    }
}
