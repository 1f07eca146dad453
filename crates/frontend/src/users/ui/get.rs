use leptos::prelude::*;

use crate::users::{api, model};

/// Reads the users collection once on mount and renders one line per
/// record. A failed read logs the error and keeps whatever was rendered
/// before; nothing is shown to the user and nothing is retried.
#[component]
pub fn UserGet() -> impl IntoView {
    let (names, set_names) = signal::<Vec<String>>(Vec::new());

    wasm_bindgen_futures::spawn_local(async move {
        let result = api::fetch_users().await;
        set_names.set(model::fold_fetch(names.get_untracked(), result));
    });

    view! {
        <div>
            {move || {
                names
                    .get()
                    .into_iter()
                    .map(|name| view! { <p>{name}</p> })
                    .collect_view()
            }}
        </div>
    }
}
