use contracts::users::{ResponseRecord, UserInput};
use leptos::prelude::*;

use crate::users::api;
use crate::users::ui::DataDisplay;

/// Button that updates the fixed resource (`/users/1`) with the current
/// form record and shows the echoed record below when one has arrived.
#[component]
pub fn UserPut(input: RwSignal<UserInput>) -> impl IntoView {
    let (response, set_response) = signal::<Option<ResponseRecord>>(None);

    let handle_update = move |_| {
        let current = input.get();
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_user(&current).await {
                Ok(record) => set_response.set(Some(record)),
                Err(e) => log::error!("update user failed: {}", e),
            }
        });
    };

    view! {
        <button class="btn" on:click=handle_update>
            "Update"
        </button>

        {move || response.get().map(|record| view! { <DataDisplay data=record /> })}
    }
}
