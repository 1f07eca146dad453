use contracts::users::ResponseRecord;
use leptos::prelude::*;

use crate::users::api;
use crate::users::ui::DataDisplay;

/// Button that deletes the fixed resource (`/users/1`). The form record
/// plays no part in this request. The response, the resource's last known
/// representation, is kept until cleared from the display.
#[component]
pub fn UserDelete() -> impl IntoView {
    let (response, set_response) = signal::<Option<ResponseRecord>>(None);

    let handle_delete = move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_user().await {
                Ok(record) => set_response.set(Some(record)),
                Err(e) => log::error!("delete user failed: {}", e),
            }
        });
    };

    view! {
        <button class="btn" on:click=handle_delete>
            "Delete"
        </button>

        {move || {
            response.get().map(|record| {
                view! {
                    <DataDisplay
                        data=record
                        on_delete=Callback::new(move |_| set_response.set(None))
                    />
                }
            })
        }}
    }
}
