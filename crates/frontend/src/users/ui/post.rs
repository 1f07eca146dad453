use contracts::users::{ResponseRecord, UserInput};
use leptos::prelude::*;

use crate::users::api;

/// Two text inputs bound to the parent-owned form record plus a submit
/// button. Submit sends the input exactly as it stands at click time; the
/// created record goes into the parent's last-response slot. The input is
/// neither cleared nor validated.
#[component]
pub fn UserPost(
    input: RwSignal<UserInput>,
    last_response: RwSignal<Option<ResponseRecord>>,
) -> impl IntoView {
    let handle_submit = move |_| {
        let current = input.get();
        log::debug!("submitting {:?}", current);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_user(&current).await {
                Ok(record) => last_response.set(Some(record)),
                Err(e) => log::error!("create user failed: {}", e),
            }
        });
    };

    view! {
        <input
            class="input"
            type="text"
            prop:value=move || input.get().first_name
            on:input=move |ev| {
                input.update(|f| f.first_name = event_target_value(&ev));
            }
            placeholder="First Name"
        />

        <input
            class="input"
            type="text"
            prop:value=move || input.get().last_name
            on:input=move |ev| {
                input.update(|f| f.last_name = event_target_value(&ev));
            }
            placeholder="Last Name"
        />

        <button class="btn" on:click=handle_submit>
            "Submit"
        </button>
    }
}
