use contracts::users::{ResponseRecord, UserInput};
use leptos::prelude::*;

use crate::users::model;

/// Renders a response record as key/value lines.
///
/// The record is treated as opaque; fields are shown as-is. The optional
/// callbacks let the parent copy the record's form fields back into its
/// input, or drop the stored record.
#[component]
pub fn DataDisplay(
    data: ResponseRecord,
    #[prop(optional, into)] on_update: Option<Callback<UserInput>>,
    #[prop(optional, into)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    let pairs = model::display_pairs(&data);
    let edit_input = model::input_from_record(&data);

    view! {
        <div class="data-display">
            {pairs
                .into_iter()
                .map(|(key, value)| {
                    view! {
                        <p>
                            <b>{key}</b>
                            ": "
                            {value}
                        </p>
                    }
                })
                .collect_view()}

            {on_update
                .map(|handler| {
                    let edit_input = edit_input.clone();
                    view! {
                        <button class="btn" on:click=move |_| handler.run(edit_input.clone())>
                            "Edit"
                        </button>
                    }
                })}

            {on_delete
                .map(|handler| {
                    view! {
                        <button class="btn" on:click=move |_| handler.run(())>
                            "Clear"
                        </button>
                    }
                })}
        </div>
    }
}
