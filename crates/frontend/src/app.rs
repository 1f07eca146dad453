use contracts::users::{ResponseRecord, UserInput};
use leptos::prelude::*;

use crate::todos::ui::{TodoHome, TodoPage, TodosPage};
use crate::users::ui::{DataDisplay, UserDelete, UserGet, UserPost, UserPut};

/// Which page group is visible. Stands in for a router; this demo has
/// no navigation layer.
#[derive(Clone, PartialEq)]
enum Section {
    Users,
    TodoHome,
    TodoList,
    TodoDetails(String),
}

#[component]
pub fn App() -> impl IntoView {
    let (section, set_section) = signal(Section::Users);

    view! {
        <div>
            <div class="nav">
                <button class="btn" on:click=move |_| set_section.set(Section::Users)>
                    "Users"
                </button>
                <button class="btn" on:click=move |_| set_section.set(Section::TodoHome)>
                    "To-Do App"
                </button>
            </div>

            {move || match section.get() {
                Section::Users => view! { <UsersPage /> }.into_any(),
                Section::TodoHome => {
                    view! {
                        <TodoHome on_open=Callback::new(move |_| {
                            set_section.set(Section::TodoList)
                        }) />
                    }
                        .into_any()
                }
                Section::TodoList => {
                    view! {
                        <TodosPage on_select=Callback::new(move |id| {
                            set_section.set(Section::TodoDetails(id))
                        }) />
                    }
                        .into_any()
                }
                Section::TodoDetails(id) => view! { <TodoPage id=id /> }.into_any(),
            }}
        </div>
    }
}

/// The four verb sections. Owns the form record the Post and Put
/// components share, and the last-response slot Post writes into.
#[component]
fn UsersPage() -> impl IntoView {
    let input = RwSignal::new(UserInput::default());
    let last_response = RwSignal::new(None::<ResponseRecord>);

    view! {
        <div>
            <div class="section-title">"Get"</div>
            <UserGet />

            <div class="section-title">"Post"</div>
            <UserPost input=input last_response=last_response />

            {move || {
                last_response
                    .get()
                    .map(|record| {
                        view! {
                            <DataDisplay
                                data=record
                                on_update=Callback::new(move |edited| input.set(edited))
                                on_delete=Callback::new(move |_| last_response.set(None))
                            />
                        }
                    })
            }}

            <div class="section-title">"Put"</div>
            <UserPut input=input />

            <div class="section-title">"Delete"</div>
            <UserDelete />
        </div>
    }
}
