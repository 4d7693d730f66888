//! Category Modal Component
//!
//! Lists existing categories and adds new ones.

use leptos::prelude::*;

use crate::actions::{CategoryDraft, Outcome};
use crate::context::use_app;
use crate::store::{use_app_store, TodoStateStoreFields};

#[component]
pub fn CategoryModal() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();
    let show = ctx.show_categories;
    let default_color = ctx.config().default_category_color;

    let name = RwSignal::new(String::new());
    let color = RwSignal::new(default_color.clone());

    // Fresh form every time the modal opens
    Effect::new(move |_| {
        if show.get() {
            name.set(String::new());
            color.set(default_color.clone());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = CategoryDraft {
            name: name.get_untracked(),
            color: color.get_untracked(),
        };
        ctx.spawn(move |actions| async move {
            let outcome = actions.add_category(draft).await?;
            if outcome == Outcome::Applied {
                show.set(false);
            }
            Ok(outcome)
        });
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal" on:click=move |_| show.set(false)>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Categories"</h2>
                        <button class="close-btn" on:click=move |_| show.set(false)>"×"</button>
                    </div>

                    <ul class="category-list">
                        <For
                            each=move || store.categories().get()
                            key=|c| c.name.clone()
                            children=move |c| {
                                view! {
                                    <li class="category-item">
                                        <span
                                            class="category-color-dot"
                                            style=format!("background-color: {};", c.color)
                                        ></span>
                                        {c.name.clone()}
                                    </li>
                                }
                            }
                        />
                    </ul>

                    <form class="category-form" on:submit=on_submit>
                        <input
                            type="text"
                            placeholder="Category name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <input
                            type="color"
                            prop:value=move || color.get()
                            on:input=move |ev| color.set(event_target_value(&ev))
                        />
                        <button type="submit">"Save"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
