//! Chip Picker Component
//!
//! Click-to-toggle multi-select used for symptoms and pre-existing
//! conditions on the intake form.

use leptos::prelude::*;

#[component]
pub fn ChipPicker(
    #[prop(into)] options: Signal<Vec<String>>,
    selected: ReadSignal<Vec<String>>,
    set_selected: WriteSignal<Vec<String>>,
) -> impl IntoView {
    let toggle = move |name: String| {
        set_selected.update(|current| {
            if let Some(pos) = current.iter().position(|s| s == &name) {
                current.remove(pos);
            } else {
                current.push(name);
            }
        });
    };

    view! {
        <div class="chip-container">
            <For
                each=move || options.get()
                key=|name| name.clone()
                children=move |name: String| {
                    let display = name.clone();
                    let click_name = name.clone();
                    let is_selected = move || selected.get().iter().any(|s| s == &name);
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_selected() { "chip chip-selected" } else { "chip chip-unselected" }
                            }
                            on:click=move |_| toggle(click_name.clone())
                        >
                            {display}
                        </button>
                    }
                }
            />
        </div>
    }
}
