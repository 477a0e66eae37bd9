//! Inline editor for a single step parameter

use leptos::html;
use leptos::prelude::*;

use crate::types::ParameterEntry;

/// Renders `key: value` as a chip. With edits enabled, clicking the chip
/// swaps the value for a text field; Enter or blur commits, Escape reverts.
#[component]
pub fn PlanStepInput(
    input: ParameterEntry,
    #[prop(into)] on_edit: Callback<String>,
    edits_enabled: bool,
) -> impl IntoView {
    let (value, set_value) = signal(input.value.clone());
    let (draft, set_draft) = signal(String::new());
    let (editing, set_editing) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let begin_edit = move |_| {
        if edits_enabled {
            set_draft.set(value.get_untracked());
            set_editing.set(true);
        }
    };

    // Enter followed by the blur of the removed field must commit only once
    let commit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let new_value = draft.get_untracked();
        if new_value != value.get_untracked() {
            set_value.set(new_value.clone());
            on_edit.run(new_value);
        }
    };

    let cancel = move || set_editing.set(false);

    Effect::new(move |_| {
        if editing.get() {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let chip_class = if edits_enabled {
        "text-blue-800 hover:underline cursor-text"
    } else {
        "text-gray-700 cursor-default"
    };

    view! {
        <span class="inline-flex items-center gap-1 px-2 py-0.5 text-xs rounded border border-blue-200 bg-blue-50">
            <span class="font-semibold text-blue-900">{format!("{}:", input.key)}</span>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <button
                        type="button"
                        class=chip_class
                        disabled={!edits_enabled}
                        title={if edits_enabled { "Click to edit" } else { "" }}
                        on:click=begin_edit
                    >
                        {move || value.get()}
                    </button>
                }
            >
                <input
                    type="text"
                    class="px-1 py-0 text-xs border rounded focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
                    node_ref=input_ref
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:blur=move |_| commit()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => commit(),
                            "Escape" => cancel(),
                            _ => {}
                        }
                    }
                />
            </Show>
        </span>
    }
}
