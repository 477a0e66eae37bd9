//! Card for one step of an execution plan

use leptos::prelude::*;

use crate::components::plan_step_input::PlanStepInput;
use crate::plan::{
    delete_control_visible, dispatch_dialog, output_badges, step_description, step_header,
    visible_inputs, DeleteDialog, DialogAction, ParameterEdit, ReservedWords,
};
use crate::types::PlanStep;

/// Shows a plan step: header, description, inputs and outputs, plus a
/// delete button guarded by a confirmation dialog.
///
/// The card never changes `step` itself. Edits come out through
/// `on_edit_parameter` and deletions through `on_delete_step`, for the owner
/// of the plan to apply.
#[component]
pub fn StepCard(
    step: PlanStep,
    edits_enabled: bool,
    step_delete_enabled: bool,
    #[prop(into)] on_delete_step: Callback<usize>,
    #[prop(optional, into)] on_edit_parameter: Option<Callback<ParameterEdit>>,
    #[prop(optional)] reserved_words: Option<ReservedWords>,
) -> impl IntoView {
    let reserved_words = reserved_words.unwrap_or_default();
    let dialog = RwSignal::new(DeleteDialog::Closed);

    let step_index = step.index;
    let header = step_header(&step);
    let description = step_description(&step).map(str::to_string);
    let inputs = visible_inputs(&step, &reserved_words);
    let outputs = output_badges(&step);

    let dispatch = move |action: DialogAction| {
        let next = dispatch_dialog(dialog.get_untracked(), action, step_index, |index| {
            log::info!("Deleting plan step {}", index);
            on_delete_step.run(index);
        });
        dialog.set(next);
    };

    let delete_control = delete_control_visible(edits_enabled, step_delete_enabled).then(|| {
        view! {
            <button
                type="button"
                class="text-gray-400 hover:text-gray-600"
                aria-label="Delete step"
                on:click=move |_| dispatch(DialogAction::Request)
            >
                <svg class="w-3 h-3" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                </svg>
            </button>
            <Show when=move || dialog.get().is_open()>
                <DeleteStepDialog
                    on_cancel=move || dispatch(DialogAction::Cancel)
                    on_confirm=move || dispatch(DialogAction::Confirm)
                />
            </Show>
        }
    });

    let inputs_section = (!inputs.is_empty()).then(|| {
        view! {
            <div class="flex flex-wrap items-center gap-2">
                <span class="text-sm font-semibold">"Inputs: "</span>
                {inputs.into_iter().map(|input| {
                    let entry = input.clone();
                    let on_edit = move |value: String| {
                        let edit = ParameterEdit::for_input(step_index, &entry, value);
                        log::debug!("Step {} input '{}' edited", step_index, edit.key);
                        if let Some(cb) = on_edit_parameter {
                            cb.run(edit);
                        }
                    };
                    view! {
                        <PlanStepInput input=input on_edit=on_edit edits_enabled=edits_enabled />
                    }
                }).collect::<Vec<_>>()}
            </div>
        }
    });

    let outputs_section = (!outputs.is_empty()).then(|| {
        view! {
            <div class="flex flex-wrap items-center gap-2">
                <span class="text-sm font-semibold">"Outputs: "</span>
                // Keyed by position: output names are not guaranteed unique
                <For
                    each=move || outputs.clone()
                    key=|(position, _)| *position
                    children=|(_, output)| view! {
                        <span class="px-2 py-0.5 text-xs rounded bg-indigo-50 text-indigo-700 border border-indigo-200">
                            {output}
                        </span>
                    }
                />
            </div>
        }
    });

    view! {
        <div class="mx-auto w-[700px] max-w-full bg-white rounded-lg shadow">
            <div class="flex flex-row">
                <div class="w-1 rounded-md bg-indigo-600"></div>
                <div class="flex flex-col w-full ml-2 my-1 gap-2 p-3">
                    <div class="flex items-start justify-between">
                        <p class="text-sm">
                            <b class="text-indigo-700">{header}</b>
                        </p>
                        {delete_control}
                    </div>
                    {description.map(|d| view! {
                        <div class="text-xs leading-4 line-clamp-1 w-[650px] max-w-full">
                            <span class="font-semibold">"About: "</span>
                            <span>{d}</span>
                        </div>
                    })}
                    {inputs_section}
                    {outputs_section}
                </div>
            </div>
        </div>
    }
}

#[component]
fn DeleteStepDialog(
    on_cancel: impl Fn() + 'static,
    on_confirm: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
            <div class="bg-white rounded-lg shadow-xl w-[398px] max-w-full mx-4" role="dialog" aria-modal="true">
                <div class="px-6 py-4 border-b border-gray-200 bg-gray-50">
                    <h3 class="text-lg font-semibold text-gray-800">
                        "Are you sure you want to delete this step?"
                    </h3>
                </div>
                <div class="p-6 text-sm text-gray-700">
                    "Deleting this step could disrupt the plan's initial logic and cause errors in subsequent steps. "
                    "Make sure the next steps don't depend on this step's outputs."
                </div>
                <div class="px-6 pb-4 flex justify-end gap-2">
                    <button
                        type="button"
                        class="px-4 py-2 text-sm bg-gray-200 text-gray-700 rounded hover:bg-gray-300"
                        on:click=move |_| on_cancel()
                    >
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class="px-4 py-2 text-sm bg-red-600 text-white rounded hover:bg-red-700"
                        on:click=move |_| on_confirm()
                    >
                        "Yes, Delete Step"
                    </button>
                </div>
            </div>
        </div>
    }
}
