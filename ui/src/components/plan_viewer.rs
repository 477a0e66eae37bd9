//! Plan page: fetches a plan and owns its state while the user edits it

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::plan_step_card::StepCard;
use crate::plan::{ParameterEdit, ReservedWords};
use crate::types::{Plan, PlannerSettings};

#[component]
pub fn PlanViewer() -> impl IntoView {
    let params = use_params_map();
    let plan_name = move || {
        let raw = params.read().get("name").unwrap_or_default();
        let decoded = urlencoding::decode(&raw).map(|name| name.into_owned());
        decoded.unwrap_or(raw)
    };

    let data = LocalResource::new(move || {
        let name = plan_name();
        async move {
            let settings = api::get_planner_settings().await?;
            let plan = api::get_plan(&name).await?;
            Ok::<_, String>((settings, plan))
        }
    });

    view! {
        <div class="p-6">
            <Suspense fallback=move || view! { <div class="text-gray-500">"Loading..."</div> }>
                {move || match data.get() {
                    Some(Ok((settings, plan))) => view! {
                        <PlanBoard plan=plan settings=settings />
                    }.into_any(),
                    Some(Err(e)) => {
                        log::error!("Failed to load plan '{}': {}", plan_name(), e);
                        view! {
                            <div class="bg-red-50 border border-red-200 rounded-lg p-4">
                                <p class="text-red-800">
                                    <strong>"Failed to load plan."</strong>
                                    " " {e}
                                </p>
                            </div>
                        }.into_any()
                    }
                    None => view! {
                        <div class="text-gray-500">"Loading plan..."</div>
                    }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

/// Renders every step of `plan` and applies the edits and deletions the
/// cards report.
#[component]
pub fn PlanBoard(plan: Plan, settings: PlannerSettings) -> impl IntoView {
    let title = plan.name.clone();
    let description = plan.description.clone();
    let plan = RwSignal::new(plan);
    let reserved_words = ReservedWords::new(settings.reserved_words);
    let edits_enabled = settings.edits_enabled;
    let step_delete_enabled = settings.step_delete_enabled;
    let (notice, set_notice) = signal(None::<String>);

    let show_notice = move |msg: String| {
        set_notice.set(Some(msg));
        let handle = gloo_timers::callback::Timeout::new(3000, move || {
            set_notice.set(None);
        });
        handle.forget();
    };

    let on_delete_step = Callback::new(move |index: usize| {
        let mut removed = None;
        plan.update(|p| removed = p.remove_step(index));
        match removed {
            Some(step) => {
                log::info!("Removed step {} ({}.{})", index, step.skill_name, step.name);
                show_notice(format!("Step {} deleted", index + 1));
            }
            None => log::warn!("No step with index {} to delete", index),
        }
    });

    // The editing card already shows the new value, so no re-render is needed
    let on_edit_parameter = Callback::new(move |edit: ParameterEdit| {
        let mut applied = false;
        plan.update_untracked(|p| applied = p.apply_edit(&edit));
        if applied {
            log::info!("Updated input '{}' of step {}", edit.key, edit.step_index);
        } else {
            log::debug!("No input '{}' in step {}, edit ignored", edit.key, edit.step_index);
        }
    });

    view! {
        <div class="space-y-4">
            <div>
                <h2 class="text-2xl font-bold">{title}</h2>
                {description.map(|d| view! { <p class="text-sm text-gray-500 mt-1">{d}</p> })}
            </div>

            {move || notice.get().map(|msg| view! {
                <div class="p-3 bg-green-50 border border-green-200 rounded text-green-800 text-sm">
                    {msg}
                </div>
            })}

            {move || {
                let steps = plan.with(|p| p.steps.clone());
                if steps.is_empty() {
                    view! {
                        <div class="text-center py-8 bg-gray-50 rounded-lg border-2 border-dashed border-gray-300">
                            <p class="text-sm text-gray-500">"This plan has no steps."</p>
                        </div>
                    }.into_any()
                } else {
                    let reserved_words = reserved_words.clone();
                    view! {
                        <div class="space-y-3">
                            {steps.into_iter().map(|step| view! {
                                <StepCard
                                    step=step
                                    edits_enabled=edits_enabled
                                    step_delete_enabled=step_delete_enabled
                                    on_delete_step=on_delete_step
                                    on_edit_parameter=on_edit_parameter
                                    reserved_words=reserved_words.clone()
                                />
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
