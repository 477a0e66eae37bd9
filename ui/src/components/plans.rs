use leptos::prelude::*;
use leptos_router::components::A;

use crate::api;

#[component]
pub fn Plans() -> impl IntoView {
    let plans = LocalResource::new(|| async move { api::list_plans().await });

    view! {
        <div class="p-6">
            <h2 class="text-2xl font-bold mb-6">"Plans"</h2>

            <Suspense fallback=move || view! { <div class="text-gray-500">"Loading..."</div> }>
                {move || match plans.get() {
                    Some(Ok(list)) if list.is_empty() => view! {
                        <div class="text-center py-8 bg-gray-50 rounded-lg border-2 border-dashed border-gray-300">
                            <p class="text-sm text-gray-500">
                                "No plans loaded. Add plan files under config/plans to preview them here."
                            </p>
                        </div>
                    }.into_any(),
                    Some(Ok(list)) => view! {
                        <div class="space-y-3">
                            {list.into_iter().map(|plan| {
                                let href = format!("/plans/{}", urlencoding::encode(&plan.name));
                                view! {
                                    <A href=href attr:class="block p-4 bg-white rounded-lg shadow hover:bg-gray-50 transition-colors">
                                        <div class="flex justify-between items-center">
                                            <span class="font-semibold text-gray-900">{plan.name}</span>
                                            <span class="px-2 py-0.5 text-xs bg-gray-100 text-gray-600 rounded">
                                                {format!("{} steps", plan.steps_count)}
                                            </span>
                                        </div>
                                        {plan.description.map(|d| view! {
                                            <p class="text-sm text-gray-500 mt-1">{d}</p>
                                        })}
                                    </A>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any(),
                    Some(Err(e)) => {
                        log::error!("Failed to load plans: {}", e);
                        view! {
                            <div class="bg-red-50 border border-red-200 rounded-lg p-4">
                                <p class="text-red-800">
                                    <strong>"Failed to load plans."</strong>
                                    " " {e}
                                </p>
                            </div>
                        }.into_any()
                    }
                    None => view! {
                        <div class="text-gray-500">"Loading plans..."</div>
                    }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
