use leptos::prelude::*;
use shopadmin_shared::{AnalyticsEvent, MetricTotal, NewAnalyticsEvent, summarize};

use super::widgets::{ErrorBanner, PageHeader, PlaceholderRow, SearchBox, non_empty};
use crate::config::use_api;
use crate::screen::ScreenState;

/// 按指标名汇总的条形图，随基础集合整体重算
#[component]
fn MetricChart(state: ScreenState<AnalyticsEvent>) -> impl IntoView {
    let totals = move || state.items.with(|c| summarize(c.items()));

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"Totals by Metric"</h3>
                <Show
                    when=move || !totals().is_empty()
                    fallback=|| view! { <p class="text-base-content/50">"No data to chart"</p> }
                >
                    <div class="space-y-2">
                        {move || {
                            let totals = totals();
                            let max = totals
                                .iter()
                                .map(|t| t.total)
                                .fold(0.0_f64, f64::max)
                                .max(1.0);
                            totals
                                .into_iter()
                                .map(|MetricTotal { metric_name, total }| {
                                    let width = total / max * 100.0;
                                    view! {
                                        <div class="flex items-center gap-2 text-sm">
                                            <span class="w-36 truncate font-mono">{metric_name}</span>
                                            <div class="flex-1 bg-base-200 rounded h-4">
                                                <div
                                                    class="bg-primary rounded h-4"
                                                    style:width=format!("{width:.0}%")
                                                ></div>
                                            </div>
                                            <span class="w-20 text-right">{format!("{total:.1}")}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let api = use_api();
    let state = ScreenState::<AnalyticsEvent>::new();

    {
        let api = api.clone();
        Effect::new(move |_| state.load(&api, None));
    }

    let metric_name = RwSignal::new(String::new());
    let metric_value = RwSignal::new(String::new());
    let user_id = RwSignal::new(String::new());
    let product_id = RwSignal::new(String::new());
    let session_id = RwSignal::new(String::new());
    let source = RwSignal::new(String::new());

    let on_create = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let draft = NewAnalyticsEvent {
                metric_name: metric_name.get(),
                metric_value: metric_value.get().trim().parse().unwrap_or(0.0),
                user_id: user_id.get().trim().parse().ok(),
                product_id: product_id.get().trim().parse().ok(),
                session_id: non_empty(session_id.get()),
                source: non_empty(source.get()),
            };
            state.create(&api, draft, move || {
                metric_name.set(String::new());
                metric_value.set(String::new());
                user_id.set(String::new());
                product_id.set(String::new());
                session_id.set(String::new());
                source.set(String::new());
            });
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-4">
                <PageHeader title="Analytics">
                    <SearchBox search=state.search placeholder="Search by ID, metric or source" />
                    <button
                        class="btn btn-primary"
                        on:click=move |_| state.show_create.update(|open| *open = !*open)
                    >
                        {move || if state.show_create.get() { "Cancel" } else { "Record Event" }}
                    </button>
                </PageHeader>

                <ErrorBanner error=state.error />

                <MetricChart state=state />

                <Show when=move || state.show_create.get()>
                    <div class="card bg-base-100 shadow-xl">
                        <form class="card-body grid grid-cols-1 md:grid-cols-3 gap-4" on:submit=on_create.clone()>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Metric Name"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=metric_name
                                    on:input=move |ev| metric_name.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Metric Value"</span></label>
                                <input
                                    type="number"
                                    step="any"
                                    class="input input-bordered"
                                    prop:value=metric_value
                                    on:input=move |ev| metric_value.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"User ID (optional)"</span></label>
                                <input
                                    type="number"
                                    min="1"
                                    class="input input-bordered"
                                    prop:value=user_id
                                    on:input=move |ev| user_id.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Product ID (optional)"</span></label>
                                <input
                                    type="number"
                                    min="1"
                                    class="input input-bordered"
                                    prop:value=product_id
                                    on:input=move |ev| product_id.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Session ID (optional)"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=session_id
                                    on:input=move |ev| session_id.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Source (optional)"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=source
                                    on:input=move |ev| source.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="md:col-span-3">
                                <button type="submit" class="btn btn-primary">"Record Event"</button>
                            </div>
                        </form>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <h3 class="card-title p-6 pb-2">
                            "Events (" {move || state.filtered().len()} ")"
                        </h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Metric"</th>
                                        <th>"Value"</th>
                                        <th>"User"</th>
                                        <th>"Product"</th>
                                        <th>"Source"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || state.filtered().is_empty()>
                                        <PlaceholderRow
                                            colspan="7"
                                            loading=Signal::derive(move || state.loading.get())
                                            empty_text="No analytics events found"
                                        />
                                    </Show>
                                    <For
                                        each=move || state.filtered()
                                        key=|e| e.analytics_id
                                        children={
                                            let api = api.clone();
                                            move |event: AnalyticsEvent| {
                                                let api = api.clone();
                                                let opt_id = |v: Option<i64>| {
                                                    v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
                                                };
                                                view! {
                                                    <tr>
                                                        <td>{event.analytics_id}</td>
                                                        <td class="font-mono">{event.metric_name.clone()}</td>
                                                        <td>{format!("{:.1}", event.metric_value)}</td>
                                                        <td>{opt_id(event.user_id)}</td>
                                                        <td>{opt_id(event.product_id)}</td>
                                                        <td>{event.source.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                        <td class="text-right">
                                                            <button
                                                                class="btn btn-ghost btn-sm text-error"
                                                                on:click=move |_| state.remove(
                                                                    &api,
                                                                    event.analytics_id,
                                                                    "Are you sure you want to delete this analytics record?",
                                                                )
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
