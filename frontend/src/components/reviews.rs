use leptos::prelude::*;
use shopadmin_shared::{Review, ReviewPatch};

use super::icons::Star;
use super::widgets::{ErrorBanner, PageHeader, PlaceholderRow, SearchBox};
use crate::config::use_api;
use crate::screen::ScreenState;

fn stars(rating: u8) -> impl IntoView + use<> {
    (1..=5u8)
        .map(|i| {
            let class = if i <= rating {
                "h-4 w-4 inline text-warning"
            } else {
                "h-4 w-4 inline opacity-20"
            };
            view! { <Star attr:class=class /> }
        })
        .collect_view()
}

/// 评分汇总卡：平均分 + 各星级条形分布
#[component]
fn RatingSummary(state: ScreenState<Review>) -> impl IntoView {
    let average = move || {
        state.items.with(|c| {
            let items = c.items();
            if items.is_empty() {
                0.0
            } else {
                items.iter().map(|r| r.rating as f64).sum::<f64>() / items.len() as f64
            }
        })
    };
    let count_for = move |star: u8| {
        state
            .items
            .with(|c| c.items().iter().filter(|r| r.rating == star).count())
    };
    let total = move || state.items.with(|c| c.items().len());

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body flex-row flex-wrap items-center gap-8">
                <div class="text-center">
                    <div class="text-4xl font-bold">{move || format!("{:.1}", average())}</div>
                    <div class="text-sm text-base-content/60">
                        {move || format!("{} reviews", total())}
                    </div>
                </div>
                <div class="flex-1 min-w-48 space-y-1">
                    {(1..=5u8)
                        .rev()
                        .map(|star| {
                            let width = move || {
                                let total = total();
                                if total == 0 {
                                    0.0
                                } else {
                                    count_for(star) as f64 / total as f64 * 100.0
                                }
                            };
                            view! {
                                <div class="flex items-center gap-2 text-sm">
                                    <span class="w-3">{star}</span>
                                    <Star attr:class="h-3 w-3 text-warning" />
                                    <div class="flex-1 bg-base-200 rounded h-2">
                                        <div
                                            class="bg-warning rounded h-2"
                                            style:width=move || format!("{:.0}%", width())
                                        ></div>
                                    </div>
                                    <span class="w-8 text-right">{move || count_for(star)}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let api = use_api();
    let state = ScreenState::<Review>::new();

    {
        let api = api.clone();
        Effect::new(move |_| state.load(&api, None));
    }

    // 单条查询子视图
    let lookup_id = RwSignal::new(String::new());
    let single = RwSignal::new(None::<Review>);

    let edit_rating = RwSignal::new(String::new());
    let edit_text = RwSignal::new(String::new());

    let on_lookup = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            match lookup_id.get().trim().parse::<i64>() {
                Ok(id) => state.load_single(&api, id, single),
                Err(_) => state.error.set(Some("Please enter a valid review ID".to_string())),
            }
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-4">
                <PageHeader title="Review Management">
                    <SearchBox search=state.search placeholder="Search by review, user or product ID" />
                </PageHeader>

                <ErrorBanner error=state.error />

                <RatingSummary state=state />

                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body flex-row items-end gap-4" on:submit=on_lookup>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Look up a single review"</span></label>
                            <input
                                type="number"
                                min="1"
                                placeholder="Review ID"
                                class="input input-bordered"
                                prop:value=lookup_id
                                on:input=move |ev| lookup_id.set(event_target_value(&ev))
                            />
                        </div>
                        <button type="submit" class="btn btn-primary">"Fetch"</button>
                        <Show when=move || single.get().is_some()>
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| single.set(None)
                            >
                                "Clear"
                            </button>
                        </Show>
                    </form>
                    <Show when=move || single.get().is_some()>
                        {move || {
                            single
                                .get()
                                .map(|review| {
                                    view! {
                                        <div class="card-body pt-0">
                                            <div class="alert">
                                                <div>
                                                    <div class="font-bold">
                                                        "Review #" {review.review_id}
                                                        " (user " {review.user_id}
                                                        ", product " {review.product_id} ")"
                                                    </div>
                                                    <div>{stars(review.rating)}</div>
                                                    <div>
                                                        {review
                                                            .review_text
                                                            .clone()
                                                            .unwrap_or_else(|| "No review text".to_string())}
                                                    </div>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                        }}
                    </Show>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <h3 class="card-title p-6 pb-2">
                            "All Reviews (" {move || state.filtered().len()} ")"
                        </h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"User"</th>
                                        <th>"Product"</th>
                                        <th>"Rating"</th>
                                        <th>"Review"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || state.filtered().is_empty()>
                                        <PlaceholderRow
                                            colspan="6"
                                            loading=Signal::derive(move || state.loading.get())
                                            empty_text="No reviews found"
                                        />
                                    </Show>
                                    <For
                                        each=move || state.filtered()
                                        key=|r| r.review_id
                                        children={
                                            let api = api.clone();
                                            move |review: Review| {
                                                let api = api.clone();
                                                let id = review.review_id;
                                                let editing = move || state.edit_id.get() == Some(id);

                                                let begin_edit = {
                                                    let text = review.review_text.clone().unwrap_or_default();
                                                    let rating = review.rating;
                                                    move |_| {
                                                        edit_rating.set(rating.to_string());
                                                        edit_text.set(text.clone());
                                                        state.edit_id.set(Some(id));
                                                    }
                                                };

                                                let save_edit = {
                                                    let api = api.clone();
                                                    let review = review.clone();
                                                    move |_| {
                                                        let rating = edit_rating
                                                            .get()
                                                            .trim()
                                                            .parse::<u8>()
                                                            .unwrap_or(review.rating)
                                                            .clamp(1, 5);
                                                        let patch = ReviewPatch {
                                                            rating,
                                                            review_text: edit_text.get(),
                                                        };
                                                        let patched = Review {
                                                            rating,
                                                            review_text: Some(patch.review_text.clone()),
                                                            ..review.clone()
                                                        };
                                                        state.update(&api, id, patch, patched);
                                                    }
                                                };

                                                view! {
                                                    <tr>
                                                        <td>{review.review_id}</td>
                                                        <td>{review.user_id}</td>
                                                        <td>{review.product_id}</td>
                                                        <td>
                                                            <Show
                                                                when=editing
                                                                fallback={
                                                                    let rating = review.rating;
                                                                    move || stars(rating)
                                                                }
                                                            >
                                                                <input
                                                                    type="number"
                                                                    min="1"
                                                                    max="5"
                                                                    class="input input-bordered input-sm w-20"
                                                                    prop:value=edit_rating
                                                                    on:input=move |ev| {
                                                                        edit_rating.set(event_target_value(&ev))
                                                                    }
                                                                />
                                                            </Show>
                                                        </td>
                                                        <td class="max-w-xs">
                                                            <Show
                                                                when=editing
                                                                fallback={
                                                                    let text = review
                                                                        .review_text
                                                                        .clone()
                                                                        .unwrap_or_else(|| "-".to_string());
                                                                    move || text.clone()
                                                                }
                                                            >
                                                                <input
                                                                    type="text"
                                                                    class="input input-bordered input-sm w-full"
                                                                    prop:value=edit_text
                                                                    on:input=move |ev| {
                                                                        edit_text.set(event_target_value(&ev))
                                                                    }
                                                                />
                                                            </Show>
                                                        </td>
                                                        <td class="text-right space-x-1">
                                                            <Show
                                                                when=editing
                                                                fallback={
                                                                    let api = api.clone();
                                                                    let begin_edit = begin_edit.clone();
                                                                    move || {
                                                                        let api = api.clone();
                                                                        let begin_edit = begin_edit.clone();
                                                                        view! {
                                                                            <button
                                                                                class="btn btn-ghost btn-sm"
                                                                                on:click=begin_edit
                                                                            >
                                                                                "Edit"
                                                                            </button>
                                                                            <button
                                                                                class="btn btn-ghost btn-sm text-error"
                                                                                on:click=move |_| state.remove(
                                                                                    &api,
                                                                                    id,
                                                                                    "Are you sure you want to delete this review?",
                                                                                )
                                                                            >
                                                                                "Delete"
                                                                            </button>
                                                                        }
                                                                    }
                                                                }
                                                            >
                                                                {
                                                                    let save_edit = save_edit.clone();
                                                                    view! {
                                                                        <button
                                                                            class="btn btn-primary btn-sm"
                                                                            on:click=save_edit
                                                                        >
                                                                            "Save"
                                                                        </button>
                                                                        <button
                                                                            class="btn btn-ghost btn-sm"
                                                                            on:click=move |_| state.edit_id.set(None)
                                                                        >
                                                                            "Cancel"
                                                                        </button>
                                                                    }
                                                                }
                                                            </Show>
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
