use leptos::prelude::*;
use shopadmin_shared::WishlistItem;

use super::widgets::{ErrorBanner, PageHeader, PlaceholderRow, SearchBox};
use crate::config::use_api;
use crate::screen::ScreenState;

/// 心愿单为只读集合，支持全量 / 按用户 / 单条三种取数方式
#[component]
pub fn WishlistPage() -> impl IntoView {
    let api = use_api();
    let state = ScreenState::<WishlistItem>::new();

    {
        let api = api.clone();
        Effect::new(move |_| state.load(&api, None));
    }

    let user_filter = RwSignal::new(String::new());
    let lookup_id = RwSignal::new(String::new());
    let single = RwSignal::new(None::<WishlistItem>);

    let on_user_filter = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            match user_filter.get().trim().parse::<i64>() {
                // 按用户过滤走服务端范围查询
                Ok(id) => state.load(&api, Some(&format!("/api/wishlist/user/{id}"))),
                Err(_) => state.error.set(Some("Please enter a valid user ID".to_string())),
            }
        }
    };

    let show_all = {
        let api = api.clone();
        move |_| {
            user_filter.set(String::new());
            state.load(&api, None);
        }
    };

    let on_lookup = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            match lookup_id.get().trim().parse::<i64>() {
                Ok(id) => state.load_single(&api, id, single),
                Err(_) => state.error.set(Some("Please enter a valid wishlist ID".to_string())),
            }
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-4">
                <PageHeader title="Wishlist Management">
                    <SearchBox search=state.search placeholder="Search by ID, user or product" />
                </PageHeader>

                <ErrorBanner error=state.error />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body flex-row flex-wrap items-end gap-4">
                        <form class="flex items-end gap-2" on:submit=on_user_filter>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Filter by user"</span></label>
                                <input
                                    type="number"
                                    min="1"
                                    placeholder="User ID"
                                    class="input input-bordered"
                                    prop:value=user_filter
                                    on:input=move |ev| user_filter.set(event_target_value(&ev))
                                />
                            </div>
                            <button type="submit" class="btn btn-primary">"Filter"</button>
                            <button type="button" class="btn btn-ghost" on:click=show_all>
                                "Show All"
                            </button>
                        </form>
                        <form class="flex items-end gap-2" on:submit=on_lookup>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Look up a single item"</span></label>
                                <input
                                    type="number"
                                    min="1"
                                    placeholder="Wishlist ID"
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
                    </div>
                    <Show when=move || single.get().is_some()>
                        {move || {
                            single
                                .get()
                                .map(|item| {
                                    view! {
                                        <div class="card-body pt-0">
                                            <div class="alert">
                                                <span>
                                                    "Wishlist #" {item.wishlist_id}
                                                    ": user " {item.user_id}
                                                    " wants product " {item.product_id}
                                                    {item
                                                        .product_name
                                                        .clone()
                                                        .map(|name| format!(" ({name})"))
                                                        .unwrap_or_default()}
                                                </span>
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
                            "Wishlist Items (" {move || state.filtered().len()} ")"
                        </h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"User ID"</th>
                                        <th>"Product ID"</th>
                                        <th>"Product Name"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || state.filtered().is_empty()>
                                        <PlaceholderRow
                                            colspan="5"
                                            loading=Signal::derive(move || state.loading.get())
                                            empty_text="No wishlist items found"
                                        />
                                    </Show>
                                    <For
                                        each=move || state.filtered()
                                        key=|w| w.wishlist_id
                                        children={
                                            let api = api.clone();
                                            move |item: WishlistItem| {
                                                let api = api.clone();
                                                view! {
                                                    <tr>
                                                        <td>{item.wishlist_id}</td>
                                                        <td>{item.user_id}</td>
                                                        <td>{item.product_id}</td>
                                                        <td>
                                                            {item
                                                                .product_name
                                                                .clone()
                                                                .unwrap_or_else(|| "-".to_string())}
                                                        </td>
                                                        <td class="text-right">
                                                            <button
                                                                class="btn btn-ghost btn-sm text-error"
                                                                on:click=move |_| state.remove(
                                                                    &api,
                                                                    item.wishlist_id,
                                                                    "Are you sure you want to delete this wishlist item?",
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
