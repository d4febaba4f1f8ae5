use leptos::prelude::*;
use shopadmin_shared::{OrderItem, OrderItemPatch};

use super::widgets::{ErrorBanner, PageHeader, PlaceholderRow, SearchBox};
use crate::config::use_api;
use crate::screen::ScreenState;

/// 订单项只能行内修改数量与价格，不提供创建入口
#[component]
pub fn OrderItemsPage() -> impl IntoView {
    let api = use_api();
    let state = ScreenState::<OrderItem>::new();

    {
        let api = api.clone();
        Effect::new(move |_| state.load(&api, None));
    }

    // 行内编辑草稿，留空的字段不进补丁
    let edit_quantity = RwSignal::new(String::new());
    let edit_price = RwSignal::new(String::new());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-4">
                <PageHeader title="Order Items">
                    <SearchBox search=state.search placeholder="Search by item, order or product ID" />
                </PageHeader>

                <ErrorBanner error=state.error />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <h3 class="card-title p-6 pb-2">
                            "Order Items (" {move || state.filtered().len()} ")"
                        </h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Order ID"</th>
                                        <th>"Product ID"</th>
                                        <th>"Quantity"</th>
                                        <th>"Price"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || state.filtered().is_empty()>
                                        <PlaceholderRow
                                            colspan="6"
                                            loading=Signal::derive(move || state.loading.get())
                                            empty_text="No order items found"
                                        />
                                    </Show>
                                    <For
                                        each=move || state.filtered()
                                        key=|i| i.order_item_id
                                        children={
                                            let api = api.clone();
                                            move |item: OrderItem| {
                                                let api = api.clone();
                                                let id = item.order_item_id;
                                                let editing = move || state.edit_id.get() == Some(id);

                                                let begin_edit = move |_| {
                                                    edit_quantity.set(String::new());
                                                    edit_price.set(String::new());
                                                    state.edit_id.set(Some(id));
                                                };

                                                let save_edit = {
                                                    let api = api.clone();
                                                    let item = item.clone();
                                                    move |_| {
                                                        let patch = OrderItemPatch {
                                                            quantity: edit_quantity.get().trim().parse().ok(),
                                                            price: edit_price.get().trim().parse().ok(),
                                                        };
                                                        if patch.is_empty() {
                                                            state.error.set(Some(
                                                                "Please enter quantity or price to update"
                                                                    .to_string(),
                                                            ));
                                                            return;
                                                        }
                                                        let patched = OrderItem {
                                                            quantity: patch.quantity.unwrap_or(item.quantity),
                                                            price: patch.price.unwrap_or(item.price),
                                                            ..item.clone()
                                                        };
                                                        state.update(&api, id, patch, patched);
                                                    }
                                                };

                                                view! {
                                                    <tr>
                                                        <td>{item.order_item_id}</td>
                                                        <td>{item.order_id}</td>
                                                        <td>{item.product_id.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                                        <td>
                                                            <Show
                                                                when=editing
                                                                fallback={
                                                                    let quantity = item.quantity;
                                                                    move || quantity.to_string()
                                                                }
                                                            >
                                                                <input
                                                                    type="number"
                                                                    min="1"
                                                                    placeholder="New quantity"
                                                                    class="input input-bordered input-sm w-28"
                                                                    prop:value=edit_quantity
                                                                    on:input=move |ev| {
                                                                        edit_quantity.set(event_target_value(&ev))
                                                                    }
                                                                />
                                                            </Show>
                                                        </td>
                                                        <td>
                                                            <Show
                                                                when=editing
                                                                fallback={
                                                                    let price = item.price;
                                                                    move || format!("${price:.2}")
                                                                }
                                                            >
                                                                <input
                                                                    type="number"
                                                                    min="0"
                                                                    step="0.01"
                                                                    placeholder="New price"
                                                                    class="input input-bordered input-sm w-28"
                                                                    prop:value=edit_price
                                                                    on:input=move |ev| {
                                                                        edit_price.set(event_target_value(&ev))
                                                                    }
                                                                />
                                                            </Show>
                                                        </td>
                                                        <td class="text-right space-x-1">
                                                            <Show
                                                                when=editing
                                                                fallback={
                                                                    let api = api.clone();
                                                                    move || {
                                                                        let api = api.clone();
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
                                                                                    "Are you sure you want to delete this order item?",
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
