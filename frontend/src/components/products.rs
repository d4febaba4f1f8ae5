use leptos::prelude::*;
use shopadmin_shared::{NewProduct, Product};

use super::widgets::{ErrorBanner, PageHeader, PlaceholderRow, SearchBox, non_empty};
use crate::config::use_api;
use crate::screen::ScreenState;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let api = use_api();
    let state = ScreenState::<Product>::new();

    {
        let api = api.clone();
        Effect::new(move |_| state.load(&api, None));
    }

    let product_name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());

    let on_create = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let draft = NewProduct {
                product_name: product_name.get(),
                price: price.get().trim().parse().unwrap_or(0.0),
                category: non_empty(category.get()),
            };
            state.create(&api, draft, move || {
                product_name.set(String::new());
                price.set(String::new());
                category.set(String::new());
            });
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-4">
                <PageHeader title="Product Management">
                    <SearchBox search=state.search placeholder="Search by ID, name or category" />
                    <button
                        class="btn btn-primary"
                        on:click=move |_| state.show_create.update(|open| *open = !*open)
                    >
                        {move || if state.show_create.get() { "Cancel" } else { "Create Product" }}
                    </button>
                </PageHeader>

                <ErrorBanner error=state.error />

                <Show when=move || state.show_create.get()>
                    <div class="card bg-base-100 shadow-xl">
                        <form class="card-body grid grid-cols-1 md:grid-cols-3 gap-4" on:submit=on_create.clone()>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Product Name"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=product_name
                                    on:input=move |ev| product_name.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Price"</span></label>
                                <input
                                    type="number"
                                    min="0"
                                    step="0.01"
                                    class="input input-bordered"
                                    prop:value=price
                                    on:input=move |ev| price.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Category (optional)"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=category
                                    on:input=move |ev| category.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="md:col-span-3">
                                <button type="submit" class="btn btn-primary">"Create Product"</button>
                            </div>
                        </form>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <h3 class="card-title p-6 pb-2">
                            "Products (" {move || state.filtered().len()} ")"
                        </h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Name"</th>
                                        <th>"Price"</th>
                                        <th>"Category"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || state.filtered().is_empty()>
                                        <PlaceholderRow
                                            colspan="5"
                                            loading=Signal::derive(move || state.loading.get())
                                            empty_text="No products found"
                                        />
                                    </Show>
                                    <For
                                        each=move || state.filtered()
                                        key=|p| p.product_id
                                        children={
                                            let api = api.clone();
                                            move |product: Product| {
                                                let api = api.clone();
                                                view! {
                                                    <tr>
                                                        <td>{product.product_id}</td>
                                                        <td>{product.product_name.clone()}</td>
                                                        <td>{format!("${:.2}", product.price)}</td>
                                                        <td>{product.category.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                        <td class="text-right">
                                                            <button
                                                                class="btn btn-ghost btn-sm text-error"
                                                                on:click=move |_| state.remove(
                                                                    &api,
                                                                    product.product_id,
                                                                    "Are you sure you want to delete this product?",
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
