use leptos::prelude::*;
use shopadmin_shared::{ApprovalStatus, NewSeller, Seller, SellerPatch};

use super::widgets::{ErrorBanner, PageHeader, PlaceholderRow, SearchBox};
use crate::config::use_api;
use crate::screen::ScreenState;

fn status_badge(status: ApprovalStatus) -> impl IntoView + use<> {
    let class = match status {
        ApprovalStatus::Approved => "badge badge-success",
        ApprovalStatus::Rejected => "badge badge-error",
        ApprovalStatus::Pending => "badge badge-warning",
    };
    view! { <span class=class>{status.as_str()}</span> }
}

#[component]
pub fn SellersPage() -> impl IntoView {
    let api = use_api();
    let state = ScreenState::<Seller>::new();

    {
        let api = api.clone();
        Effect::new(move |_| state.load(&api, None));
    }

    let user_id = RwSignal::new(String::new());
    let store_name = RwSignal::new(String::new());
    let approval = RwSignal::new("pending".to_string());

    // 行内编辑草稿，进入编辑态时用当前行的值填充
    let edit_store_name = RwSignal::new(String::new());
    let edit_approval = RwSignal::new("pending".to_string());

    let on_create = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let draft = NewSeller {
                user_id: user_id.get().trim().parse().unwrap_or(0),
                store_name: store_name.get(),
                approval_status: ApprovalStatus::from_form_value(&approval.get()),
            };
            state.create(&api, draft, move || {
                user_id.set(String::new());
                store_name.set(String::new());
                approval.set("pending".to_string());
            });
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-4">
                <PageHeader title="Seller Management">
                    <SearchBox search=state.search placeholder="Search by ID, store or user" />
                    <button
                        class="btn btn-primary"
                        on:click=move |_| state.show_create.update(|open| *open = !*open)
                    >
                        {move || if state.show_create.get() { "Cancel" } else { "Add Seller" }}
                    </button>
                </PageHeader>

                <ErrorBanner error=state.error />

                <Show when=move || state.show_create.get()>
                    <div class="card bg-base-100 shadow-xl">
                        <form class="card-body grid grid-cols-1 md:grid-cols-3 gap-4" on:submit=on_create.clone()>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"User ID"</span></label>
                                <input
                                    type="number"
                                    min="1"
                                    class="input input-bordered"
                                    prop:value=user_id
                                    on:input=move |ev| user_id.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Store Name"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=store_name
                                    on:input=move |ev| store_name.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Approval Status"</span></label>
                                <select
                                    class="select select-bordered"
                                    prop:value=approval
                                    on:change=move |ev| approval.set(event_target_value(&ev))
                                >
                                    <option value="pending">"Pending"</option>
                                    <option value="approved">"Approved"</option>
                                    <option value="rejected">"Rejected"</option>
                                </select>
                            </div>
                            <div class="md:col-span-3">
                                <button type="submit" class="btn btn-primary">"Add Seller"</button>
                            </div>
                        </form>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <h3 class="card-title p-6 pb-2">
                            "Sellers (" {move || state.filtered().len()} ")"
                        </h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"User ID"</th>
                                        <th>"Store Name"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || state.filtered().is_empty()>
                                        <PlaceholderRow
                                            colspan="5"
                                            loading=Signal::derive(move || state.loading.get())
                                            empty_text="No sellers found"
                                        />
                                    </Show>
                                    <For
                                        each=move || state.filtered()
                                        key=|s| s.seller_id
                                        children={
                                            let api = api.clone();
                                            move |seller: Seller| {
                                                let api = api.clone();
                                                let id = seller.seller_id;
                                                let editing = move || state.edit_id.get() == Some(id);

                                                let begin_edit = {
                                                    let store = seller.store_name.clone();
                                                    let status = seller.approval_status;
                                                    move |_| {
                                                        edit_store_name.set(store.clone());
                                                        edit_approval.set(status.as_str().to_string());
                                                        state.edit_id.set(Some(id));
                                                    }
                                                };

                                                let save_edit = {
                                                    let api = api.clone();
                                                    let seller = seller.clone();
                                                    move |_| {
                                                        let patch = SellerPatch {
                                                            store_name: edit_store_name.get(),
                                                            approval_status: ApprovalStatus::from_form_value(
                                                                &edit_approval.get(),
                                                            ),
                                                        };
                                                        let patched = Seller {
                                                            store_name: patch.store_name.clone(),
                                                            approval_status: patch.approval_status,
                                                            ..seller.clone()
                                                        };
                                                        state.update(&api, id, patch, patched);
                                                    }
                                                };

                                                view! {
                                                    <tr>
                                                        <td>{seller.seller_id}</td>
                                                        <td>{seller.user_id}</td>
                                                        <td>
                                                            <Show
                                                                when=editing
                                                                fallback={
                                                                    let store = seller.store_name.clone();
                                                                    move || store.clone()
                                                                }
                                                            >
                                                                <input
                                                                    type="text"
                                                                    class="input input-bordered input-sm"
                                                                    prop:value=edit_store_name
                                                                    on:input=move |ev| {
                                                                        edit_store_name.set(event_target_value(&ev))
                                                                    }
                                                                />
                                                            </Show>
                                                        </td>
                                                        <td>
                                                            <Show
                                                                when=editing
                                                                fallback={
                                                                    let status = seller.approval_status;
                                                                    move || status_badge(status)
                                                                }
                                                            >
                                                                <select
                                                                    class="select select-bordered select-sm"
                                                                    prop:value=edit_approval
                                                                    on:change=move |ev| {
                                                                        edit_approval.set(event_target_value(&ev))
                                                                    }
                                                                >
                                                                    <option value="pending">"Pending"</option>
                                                                    <option value="approved">"Approved"</option>
                                                                    <option value="rejected">"Rejected"</option>
                                                                </select>
                                                            </Show>
                                                        </td>
                                                        <td class="text-right space-x-1">
                                                            <Show
                                                                when=editing
                                                                fallback={
                                                                    let api = api.clone();
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
                                                                                    "Are you sure you want to delete this seller?",
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
