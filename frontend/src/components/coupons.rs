use chrono::NaiveDate;
use leptos::prelude::*;
use shopadmin_shared::{Coupon, CouponStatus, NewCoupon};

use super::widgets::{ErrorBanner, PageHeader, PlaceholderRow, SearchBox};
use crate::config::use_api;
use crate::screen::ScreenState;

/// 状态徽章：与当前日期比较派生，当天到期仍为 Active
fn status_badge(coupon: &Coupon) -> impl IntoView + use<> {
    let today = chrono::Utc::now().date_naive();
    let status = coupon.status_on(today);
    let class = match status {
        CouponStatus::Active => "badge badge-success",
        CouponStatus::Expired => "badge badge-error",
    };
    view! { <span class=class>{status.as_str()}</span> }
}

#[component]
pub fn CouponsPage() -> impl IntoView {
    let api = use_api();
    let state = ScreenState::<Coupon>::new();

    {
        let api = api.clone();
        Effect::new(move |_| state.load(&api, None));
    }

    let code = RwSignal::new(String::new());
    let discount = RwSignal::new(String::new());
    let expiration = RwSignal::new(String::new());
    let min_order = RwSignal::new(String::new());

    let on_create = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            // 日期取自 <input type="date">，解析失败等同于未填写
            let Ok(expiration_date) =
                NaiveDate::parse_from_str(expiration.get().trim(), "%Y-%m-%d")
            else {
                state.error.set(Some(
                    "Code, discount percentage, and expiration date are required".to_string(),
                ));
                return;
            };
            let draft = NewCoupon {
                code: code.get(),
                discount_percentage: discount.get().trim().parse().unwrap_or(0.0),
                expiration_date,
                min_order_value: min_order.get().trim().parse().ok(),
            };
            state.create(&api, draft, move || {
                code.set(String::new());
                discount.set(String::new());
                expiration.set(String::new());
                min_order.set(String::new());
            });
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-4">
                <PageHeader title="Coupon Management">
                    <SearchBox search=state.search placeholder="Search by code or ID" />
                    <button
                        class="btn btn-primary"
                        on:click=move |_| state.show_create.update(|open| *open = !*open)
                    >
                        {move || if state.show_create.get() { "Cancel" } else { "Create Coupon" }}
                    </button>
                </PageHeader>

                <ErrorBanner error=state.error />

                <Show when=move || state.show_create.get()>
                    <div class="card bg-base-100 shadow-xl">
                        <form class="card-body grid grid-cols-1 md:grid-cols-4 gap-4" on:submit=on_create.clone()>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Coupon Code"</span></label>
                                <input
                                    type="text"
                                    maxlength="20"
                                    class="input input-bordered"
                                    prop:value=code
                                    on:input=move |ev| code.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Discount Percentage"</span></label>
                                <input
                                    type="number"
                                    min="1"
                                    max="100"
                                    class="input input-bordered"
                                    prop:value=discount
                                    on:input=move |ev| discount.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Expiration Date"</span></label>
                                <input
                                    type="date"
                                    class="input input-bordered"
                                    prop:value=expiration
                                    on:input=move |ev| expiration.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Min. Order Value (optional)"</span></label>
                                <input
                                    type="number"
                                    min="0"
                                    step="0.01"
                                    class="input input-bordered"
                                    prop:value=min_order
                                    on:input=move |ev| min_order.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="md:col-span-4">
                                <button type="submit" class="btn btn-primary">"Create Coupon"</button>
                            </div>
                        </form>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <h3 class="card-title p-6 pb-2">
                            "Available Coupons (" {move || state.filtered().len()} ")"
                        </h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Code"</th>
                                        <th>"Discount"</th>
                                        <th>"Expiration"</th>
                                        <th>"Min. Order"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || state.filtered().is_empty()>
                                        <PlaceholderRow
                                            colspan="7"
                                            loading=Signal::derive(move || state.loading.get())
                                            empty_text="No coupons found"
                                        />
                                    </Show>
                                    <For
                                        each=move || state.filtered()
                                        key=|c| c.coupon_id
                                        children={
                                            let api = api.clone();
                                            move |coupon: Coupon| {
                                                let api = api.clone();
                                                let min_order = coupon
                                                    .min_order_value
                                                    .map(|v| format!("${v:.2}"))
                                                    .unwrap_or_else(|| "-".to_string());
                                                view! {
                                                    <tr>
                                                        <td>{coupon.coupon_id}</td>
                                                        <td class="font-mono">{coupon.code.clone()}</td>
                                                        <td>{format!("{}%", coupon.discount_percentage)}</td>
                                                        <td>{coupon.expiration_date.to_string()}</td>
                                                        <td>{min_order}</td>
                                                        <td>{status_badge(&coupon)}</td>
                                                        <td class="text-right">
                                                            <button
                                                                class="btn btn-ghost btn-sm text-error"
                                                                on:click=move |_| state.remove(
                                                                    &api,
                                                                    coupon.coupon_id,
                                                                    "Are you sure you want to delete this coupon?",
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
