use leptos::prelude::*;

use super::icons::LogOut;
use crate::auth::{logout, use_auth};
use crate::web::router::use_navigate;

/// 导航菜单项：未实现的区域统一指向 /notfound
const MENU_ITEMS: &[(&str, &str)] = &[
    ("Users", "/users"),
    ("Products", "/products"),
    ("Order Items", "/orderitems"),
    ("Analytics", "/analytics"),
    ("Coupons", "/coupons"),
    ("Wishlist", "/wishlist"),
    ("Reviews", "/reviews"),
    ("Notifications", "/notifications"),
    ("Sellers", "/sellers"),
    ("Carousel Images", "/notfound"),
    ("Categories", "/notfound"),
    ("Offers", "/notfound"),
    ("Cart Items", "/notfound"),
    ("Deliveries", "/notfound"),
    ("Disputes", "/notfound"),
    ("Orders", "/notfound"),
    ("Roles", "/notfound"),
    ("Transactions", "/notfound"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        logout(&auth_ctx);
        // 重定向由路由服务的认证状态监听处理
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <a class="btn btn-ghost text-xl">"Admin Dashboard"</a>
                    </div>
                    <div class="flex-none">
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Logout"
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-4">
                    {MENU_ITEMS
                        .iter()
                        .map(|(name, path)| {
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    class="card bg-base-100 shadow hover:shadow-xl transition-shadow p-6 items-center"
                                    on:click=move |_| navigate(path)
                                >
                                    <h3 class="card-title text-base">{*name}</h3>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
