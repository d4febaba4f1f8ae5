//! ShopAdmin 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `config`: API 客户端的注入
//! - `screen`: 通用的列表-过滤-变更引擎
//! - `components`: UI 组件层（九个资源屏幕 + 登录 + 控制面板）

mod api;
mod auth;
mod components {
    pub mod analytics;
    pub mod coupons;
    pub mod dashboard;
    mod icons;
    pub mod login;
    pub mod notifications;
    pub mod order_items;
    pub mod products;
    pub mod reviews;
    pub mod sellers;
    pub mod under_development;
    pub mod users;
    mod widgets;
    pub mod wishlist;
}
mod config;
mod screen;
mod session;

// 原生 Web API 之上的路由层
pub(crate) mod web;

use leptos::prelude::*;

use crate::auth::{AuthContext, init_auth};
use crate::components::analytics::AnalyticsPage;
use crate::components::coupons::CouponsPage;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::notifications::NotificationsPage;
use crate::components::order_items::OrderItemsPage;
use crate::components::products::ProductsPage;
use crate::components::reviews::ReviewsPage;
use crate::components::sellers::SellersPage;
use crate::components::under_development::UnderDevelopmentPage;
use crate::components::users::UsersPage;
use crate::components::wishlist::WishlistPage;
use crate::config::provide_api;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Users => view! { <UsersPage /> }.into_any(),
        AppRoute::Products => view! { <ProductsPage /> }.into_any(),
        AppRoute::Coupons => view! { <CouponsPage /> }.into_any(),
        AppRoute::Reviews => view! { <ReviewsPage /> }.into_any(),
        AppRoute::Sellers => view! { <SellersPage /> }.into_any(),
        AppRoute::OrderItems => view! { <OrderItemsPage /> }.into_any(),
        AppRoute::Wishlist => view! { <WishlistPage /> }.into_any(),
        AppRoute::Analytics => view! { <AnalyticsPage /> }.into_any(),
        AppRoute::Notifications => view! { <NotificationsPage /> }.into_any(),
        AppRoute::UnderDevelopment => view! { <UnderDevelopmentPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 初始化认证状态（从 LocalStorage 恢复会话）
    init_auth(&auth_ctx);

    // 3. 注入 API 客户端
    provide_api();

    // 4. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 5. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
