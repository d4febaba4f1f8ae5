//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其守卫属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由，唯一的公开入口)
    #[default]
    Login,
    Dashboard,
    Users,
    Products,
    Coupons,
    Reviews,
    Sellers,
    OrderItems,
    Wishlist,
    Analytics,
    Notifications,
    /// 未实现页面（未匹配路径的统一落点）
    UnderDevelopment,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/users" => Self::Users,
            "/products" => Self::Products,
            "/coupons" => Self::Coupons,
            "/reviews" => Self::Reviews,
            "/sellers" => Self::Sellers,
            "/orderitems" => Self::OrderItems,
            "/wishlist" => Self::Wishlist,
            "/analytics" => Self::Analytics,
            "/notifications" => Self::Notifications,
            _ => Self::UnderDevelopment,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Dashboard => "/dashboard",
            Self::Users => "/users",
            Self::Products => "/products",
            Self::Coupons => "/coupons",
            Self::Reviews => "/reviews",
            Self::Sellers => "/sellers",
            Self::OrderItems => "/orderitems",
            Self::Wishlist => "/wishlist",
            Self::Analytics => "/analytics",
            Self::Notifications => "/notifications",
            Self::UnderDevelopment => "/notfound",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    ///
    /// 除登录页与未实现页外全部受保护。
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::UnderDevelopment)
    }

    /// 定义已认证用户是否应该离开此路由（登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_round_trip() {
        for route in [
            AppRoute::Dashboard,
            AppRoute::Users,
            AppRoute::Products,
            AppRoute::Coupons,
            AppRoute::Reviews,
            AppRoute::Sellers,
            AppRoute::OrderItems,
            AppRoute::Wishlist,
            AppRoute::Analytics,
            AppRoute::Notifications,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn root_and_login_both_resolve_to_login() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    }

    #[test]
    fn unmatched_paths_fall_through_to_under_development() {
        assert_eq!(AppRoute::from_path("/orders"), AppRoute::UnderDevelopment);
        assert_eq!(AppRoute::from_path("/deliveries"), AppRoute::UnderDevelopment);
        assert!(!AppRoute::UnderDevelopment.requires_auth());
    }

    #[test]
    fn every_screen_except_login_and_catch_all_is_guarded() {
        assert!(!AppRoute::Login.requires_auth());
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::Coupons.requires_auth());
        assert!(AppRoute::Notifications.requires_auth());
    }
}
