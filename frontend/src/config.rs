//! 运行配置
//!
//! API 客户端在应用根部构造一次并注入 Context，
//! 屏幕层通过 `use_api` 获取，避免对环境全局状态的隐式依赖。

use leptos::prelude::*;

use crate::api::AdminApi;

/// 远端 REST API 的默认基地址
pub const DEFAULT_API_BASE: &str = "https://alvins.pythonanywhere.com";

/// 在应用根部注入 API 客户端
pub fn provide_api() {
    provide_context(AdminApi::new(DEFAULT_API_BASE));
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> AdminApi {
    use_context::<AdminApi>().expect("AdminApi should be provided at the app root")
}
