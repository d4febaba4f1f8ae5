//! 浏览器路由层
//!
//! `route` 是纯粹的路由表（不依赖 DOM），`router` 封装 History API
//! 并执行认证守卫。

pub mod route;
pub mod router;
