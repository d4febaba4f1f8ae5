//! ShopAdmin 共享领域层
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或网络：
//! - `models`: 九种资源的领域模型与创建草稿
//! - `resource`: 资源/草稿 trait（端点、过滤谓词、必填校验）
//! - `collection`: 本地集合与乐观更新 reducer
//! - `session`: 管理员会话记录的解析与有效性
//! - `aggregate`: 分析数据的派生聚合
//! - `error`: 客户端错误分类

pub mod aggregate;
pub mod collection;
pub mod error;
pub mod models;
pub mod resource;
pub mod session;

pub use aggregate::{MetricTotal, summarize};
pub use collection::{Collection, Mutation};
pub use error::{ApiError, ClientError, ClientResult};
pub use models::{
    AnalyticsEvent, ApprovalStatus, Coupon, CouponStatus, CreateReply, LoginRequest, NewAnalyticsEvent,
    NewCoupon, NewNotification, NewProduct, NewSeller, NewUser, Notification, OrderItem,
    OrderItemPatch, Product, Review, ReviewPatch, Seller, SellerPatch, User, WishlistItem,
};
pub use resource::{Draft, Resource};
pub use session::Session;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 会话记录在浏览器 LocalStorage 中的固定键
pub const STORAGE_ADMIN_KEY: &str = "admin";

/// 管理员登录端点
pub const LOGIN_PATH: &str = "/api/admin/login";
