//! 领域模型
//!
//! 每种资源一个记录结构体（服务端分配整数 id）加一个创建草稿。
//! 字段名即线上格式（snake_case），与远端 REST API 的负载一一对应。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// 登录 (Login)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 创建操作的成功响应
///
/// 服务端返回 `{id}` 或完整记录；两种形状都解码到这里，
/// id 缺失时由本地集合合成回退 id。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReply {
    #[serde(default)]
    pub id: Option<i64>,
}

// =========================================================
// 用户 (Users)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

// =========================================================
// 商品 (Products)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub product_name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

// =========================================================
// 优惠券 (Coupons)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub coupon_id: i64,
    pub code: String,
    pub discount_percentage: f64,
    pub expiration_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<f64>,
}

/// 客户端派生的优惠券状态，不落库
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponStatus {
    Active,
    Expired,
}

impl CouponStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CouponStatus::Active => "Active",
            CouponStatus::Expired => "Expired",
        }
    }
}

impl Coupon {
    /// 与给定日期比较派生状态；恰好当天到期视为 Active
    pub fn status_on(&self, today: NaiveDate) -> CouponStatus {
        if self.expiration_date < today {
            CouponStatus::Expired
        } else {
            CouponStatus::Active
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCoupon {
    pub code: String,
    pub discount_percentage: f64,
    pub expiration_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<f64>,
}

// =========================================================
// 评论 (Reviews)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_text: Option<String>,
}

/// 行内编辑只提交可编辑字段
#[derive(Debug, Clone, Serialize)]
pub struct ReviewPatch {
    pub rating: u8,
    pub review_text: String,
}

// =========================================================
// 卖家 (Sellers)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        ApprovalStatus::Pending
    }
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    /// 表单 select 的取值解析，未知值回落到 pending
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "approved" => ApprovalStatus::Approved,
            "rejected" => ApprovalStatus::Rejected,
            _ => ApprovalStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub seller_id: i64,
    pub user_id: i64,
    pub store_name: String,
    pub approval_status: ApprovalStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSeller {
    pub user_id: i64,
    pub store_name: String,
    pub approval_status: ApprovalStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct SellerPatch {
    pub store_name: String,
    pub approval_status: ApprovalStatus,
}

// =========================================================
// 订单项 (Order Items)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_item_id: i64,
    pub order_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    pub quantity: u32,
    pub price: f64,
}

/// 数量与价格至少填一项；只序列化被修改的字段
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl OrderItemPatch {
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.price.is_none()
    }
}

// =========================================================
// 心愿单 (Wishlist)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub wishlist_id: i64,
    pub user_id: i64,
    pub product_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

// =========================================================
// 分析事件 (Analytics)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub analytics_id: i64,
    pub metric_name: String,
    pub metric_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAnalyticsEvent {
    pub metric_name: String,
    pub metric_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

// =========================================================
// 通知 (Notifications)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub notification_id: i64,
    pub user_id: i64,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Notification {
    /// 展示顺序：created_at 倒序（最新在前），缺时间戳的记录殿后
    ///
    /// 服务端时间戳为 ISO-8601 文本，字典序即时间序。
    pub fn sort_newest_first(items: &mut [Notification]) {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewNotification {
    pub user_id: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn coupon(expiration: &str) -> Coupon {
        Coupon {
            coupon_id: 1,
            code: "SAVE10".to_string(),
            discount_percentage: 10.0,
            expiration_date: date(expiration),
            min_order_value: None,
        }
    }

    #[test]
    fn coupon_in_the_past_is_expired() {
        let today = date("2026-08-30");
        assert_eq!(coupon("2026-08-29").status_on(today), CouponStatus::Expired);
    }

    #[test]
    fn coupon_in_the_future_is_active() {
        let today = date("2026-08-30");
        assert_eq!(coupon("2099-01-01").status_on(today), CouponStatus::Active);
    }

    #[test]
    fn coupon_expiring_today_is_active() {
        let today = date("2026-08-30");
        assert_eq!(coupon("2026-08-30").status_on(today), CouponStatus::Active);
    }

    #[test]
    fn approval_status_wire_format_is_lowercase() {
        let seller: Seller = serde_json::from_str(
            r#"{"seller_id":3,"user_id":9,"store_name":"Acme","approval_status":"approved"}"#,
        )
        .unwrap();
        assert_eq!(seller.approval_status, ApprovalStatus::Approved);
        let raw = serde_json::to_string(&seller).unwrap();
        assert!(raw.contains(r#""approval_status":"approved""#));
    }

    #[test]
    fn create_reply_decodes_bare_id_and_full_record() {
        let bare: CreateReply = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(bare.id, Some(42));
        // 完整记录但没有 id 字段 -> 回退合成路径
        let full: CreateReply =
            serde_json::from_str(r#"{"coupon_id":7,"code":"SAVE10"}"#).unwrap();
        assert_eq!(full.id, None);
    }

    #[test]
    fn notifications_sort_newest_first_with_missing_timestamps_last() {
        let notification = |id: i64, created_at: Option<&str>| Notification {
            notification_id: id,
            user_id: 1,
            message: "msg".to_string(),
            is_read: false,
            created_at: created_at.map(str::to_string),
        };
        let mut items = vec![
            notification(1, Some("2026-08-01T09:00:00")),
            notification(2, None),
            notification(3, Some("2026-08-28T12:30:00")),
        ];

        Notification::sort_newest_first(&mut items);

        let order: Vec<i64> = items.iter().map(|n| n.notification_id).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn order_item_patch_serializes_changed_fields_only() {
        let patch = OrderItemPatch {
            quantity: Some(3),
            price: None,
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"quantity":3}"#);
        assert!(OrderItemPatch::default().is_empty());
    }
}
