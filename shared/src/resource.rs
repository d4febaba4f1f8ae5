//! 资源与草稿 trait
//!
//! 每种资源声明自己的端点根路径、id 读取和过滤谓词；
//! 每种草稿声明必填校验和"创建成功后本地合成记录"的方式。
//! 通用的列表/变更引擎只面向这两个 trait 编程。

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ClientError, ClientResult};
use crate::models::*;

/// 服务端托管的资源记录
pub trait Resource:
    Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned + 'static
{
    /// 端点根路径，如 `/coupons`、`/api/order_items`
    const BASE_PATH: &'static str;
    /// 用于错误文案的资源名
    const NAME: &'static str;

    fn id(&self) -> i64;

    /// 资源特定的搜索谓词
    ///
    /// 文本字段做大小写不敏感的子串匹配，数字 id 按十进制字符串子串匹配。
    /// 空搜索词匹配一切。
    fn matches(&self, term: &str) -> bool;
}

/// 创建表单的草稿负载
pub trait Draft: Serialize {
    type Output: Resource;

    /// 客户端必填校验；失败时不触达网络
    fn validate(&self) -> ClientResult<()>;

    /// 创建成功后用提交的负载合成本地记录（不回查服务端）
    fn into_record(self, id: i64) -> Self::Output;
}

// =========================================================
// 过滤辅助函数
// =========================================================

fn text_matches(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(&term.to_lowercase())
}

fn opt_text_matches(field: Option<&str>, term: &str) -> bool {
    field.is_some_and(|f| text_matches(f, term))
}

fn id_matches(id: i64, term: &str) -> bool {
    id.to_string().contains(term)
}

fn opt_id_matches(id: Option<i64>, term: &str) -> bool {
    id.is_some_and(|i| id_matches(i, term))
}

// =========================================================
// Resource 实现
// =========================================================

impl Resource for User {
    const BASE_PATH: &'static str = "/users";
    const NAME: &'static str = "user";

    fn id(&self) -> i64 {
        self.user_id
    }

    fn matches(&self, term: &str) -> bool {
        id_matches(self.user_id, term)
            || text_matches(&self.username, term)
            || text_matches(&self.email, term)
    }
}

impl Resource for Product {
    const BASE_PATH: &'static str = "/products";
    const NAME: &'static str = "product";

    fn id(&self) -> i64 {
        self.product_id
    }

    fn matches(&self, term: &str) -> bool {
        id_matches(self.product_id, term)
            || text_matches(&self.product_name, term)
            || opt_text_matches(self.category.as_deref(), term)
    }
}

impl Resource for Coupon {
    const BASE_PATH: &'static str = "/coupons";
    const NAME: &'static str = "coupon";

    fn id(&self) -> i64 {
        self.coupon_id
    }

    fn matches(&self, term: &str) -> bool {
        text_matches(&self.code, term) || id_matches(self.coupon_id, term)
    }
}

impl Resource for Review {
    const BASE_PATH: &'static str = "/reviews";
    const NAME: &'static str = "review";

    fn id(&self) -> i64 {
        self.review_id
    }

    fn matches(&self, term: &str) -> bool {
        id_matches(self.review_id, term)
            || id_matches(self.user_id, term)
            || id_matches(self.product_id, term)
            || opt_text_matches(self.review_text.as_deref(), term)
            || self.rating.to_string().contains(term)
    }
}

impl Resource for Seller {
    const BASE_PATH: &'static str = "/sellers";
    const NAME: &'static str = "seller";

    fn id(&self) -> i64 {
        self.seller_id
    }

    fn matches(&self, term: &str) -> bool {
        id_matches(self.seller_id, term)
            || text_matches(&self.store_name, term)
            || text_matches(self.approval_status.as_str(), term)
    }
}

impl Resource for OrderItem {
    const BASE_PATH: &'static str = "/api/order_items";
    const NAME: &'static str = "order item";

    fn id(&self) -> i64 {
        self.order_item_id
    }

    fn matches(&self, term: &str) -> bool {
        id_matches(self.order_item_id, term)
            || id_matches(self.order_id, term)
            || opt_id_matches(self.product_id, term)
    }
}

impl Resource for WishlistItem {
    const BASE_PATH: &'static str = "/wishlist";
    const NAME: &'static str = "wishlist item";

    fn id(&self) -> i64 {
        self.wishlist_id
    }

    fn matches(&self, term: &str) -> bool {
        id_matches(self.user_id, term)
            || id_matches(self.product_id, term)
            || opt_text_matches(self.product_name.as_deref(), term)
    }
}

impl Resource for AnalyticsEvent {
    const BASE_PATH: &'static str = "/analytics";
    const NAME: &'static str = "analytics record";

    fn id(&self) -> i64 {
        self.analytics_id
    }

    fn matches(&self, term: &str) -> bool {
        id_matches(self.analytics_id, term)
            || text_matches(&self.metric_name, term)
            || opt_id_matches(self.user_id, term)
            || opt_text_matches(self.source.as_deref(), term)
    }
}

impl Resource for Notification {
    const BASE_PATH: &'static str = "/notifications";
    const NAME: &'static str = "notification";

    fn id(&self) -> i64 {
        self.notification_id
    }

    fn matches(&self, term: &str) -> bool {
        text_matches(&self.message, term) || id_matches(self.user_id, term)
    }
}

// =========================================================
// Draft 实现
// =========================================================

impl Draft for NewUser {
    type Output = User;

    fn validate(&self) -> ClientResult<()> {
        if self.username.trim().is_empty() || self.email.trim().is_empty() {
            return Err(ClientError::validation("Username and email are required"));
        }
        Ok(())
    }

    fn into_record(self, id: i64) -> User {
        User {
            user_id: id,
            username: self.username,
            email: self.email,
            phone: self.phone,
        }
    }
}

impl Draft for NewProduct {
    type Output = Product;

    fn validate(&self) -> ClientResult<()> {
        if self.product_name.trim().is_empty() || self.price <= 0.0 {
            return Err(ClientError::validation("Product name and price are required"));
        }
        Ok(())
    }

    fn into_record(self, id: i64) -> Product {
        Product {
            product_id: id,
            product_name: self.product_name,
            price: self.price,
            category: self.category,
        }
    }
}

impl Draft for NewCoupon {
    type Output = Coupon;

    fn validate(&self) -> ClientResult<()> {
        if self.code.trim().is_empty()
            || !(1.0..=100.0).contains(&self.discount_percentage)
        {
            return Err(ClientError::validation(
                "Code, discount percentage, and expiration date are required",
            ));
        }
        Ok(())
    }

    fn into_record(self, id: i64) -> Coupon {
        Coupon {
            coupon_id: id,
            code: self.code,
            discount_percentage: self.discount_percentage,
            expiration_date: self.expiration_date,
            min_order_value: self.min_order_value,
        }
    }
}

impl Draft for NewSeller {
    type Output = Seller;

    fn validate(&self) -> ClientResult<()> {
        if self.user_id <= 0 || self.store_name.trim().is_empty() {
            return Err(ClientError::validation("User ID and Store Name are required"));
        }
        Ok(())
    }

    fn into_record(self, id: i64) -> Seller {
        Seller {
            seller_id: id,
            user_id: self.user_id,
            store_name: self.store_name,
            approval_status: self.approval_status,
        }
    }
}

impl Draft for NewAnalyticsEvent {
    type Output = AnalyticsEvent;

    fn validate(&self) -> ClientResult<()> {
        if self.metric_name.trim().is_empty() {
            return Err(ClientError::validation("Metric name and value are required"));
        }
        Ok(())
    }

    fn into_record(self, id: i64) -> AnalyticsEvent {
        AnalyticsEvent {
            analytics_id: id,
            metric_name: self.metric_name,
            metric_value: self.metric_value,
            user_id: self.user_id,
            product_id: self.product_id,
            session_id: self.session_id,
            source: self.source,
        }
    }
}

impl Draft for NewNotification {
    type Output = Notification;

    fn validate(&self) -> ClientResult<()> {
        if self.user_id <= 0 || self.message.trim().is_empty() {
            return Err(ClientError::validation("User ID and message are required"));
        }
        Ok(())
    }

    fn into_record(self, id: i64) -> Notification {
        Notification {
            notification_id: id,
            user_id: self.user_id,
            message: self.message,
            is_read: false,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_matches_everything() {
        let seller = Seller {
            seller_id: 12,
            user_id: 4,
            store_name: "Corner Books".to_string(),
            approval_status: ApprovalStatus::Pending,
        };
        assert!(seller.matches(""));
    }

    #[test]
    fn text_match_is_case_insensitive() {
        let seller = Seller {
            seller_id: 12,
            user_id: 4,
            store_name: "Corner Books".to_string(),
            approval_status: ApprovalStatus::Pending,
        };
        assert!(seller.matches("corner"));
        assert!(seller.matches("PEND"));
        assert!(!seller.matches("grocery"));
    }

    #[test]
    fn numeric_id_matches_as_substring() {
        let coupon = Coupon {
            coupon_id: 123,
            code: "SAVE10".to_string(),
            discount_percentage: 10.0,
            expiration_date: chrono::NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            min_order_value: None,
        };
        assert!(coupon.matches("12"));
        assert!(coupon.matches("save"));
        assert!(!coupon.matches("456"));
    }

    #[test]
    fn review_filter_matches_user_and_product_ids() {
        let review = Review {
            review_id: 3,
            user_id: 77,
            product_id: 412,
            rating: 4,
            review_text: Some("Great quality".to_string()),
        };
        assert!(review.matches("77"));
        assert!(review.matches("41"));
        assert!(review.matches("3"));
        assert!(review.matches("great"));
        assert!(!review.matches("888"));
    }

    #[test]
    fn order_item_filter_matches_product_id() {
        let item = OrderItem {
            order_item_id: 1,
            order_id: 2,
            product_id: Some(99),
            quantity: 1,
            price: 5.0,
        };
        assert!(item.matches("99"));
        assert!(item.matches("2"));

        let without_product = OrderItem {
            product_id: None,
            ..item
        };
        assert!(!without_product.matches("99"));
    }

    #[test]
    fn draft_validation_blocks_missing_required_fields() {
        let draft = NewSeller {
            user_id: 0,
            store_name: "Shop".to_string(),
            approval_status: ApprovalStatus::Pending,
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.to_string(), "User ID and Store Name are required");
    }

    #[test]
    fn draft_synthesizes_record_from_submitted_payload() {
        let draft = NewNotification {
            user_id: 5,
            message: "Order shipped".to_string(),
        };
        draft.validate().unwrap();
        let record = draft.into_record(9);
        assert_eq!(record.notification_id, 9);
        assert!(!record.is_read);
    }
}
