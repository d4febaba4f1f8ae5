//! 本地集合与乐观更新 reducer
//!
//! 集合镜像最近一次成功拉取的结果，变更成功后按乐观策略就地打补丁，
//! 不做写后回查。这是一条显式策略：集合与服务端状态的一致性
//! 只到"乐观补丁的近似"为止。

use crate::resource::Resource;

/// 一次服务端确认的变更结果
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<R: Resource> {
    /// 创建成功，携带本地合成的完整记录
    Created(R),
    /// 更新成功，携带打完补丁的记录
    Updated(R),
    /// 删除成功，按 id 移除
    Removed(i64),
}

/// 有序的资源记录序列
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<R: Resource> {
    items: Vec<R>,
}

impl<R: Resource> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> Collection<R> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 拉取结果整体替换集合
    pub fn replace_all(&mut self, items: Vec<R>) {
        self.items = items;
    }

    /// 创建响应缺失 id 时的回退合成
    ///
    /// 保留自观察到的行为（`length + 1`），已知在删除过中间记录后可能撞 id。
    pub fn fallback_id(&self) -> i64 {
        self.items.len() as i64 + 1
    }

    /// 非破坏性过滤：永远从未动过的基础集合重新计算
    ///
    /// 搜索词原样参与匹配，不做 trim：空白也是合法的子串。
    pub fn filter(&self, term: &str) -> Vec<R> {
        if term.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|r| r.matches(term))
            .cloned()
            .collect()
    }

    /// 纯 reducer：把一次服务端确认的变更应用到集合
    pub fn apply(&mut self, mutation: Mutation<R>) {
        match mutation {
            Mutation::Created(record) => self.items.push(record),
            Mutation::Updated(record) => {
                let id = record.id();
                if let Some(slot) = self.items.iter_mut().find(|r| r.id() == id) {
                    *slot = record;
                }
            }
            Mutation::Removed(id) => self.items.retain(|r| r.id() != id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;
    use crate::resource::Draft;
    use chrono::NaiveDate;

    fn coupon(id: i64, code: &str, expiration: &str) -> Coupon {
        Coupon {
            coupon_id: id,
            code: code.to_string(),
            discount_percentage: 10.0,
            expiration_date: NaiveDate::parse_from_str(expiration, "%Y-%m-%d").unwrap(),
            min_order_value: None,
        }
    }

    fn notification(id: i64, user_id: i64, message: &str, is_read: bool) -> Notification {
        Notification {
            notification_id: id,
            user_id,
            message: message.to_string(),
            is_read,
            created_at: None,
        }
    }

    #[test]
    fn create_appends_exactly_one_record_with_server_id() {
        let mut coupons = Collection::new();
        coupons.replace_all(vec![coupon(1, "TEN", "2099-01-01")]);
        let before = coupons.len();

        coupons.apply(Mutation::Created(coupon(42, "SAVE10", "2099-01-01")));

        assert_eq!(coupons.len(), before + 1);
        assert!(coupons.items().iter().any(|c| c.coupon_id == 42));
    }

    #[test]
    fn create_without_server_id_uses_synthesized_fallback() {
        let mut coupons = Collection::new();
        coupons.replace_all(vec![coupon(1, "TEN", "2099-01-01"), coupon(2, "TWENTY", "2099-01-01")]);

        let id = coupons.fallback_id();
        assert_eq!(id, 3);
        coupons.apply(Mutation::Created(coupon(id, "THIRTY", "2099-01-01")));
        assert!(coupons.items().iter().any(|c| c.coupon_id == 3));
    }

    #[test]
    fn remove_deletes_only_the_matching_id() {
        let mut coupons = Collection::new();
        let keep = coupon(1, "TEN", "2099-01-01");
        coupons.replace_all(vec![keep.clone(), coupon(2, "TWENTY", "2099-01-01")]);

        coupons.apply(Mutation::Removed(2));

        assert_eq!(coupons.len(), 1);
        assert!(!coupons.items().iter().any(|c| c.coupon_id == 2));
        // 其余记录原封不动
        assert_eq!(coupons.items()[0], keep);
    }

    #[test]
    fn update_patches_the_row_in_place() {
        let mut sellers = Collection::new();
        sellers.replace_all(vec![
            Seller {
                seller_id: 1,
                user_id: 4,
                store_name: "Old Name".to_string(),
                approval_status: ApprovalStatus::Pending,
            },
            Seller {
                seller_id: 2,
                user_id: 5,
                store_name: "Other".to_string(),
                approval_status: ApprovalStatus::Approved,
            },
        ]);

        sellers.apply(Mutation::Updated(Seller {
            seller_id: 1,
            user_id: 4,
            store_name: "New Name".to_string(),
            approval_status: ApprovalStatus::Approved,
        }));

        assert_eq!(sellers.items()[0].store_name, "New Name");
        assert_eq!(sellers.items()[1].store_name, "Other");
        // 顺序保持
        assert_eq!(sellers.items()[0].seller_id, 1);
    }

    #[test]
    fn filtering_with_empty_term_is_identity() {
        let mut coupons = Collection::new();
        let base = vec![coupon(1, "TEN", "2099-01-01"), coupon(2, "TWENTY", "2099-01-01")];
        coupons.replace_all(base.clone());

        assert_eq!(coupons.filter(""), base);
        // 过滤后再清空搜索词，恢复原集合（顺序保留）
        let narrowed = coupons.filter("TWENTY");
        assert_eq!(narrowed.len(), 1);
        assert_eq!(coupons.filter(""), base);
    }

    #[test]
    fn whitespace_term_is_matched_literally_not_trimmed() {
        let mut sellers = Collection::new();
        sellers.replace_all(vec![
            Seller {
                seller_id: 1,
                user_id: 4,
                store_name: "Corner Books".to_string(),
                approval_status: ApprovalStatus::Pending,
            },
            Seller {
                seller_id: 2,
                user_id: 5,
                store_name: "Acme".to_string(),
                approval_status: ApprovalStatus::Approved,
            },
        ]);

        // 单个空格只命中含空格的文本字段
        let narrowed = sellers.filter(" ");
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].seller_id, 1);
    }

    #[test]
    fn coupon_create_then_delete_scenario() {
        let mut coupons: Collection<Coupon> = Collection::new();
        let draft = NewCoupon {
            code: "SAVE10".to_string(),
            discount_percentage: 10.0,
            expiration_date: NaiveDate::parse_from_str("2099-01-01", "%Y-%m-%d").unwrap(),
            min_order_value: None,
        };
        draft.validate().unwrap();

        let id = coupons.fallback_id();
        coupons.apply(Mutation::Created(draft.into_record(id)));

        let today = NaiveDate::parse_from_str("2026-08-30", "%Y-%m-%d").unwrap();
        let created = &coupons.items()[0];
        assert_eq!(created.code, "SAVE10");
        assert_eq!(created.status_on(today), CouponStatus::Active);

        let before = coupons.len();
        coupons.apply(Mutation::Removed(id));
        assert_eq!(coupons.len(), before - 1);
        assert!(!coupons.items().iter().any(|c| c.coupon_id == id));
    }

    #[test]
    fn marking_notification_read_excludes_it_from_unread_view() {
        let mut inbox = Collection::new();
        inbox.replace_all(vec![
            notification(5, 1, "Order shipped", false),
            notification(6, 1, "Payment received", false),
        ]);

        let mut marked = inbox
            .items()
            .iter()
            .find(|n| n.notification_id == 5)
            .cloned()
            .unwrap();
        marked.is_read = true;
        inbox.apply(Mutation::Updated(marked));

        let unread: Vec<_> = inbox.items().iter().filter(|n| !n.is_read).collect();
        assert!(unread.iter().all(|n| n.notification_id != 5));
        assert_eq!(unread.len(), 1);
    }
}
