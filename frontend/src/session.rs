//! 会话存储
//!
//! 以固定键在浏览器 LocalStorage 中持久化单条凭据记录。
//! 损坏的存储值按"不存在"处理，绝不作为错误上浮。

use gloo_storage::{LocalStorage, Storage};
use shopadmin_shared::{STORAGE_ADMIN_KEY, Session};

pub struct SessionStore;

impl SessionStore {
    /// 序列化并持久化，覆盖任何旧值
    pub fn save(session: &Session) {
        let _ = LocalStorage::set(STORAGE_ADMIN_KEY, session);
    }

    /// 读取并解析；缺失或非法 JSON 都返回 None
    pub fn load() -> Option<Session> {
        LocalStorage::get::<Session>(STORAGE_ADMIN_KEY).ok()
    }

    /// 移除持久化记录（注销路径）
    pub fn clear() {
        LocalStorage::delete(STORAGE_ADMIN_KEY);
    }
}
