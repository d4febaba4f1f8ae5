//! 管理员会话记录
//!
//! 登录成功后服务端响应被整体持久化；除 token 外的字段原样保留。
//! 损坏的存储值一律视为"未认证"，绝不作为解析错误向上抛出。

use serde::{Deserialize, Serialize};

/// 持久化的管理员凭据记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    /// 登录响应中的其余字段（message、管理员资料等），原样透传
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            extra: serde_json::Value::Null,
        }
    }

    /// 解析存储的 JSON 字符串
    ///
    /// 缺失 token 字段或非法 JSON 都返回 None。
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// 默认的有效性谓词：token 非空
    ///
    /// 过期检查是一个策略点，由调用方注入替代谓词，这里不做任何猜测。
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_session() {
        let session = Session::parse(r#"{"token":"abc","message":"Login successful!"}"#).unwrap();
        assert_eq!(session.token, "abc");
        assert!(session.has_token());
        // 额外字段原样保留
        assert_eq!(session.extra["message"], "Login successful!");
    }

    #[test]
    fn malformed_json_is_treated_as_absent() {
        assert!(Session::parse("not json at all").is_none());
        assert!(Session::parse("").is_none());
    }

    #[test]
    fn missing_token_field_is_treated_as_absent() {
        assert!(Session::parse(r#"{"message":"hi"}"#).is_none());
    }

    #[test]
    fn empty_token_is_invalid() {
        let session = Session::parse(r#"{"token":""}"#).unwrap();
        assert!(!session.has_token());
        let blank = Session::parse(r#"{"token":"   "}"#).unwrap();
        assert!(!blank.has_token());
    }

    #[test]
    fn roundtrips_through_storage_shape() {
        let session = Session::parse(r#"{"token":"t","admin_id":7}"#).unwrap();
        let raw = serde_json::to_string(&session).unwrap();
        let reparsed = Session::parse(&raw).unwrap();
        assert_eq!(session, reparsed);
    }
}
