//! 客户端错误分类
//!
//! 三类错误在屏幕层的处理完全一致：写入单一的当前错误槽，
//! 以内联文本渲染，由用户重试触发动作来恢复。

use std::fmt;

/// 服务端返回非 2xx 时的错误
///
/// message 取自响应体的 `error` / `message` 字段，缺失时为通用回退文案。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

/// 客户端错误分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// 客户端必填校验失败，不会触达网络
    Validation(String),
    /// 服务端报告非 2xx 状态
    Api(ApiError),
    /// 请求未能完成（网络/解码失败）
    Transport(String),
}

impl ClientError {
    // --- Convenience constructors ---

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api(ApiError {
            status,
            message: message.into(),
        })
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// 获取 HTTP 状态码（仅 Api 错误携带）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    /// 屏幕层直接渲染 Display 文本，与服务端提供的错误文案保持一致
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) | Self::Transport(msg) => write!(f, "{}", msg),
            Self::Api(e) => write!(f, "{}", e.message),
        }
    }
}

impl std::error::Error for ClientError {}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_server_message_only() {
        let err = ClientError::api(404, "Coupon not found");
        assert_eq!(err.to_string(), "Coupon not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn validation_carries_no_status() {
        let err = ClientError::validation("Email and password are required.");
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Email and password are required.");
    }
}
