//! 认证模块
//!
//! 管理管理员会话状态，与路由系统解耦：
//! 路由服务通过注入的认证信号来检查认证状态。

use leptos::prelude::*;
use shopadmin_shared::{ClientResult, LoginRequest, Session};

use crate::api::AdminApi;
use crate::session::SessionStore;

/// 会话有效性谓词
///
/// 过期策略是一个开放问题：默认只要求 token 非空，
/// 需要 TTL 时注入替代谓词，而不是在这里硬编码。
pub type SessionValidator = fn(&Session) -> bool;

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 当前会话（从存储恢复或登录成功后写入）
    pub session: Option<Session>,
    /// 是否正在恢复存储的会话
    pub is_loading: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
    validator: SessionValidator,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::with_validator(Session::has_token)
    }

    /// 使用自定义有效性谓词创建上下文
    pub fn with_validator(validator: SessionValidator) -> Self {
        let (state, set_state) = signal(AuthState {
            session: None,
            is_loading: true,
        });
        Self {
            state,
            set_state,
            validator,
        }
    }

    /// 获取认证状态信号（用于路由守卫注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        let validator = self.validator;
        Signal::derive(move || {
            state
                .read()
                .session
                .as_ref()
                .map(validator)
                .unwrap_or(false)
        })
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态：从 LocalStorage 恢复会话
pub fn init_auth(ctx: &AuthContext) {
    let session = SessionStore::load();
    ctx.set_state.update(|state| {
        state.session = session;
        state.is_loading = false;
    });
}

/// 登录：验证凭据、持久化会话并更新内存状态
pub async fn login(
    ctx: &AuthContext,
    api: &AdminApi,
    email: String,
    password: String,
) -> ClientResult<()> {
    let session = api.login(&LoginRequest { email, password }).await?;

    SessionStore::save(&session);
    ctx.set_state.update(|state| {
        state.session = Some(session);
    });
    Ok(())
}

/// 注销：清除持久化记录与内存状态
///
/// 导航由路由服务监听认证状态变化自动处理。
pub fn logout(ctx: &AuthContext) {
    SessionStore::clear();
    ctx.set_state.update(|state| {
        state.session = None;
    });
}
