//! 远端 API 客户端
//!
//! 所有屏幕共用的请求/响应辅助层：列表、单条、创建、更新、删除
//! 五个操作加登录，统一归一化成功与失败的形状。

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use shopadmin_shared::{
    ClientError, ClientResult, CreateReply, Draft, LOGIN_PATH, LoginRequest, Resource, Session,
};

/// 失败响应体：`{error}` 或 `{message}`，两者都缺则用通用回退文案
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdminApi {
    base_url: String,
}

impl AdminApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 把非 2xx 响应归一化为 ApiError
    async fn failure(res: Response, fallback: &str) -> ClientError {
        let status = res.status();
        let message = res
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error.or(body.message))
            .unwrap_or_else(|| fallback.to_string());
        ClientError::api(status, message)
    }

    fn transport(e: gloo_net::Error) -> ClientError {
        ClientError::transport(e.to_string())
    }

    /// 获取资源集合
    ///
    /// `subpath` 覆盖默认端点，用于服务端范围查询
    /// （如 `/notifications/user/{id}`）。
    pub async fn list<R: Resource>(&self, subpath: Option<&str>) -> ClientResult<Vec<R>> {
        let path = subpath.unwrap_or(R::BASE_PATH);
        let res = Request::get(&self.url(path))
            .send()
            .await
            .map_err(Self::transport)?;

        if !res.ok() {
            return Err(Self::failure(res, &format!("Failed to fetch {}s", R::NAME)).await);
        }

        res.json::<Vec<R>>().await.map_err(Self::transport)
    }

    /// 获取单条记录；404 通过服务端 message 文本区分
    pub async fn get_one<R: Resource>(&self, id: i64) -> ClientResult<R> {
        let res = Request::get(&self.url(&format!("{}/{}", R::BASE_PATH, id)))
            .send()
            .await
            .map_err(Self::transport)?;

        if !res.ok() {
            return Err(Self::failure(res, &format!("Failed to fetch {} {}", R::NAME, id)).await);
        }

        res.json::<R>().await.map_err(Self::transport)
    }

    /// 创建记录；成功响应解码为 `{id}`（id 可缺失）
    pub async fn create<D: Draft>(&self, draft: &D) -> ClientResult<CreateReply> {
        let res = Request::post(&self.url(<D::Output as Resource>::BASE_PATH))
            .json(draft)
            .map_err(Self::transport)?
            .send()
            .await
            .map_err(Self::transport)?;

        if !res.ok() {
            return Err(Self::failure(
                res,
                &format!("Failed to create {}", <D::Output as Resource>::NAME),
            )
            .await);
        }

        res.json::<CreateReply>().await.map_err(Self::transport)
    }

    /// PUT 更新，负载只携带被修改的字段
    pub async fn update<R: Resource, P: Serialize>(&self, id: i64, patch: &P) -> ClientResult<()> {
        let res = Request::put(&self.url(&format!("{}/{}", R::BASE_PATH, id)))
            .json(patch)
            .map_err(Self::transport)?
            .send()
            .await
            .map_err(Self::transport)?;

        if !res.ok() {
            return Err(Self::failure(res, &format!("Failed to update {}", R::NAME)).await);
        }
        Ok(())
    }

    /// 按 id 删除记录
    pub async fn remove<R: Resource>(&self, id: i64) -> ClientResult<()> {
        let res = Request::delete(&self.url(&format!("{}/{}", R::BASE_PATH, id)))
            .send()
            .await
            .map_err(Self::transport)?;

        if !res.ok() {
            return Err(Self::failure(res, &format!("Failed to delete {}", R::NAME)).await);
        }
        Ok(())
    }

    /// 无请求体的 PUT（通知标记已读）
    pub async fn put_empty(&self, path: &str) -> ClientResult<()> {
        let res = Request::put(&self.url(path))
            .send()
            .await
            .map_err(Self::transport)?;

        if !res.ok() {
            return Err(Self::failure(res, "Request failed").await);
        }
        Ok(())
    }

    /// 管理员登录；响应必须携带非空 token
    pub async fn login(&self, req: &LoginRequest) -> ClientResult<Session> {
        let res = Request::post(&self.url(LOGIN_PATH))
            .json(req)
            .map_err(Self::transport)?
            .send()
            .await
            .map_err(Self::transport)?;

        if !res.ok() {
            return Err(Self::failure(res, "Something went wrong. Please try again.").await);
        }

        let session = res.json::<Session>().await.map_err(|_| {
            ClientError::transport("Invalid response from server.")
        })?;
        if !session.has_token() {
            return Err(ClientError::transport("Invalid response from server."));
        }
        Ok(session)
    }
}
