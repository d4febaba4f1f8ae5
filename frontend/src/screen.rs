//! 通用的列表-过滤-变更引擎
//!
//! 每个资源屏幕都是同一状态机的实例：
//! `Loading -> Ready <-> CreateFormOpen`，正交地 `Ready <-> EditingRow(id)`，
//! 拉取失败进入 Error 直到用户手动重试。
//! 九个屏幕只提供资源参数与渲染，逻辑全部集中在这里。

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use shopadmin_shared::{Collection, Draft, Mutation, Resource};

use crate::api::AdminApi;

/// 删除前的用户确认
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// 单个屏幕实例的状态信号束
///
/// 全部字段为 `RwSignal`（实现 Copy），便于在事件闭包间传递。
pub struct ScreenState<R: Resource + Send + Sync> {
    /// 最近一次成功拉取的基础集合，乐观补丁的目标
    pub items: RwSignal<Collection<R>>,
    /// 当前搜索词；过滤永远从基础集合重算
    pub search: RwSignal<String>,
    pub loading: RwSignal<bool>,
    /// 单一的当前错误槽；下一次操作开始时清空
    pub error: RwSignal<Option<String>>,
    pub show_create: RwSignal<bool>,
    /// 同一时刻至多一行处于编辑态
    pub edit_id: RwSignal<Option<i64>>,
    /// 请求代际计数器：过期响应到达时直接丢弃
    generation: RwSignal<u64>,
}

impl<R: Resource + Send + Sync> Clone for ScreenState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource + Send + Sync> Copy for ScreenState<R> {}

impl<R: Resource + Send + Sync> Default for ScreenState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource + Send + Sync> ScreenState<R> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Collection::new()),
            search: RwSignal::new(String::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            show_create: RwSignal::new(false),
            edit_id: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// 过滤后的视图，搜索词或基础集合变化时重算
    pub fn filtered(&self) -> Vec<R> {
        let term = self.search.get();
        self.items.with(|c| c.filter(&term))
    }

    /// 拉取集合并整体替换
    ///
    /// `subpath` 用于服务端范围查询（按用户过滤等）。
    /// 响应只有在代际仍是最新时才提交，消除慢响应覆盖新状态的竞态。
    pub fn load(&self, api: &AdminApi, subpath: Option<&str>) {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.loading.set(true);
        self.error.set(None);

        let state = *self;
        let api = api.clone();
        let subpath = subpath.map(str::to_string);
        spawn_local(async move {
            let result = api.list::<R>(subpath.as_deref()).await;
            // 过期响应：已有更新的请求在途或已完成
            if state.generation.get_untracked() != generation {
                return;
            }
            match result {
                Ok(data) => state.items.update(|c| c.replace_all(data)),
                Err(e) => state.error.set(Some(e.to_string())),
            }
            state.loading.set(false);
        });
    }

    /// 创建：客户端校验 -> POST -> 乐观追加
    ///
    /// 失败时表单保持打开且输入不丢；成功时由 `on_success` 重置表单。
    pub fn create<D>(&self, api: &AdminApi, draft: D, on_success: impl FnOnce() + 'static)
    where
        D: Draft<Output = R> + 'static,
    {
        self.error.set(None);
        if let Err(e) = draft.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let state = *self;
        let api = api.clone();
        spawn_local(async move {
            match api.create(&draft).await {
                Ok(reply) => {
                    state.items.update(|c| {
                        let id = reply.id.unwrap_or_else(|| c.fallback_id());
                        c.apply(Mutation::Created(draft.into_record(id)));
                    });
                    state.show_create.set(false);
                    on_success();
                }
                Err(e) => state.error.set(Some(e.to_string())),
            }
        });
    }

    /// 更新：PUT 只携带修改字段，成功后用 `patched` 就地替换该行
    ///
    /// 失败时保持编辑态并显示错误。
    pub fn update<P>(&self, api: &AdminApi, id: i64, patch: P, patched: R)
    where
        P: Serialize + 'static,
    {
        self.error.set(None);

        let state = *self;
        let api = api.clone();
        spawn_local(async move {
            match api.update::<R, P>(id, &patch).await {
                Ok(()) => {
                    state.items.update(|c| c.apply(Mutation::Updated(patched)));
                    state.edit_id.set(None);
                }
                Err(e) => state.error.set(Some(e.to_string())),
            }
        });
    }

    /// 删除：先弹确认，成功后按 id 移除，失败时行保留
    pub fn remove(&self, api: &AdminApi, id: i64, confirm_message: &str) {
        if !confirm(confirm_message) {
            return;
        }
        self.error.set(None);

        let state = *self;
        let api = api.clone();
        spawn_local(async move {
            match api.remove::<R>(id).await {
                Ok(()) => state.items.update(|c| c.apply(Mutation::Removed(id))),
                Err(e) => state.error.set(Some(e.to_string())),
            }
        });
    }

    /// 拉取单条记录到给定信号（评论/心愿单的单条子视图）
    pub fn load_single(&self, api: &AdminApi, id: i64, target: RwSignal<Option<R>>) {
        self.error.set(None);
        self.loading.set(true);

        let state = *self;
        let api = api.clone();
        spawn_local(async move {
            match api.get_one::<R>(id).await {
                Ok(record) => target.set(Some(record)),
                Err(e) => state.error.set(Some(e.to_string())),
            }
            state.loading.set(false);
        });
    }
}
