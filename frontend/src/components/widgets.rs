//! 屏幕间共享的小组件
//!
//! 九个资源屏幕重复出现的页头/搜索框/错误条，在这里各写一次。

use leptos::prelude::*;

use super::icons::{ArrowLeft, Search};
use crate::web::router::use_navigate;

/// 表单字段辅助：空白输入视为未填写
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 资源屏幕的统一页头：返回面板 + 标题 + 动作区
#[component]
pub fn PageHeader(title: &'static str, children: Children) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <button
                    class="btn btn-ghost btn-circle"
                    on:click=move |_| navigate("/dashboard")
                >
                    <ArrowLeft attr:class="h-5 w-5" />
                </button>
                <span class="text-xl font-bold">{title}</span>
            </div>
            <div class="flex-none gap-2">{children()}</div>
        </div>
    }
}

/// 搜索框：输入即过滤，Clear 清空搜索词
#[component]
pub fn SearchBox(search: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="join">
            <label class="input input-bordered join-item flex items-center gap-2">
                <Search attr:class="h-4 w-4 opacity-50" />
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=search
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </label>
            <button class="btn join-item" on:click=move |_| search.set(String::new())>
                "Clear"
            </button>
        </div>
    }
}

/// 单一错误槽的内联渲染
#[component]
pub fn ErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// 表格占位行：加载中 / 无结果
#[component]
pub fn PlaceholderRow(
    colspan: &'static str,
    loading: Signal<bool>,
    empty_text: &'static str,
) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan class="text-center py-8 text-base-content/50">
                {move || {
                    if loading.get() {
                        view! { <span class="loading loading-spinner loading-md"></span> " Loading..." }
                            .into_any()
                    } else {
                        empty_text.into_any()
                    }
                }}
            </td>
        </tr>
    }
}
