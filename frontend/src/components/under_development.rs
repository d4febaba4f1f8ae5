use leptos::prelude::*;

use super::icons::{ArrowLeft, Wrench};

/// 未匹配路径的统一落点，不受守卫保护
#[component]
pub fn UnderDevelopmentPage() -> impl IntoView {
    let go_back = move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card bg-base-100 shadow-xl p-8 text-center items-center gap-4">
                <Wrench attr:class="h-12 w-12 text-primary" />
                <h1 class="text-3xl font-bold">"Page Under Development"</h1>
                <p class="text-base-content/70">
                    "We're working hard to bring you this feature soon!"
                </p>
                <button on:click=go_back class="btn btn-primary gap-2">
                    <ArrowLeft attr:class="h-4 w-4" /> "Go Back"
                </button>
            </div>
        </div>
    }
}
