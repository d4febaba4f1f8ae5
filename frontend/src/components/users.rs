use leptos::prelude::*;
use shopadmin_shared::{NewUser, User};

use super::widgets::{ErrorBanner, PageHeader, PlaceholderRow, SearchBox, non_empty};
use crate::config::use_api;
use crate::screen::ScreenState;

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = use_api();
    let state = ScreenState::<User>::new();

    // 初始加载
    {
        let api = api.clone();
        Effect::new(move |_| state.load(&api, None));
    }

    // 创建表单草稿
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());

    let on_create = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let draft = NewUser {
                username: username.get(),
                email: email.get(),
                phone: non_empty(phone.get()),
            };
            state.create(&api, draft, move || {
                username.set(String::new());
                email.set(String::new());
                phone.set(String::new());
            });
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-4">
                <PageHeader title="User Management">
                    <SearchBox search=state.search placeholder="Search by ID, username or email" />
                    <button
                        class="btn btn-primary"
                        on:click=move |_| state.show_create.update(|open| *open = !*open)
                    >
                        {move || if state.show_create.get() { "Cancel" } else { "Create User" }}
                    </button>
                </PageHeader>

                <ErrorBanner error=state.error />

                <Show when=move || state.show_create.get()>
                    <div class="card bg-base-100 shadow-xl">
                        <form class="card-body grid grid-cols-1 md:grid-cols-3 gap-4" on:submit=on_create.clone()>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Username"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=username
                                    on:input=move |ev| username.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Email"</span></label>
                                <input
                                    type="email"
                                    class="input input-bordered"
                                    prop:value=email
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Phone (optional)"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=phone
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="md:col-span-3">
                                <button type="submit" class="btn btn-primary">"Create User"</button>
                            </div>
                        </form>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <h3 class="card-title p-6 pb-2">
                            "Registered Users (" {move || state.filtered().len()} ")"
                        </h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Username"</th>
                                        <th>"Email"</th>
                                        <th>"Phone"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || state.filtered().is_empty()>
                                        <PlaceholderRow
                                            colspan="5"
                                            loading=Signal::derive(move || state.loading.get())
                                            empty_text="No users found"
                                        />
                                    </Show>
                                    <For
                                        each=move || state.filtered()
                                        key=|u| u.user_id
                                        children={
                                            let api = api.clone();
                                            move |user: User| {
                                                let api = api.clone();
                                                view! {
                                                    <tr>
                                                        <td>{user.user_id}</td>
                                                        <td>{user.username.clone()}</td>
                                                        <td>{user.email.clone()}</td>
                                                        <td>{user.phone.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                        <td class="text-right">
                                                            <button
                                                                class="btn btn-ghost btn-sm text-error"
                                                                on:click=move |_| state.remove(
                                                                    &api,
                                                                    user.user_id,
                                                                    "Are you sure you want to delete this user?",
                                                                )
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
