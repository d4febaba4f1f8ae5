use leptos::prelude::*;
use leptos::task::spawn_local;
use shopadmin_shared::{Mutation, NewNotification, Notification};

use super::icons::Check;
use super::widgets::{ErrorBanner, PageHeader, PlaceholderRow, SearchBox};
use crate::api::AdminApi;
use crate::config::use_api;
use crate::screen::ScreenState;

/// 标记已读：无请求体的 PUT，成功后就地把该行置为已读
fn mark_read(state: ScreenState<Notification>, api: &AdminApi, notification: Notification) {
    state.error.set(None);

    let api = api.clone();
    spawn_local(async move {
        let id = notification.notification_id;
        match api.put_empty(&format!("/notifications/{id}/read")).await {
            Ok(()) => state.items.update(|c| {
                c.apply(Mutation::Updated(Notification {
                    is_read: true,
                    ..notification
                }));
            }),
            Err(e) => state.error.set(Some(e.to_string())),
        }
    });
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let api = use_api();
    let state = ScreenState::<Notification>::new();

    {
        let api = api.clone();
        Effect::new(move |_| state.load(&api, None));
    }

    // 未读视图在客户端过滤，不重新取数
    let unread_only = RwSignal::new(false);
    let user_filter = RwSignal::new(String::new());

    let user_id = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let visible = move || {
        let mut rows = state.filtered();
        Notification::sort_newest_first(&mut rows);
        if unread_only.get() {
            rows.into_iter().filter(|n| !n.is_read).collect()
        } else {
            rows
        }
    };

    let on_user_filter = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            match user_filter.get().trim().parse::<i64>() {
                Ok(id) => state.load(&api, Some(&format!("/notifications/user/{id}"))),
                Err(_) => state.error.set(Some("Please enter a valid user ID".to_string())),
            }
        }
    };

    let show_all = {
        let api = api.clone();
        move |_| {
            user_filter.set(String::new());
            unread_only.set(false);
            state.load(&api, None);
        }
    };

    let on_create = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let draft = NewNotification {
                user_id: user_id.get().trim().parse().unwrap_or(0),
                message: message.get(),
            };
            state.create(&api, draft, move || {
                user_id.set(String::new());
                message.set(String::new());
            });
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-4">
                <PageHeader title="Messaging Center">
                    <SearchBox search=state.search placeholder="Search by ID, user or message" />
                    <button
                        class="btn btn-primary"
                        on:click=move |_| state.show_create.update(|open| *open = !*open)
                    >
                        {move || if state.show_create.get() { "Cancel" } else { "Send Notification" }}
                    </button>
                </PageHeader>

                <ErrorBanner error=state.error />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body flex-row flex-wrap items-end gap-4">
                        <label class="label cursor-pointer gap-2">
                            <input
                                type="checkbox"
                                class="toggle toggle-primary"
                                prop:checked=unread_only
                                on:change=move |_| unread_only.update(|v| *v = !*v)
                            />
                            <span class="label-text">"Unread only"</span>
                        </label>
                        <form class="flex items-end gap-2" on:submit=on_user_filter>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Filter by user"</span></label>
                                <input
                                    type="number"
                                    min="1"
                                    placeholder="User ID"
                                    class="input input-bordered"
                                    prop:value=user_filter
                                    on:input=move |ev| user_filter.set(event_target_value(&ev))
                                />
                            </div>
                            <button type="submit" class="btn btn-primary">"Filter"</button>
                            <button type="button" class="btn btn-ghost" on:click=show_all>
                                "Show All"
                            </button>
                        </form>
                    </div>
                </div>

                <Show when=move || state.show_create.get()>
                    <div class="card bg-base-100 shadow-xl">
                        <form class="card-body grid grid-cols-1 md:grid-cols-3 gap-4" on:submit=on_create.clone()>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"User ID"</span></label>
                                <input
                                    type="number"
                                    min="1"
                                    class="input input-bordered"
                                    prop:value=user_id
                                    on:input=move |ev| user_id.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control md:col-span-2">
                                <label class="label"><span class="label-text">"Message"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=message
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="md:col-span-3">
                                <button type="submit" class="btn btn-primary">"Send Notification"</button>
                            </div>
                        </form>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <h3 class="card-title p-6 pb-2">
                            "Notifications (" {move || visible().len()} ")"
                        </h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"User"</th>
                                        <th>"Message"</th>
                                        <th>"Status"</th>
                                        <th>"Created"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || visible().is_empty()>
                                        <PlaceholderRow
                                            colspan="6"
                                            loading=Signal::derive(move || state.loading.get())
                                            empty_text="No notifications found"
                                        />
                                    </Show>
                                    <For
                                        each=visible
                                        key=|n| (n.notification_id, n.is_read)
                                        children={
                                            let api = api.clone();
                                            move |notification: Notification| {
                                                let api = api.clone();
                                                let id = notification.notification_id;
                                                let is_read = notification.is_read;

                                                let on_mark_read = {
                                                    let api = api.clone();
                                                    let notification = notification.clone();
                                                    move |_| mark_read(state, &api, notification.clone())
                                                };

                                                view! {
                                                    <tr class:opacity-60=is_read>
                                                        <td>{notification.notification_id}</td>
                                                        <td>{notification.user_id}</td>
                                                        <td class="max-w-md">{notification.message.clone()}</td>
                                                        <td>
                                                            {if is_read {
                                                                view! { <span class="badge badge-ghost">"Read"</span> }
                                                            } else {
                                                                view! { <span class="badge badge-info">"Unread"</span> }
                                                            }}
                                                        </td>
                                                        <td>
                                                            {notification
                                                                .created_at
                                                                .clone()
                                                                .unwrap_or_else(|| "-".to_string())}
                                                        </td>
                                                        <td class="text-right space-x-1">
                                                            <Show when=move || !is_read>
                                                                {
                                                                    let on_mark_read = on_mark_read.clone();
                                                                    view! {
                                                                        <button
                                                                            class="btn btn-ghost btn-sm"
                                                                            title="Mark as read"
                                                                            on:click=on_mark_read
                                                                        >
                                                                            <Check attr:class="h-4 w-4" /> "Mark Read"
                                                                        </button>
                                                                    }
                                                                }
                                                            </Show>
                                                            <button
                                                                class="btn btn-ghost btn-sm text-error"
                                                                on:click=move |_| state.remove(
                                                                    &api,
                                                                    id,
                                                                    "Are you sure you want to delete this notification?",
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
