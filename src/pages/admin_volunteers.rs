//! Admin volunteer directory with search and password reset.

#[cfg(test)]
#[path = "admin_volunteers_test.rs"]
mod admin_volunteers_test;

use leptos::prelude::*;

use crate::net::types::{ResetPasswordRequest, VolunteerRecord};
use crate::state::session::SessionState;

/// Collapsed event/meeting lists show at most this many entries.
const COLLAPSED_ENTRIES: usize = 3;

fn filter_by_username(records: &[VolunteerRecord], term: &str) -> Vec<VolunteerRecord> {
    let needle = term.trim().to_lowercase();
    records
        .iter()
        .filter(|record| needle.is_empty() || record.username.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn visible_count(total: usize, show_all: bool) -> usize {
    if show_all { total } else { total.min(COLLAPSED_ENTRIES) }
}

fn validate_reset_input(
    username: &str,
    new_password: &str,
) -> Result<ResetPasswordRequest, &'static str> {
    if username.is_empty() {
        return Err("No volunteer selected.");
    }
    if new_password.is_empty() {
        return Err("Enter a new password.");
    }
    Ok(ResetPasswordRequest {
        username: username.to_owned(),
        new_password: new_password.to_owned(),
    })
}

#[component]
pub fn AdminVolunteersPage() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let search = RwSignal::new(String::new());
    let reset_target = RwSignal::new(None::<String>);
    let new_password = RwSignal::new(String::new());
    let reset_message = RwSignal::new(String::new());

    let volunteers = LocalResource::new(move || {
        let token = state.get_untracked().session.map(|s| s.token).unwrap_or_default();
        async move {
            crate::net::api::list_volunteers(&token, "").await.map_err(|e| {
                log::error!("volunteer list fetch failed: {e}");
                e
            })
        }
    });

    let on_reset = Callback::new(move |username: String| {
        reset_target.set(Some(username));
        new_password.set(String::new());
        reset_message.set(String::new());
    });

    let submit_reset = Callback::new(move |()| {
        let Some(username) = reset_target.get_untracked() else {
            return;
        };
        let request = match validate_reset_input(&username, &new_password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                reset_message.set(message.to_owned());
                return;
            }
        };

        #[cfg(feature = "csr")]
        {
            let token = state.get_untracked().session.map(|s| s.token).unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&token, &request).await {
                    Ok(message) => {
                        reset_message.set(if message.is_empty() {
                            "Password reset successfully.".to_owned()
                        } else {
                            message
                        });
                        gloo_timers::future::TimeoutFuture::new(1_000).await;
                        reset_target.set(None);
                        new_password.set(String::new());
                    }
                    Err(e) => {
                        log::error!("password reset failed: {e}");
                        reset_message.set("Error resetting password.".to_owned());
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
        }
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"List of Volunteers"</h1>
            </header>
            <input
                class="input input--search"
                type="text"
                placeholder="Search volunteers by username"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Suspense fallback=move || view! { <p>"Loading volunteers..."</p> }>
                {move || {
                    volunteers
                        .get()
                        .map(|result| match result {
                            Ok(records) => {
                                let filtered = filter_by_username(&records, &search.get());
                                if filtered.is_empty() {
                                    view! { <p class="empty">"No volunteers found."</p> }.into_any()
                                } else {
                                    view! {
                                        <table class="data-table">
                                            <thead>
                                                <tr>
                                                    <th>"Username"</th>
                                                    <th>"Email"</th>
                                                    <th>"Total Hours"</th>
                                                    <th>"Events Attended"</th>
                                                    <th>"Online Work"</th>
                                                    <th>"Phone Number"</th>
                                                    <th>"Actions"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {filtered
                                                    .into_iter()
                                                    .map(|record| {
                                                        view! { <VolunteerRow record=record on_reset=on_reset/> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                            }
                            Err(_) => {
                                view! {
                                    <p class="notice notice--error">"Could not load volunteers."</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || reset_target.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| reset_target.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>
                            {move || {
                                format!(
                                    "Reset password for {}",
                                    reset_target.get().unwrap_or_default(),
                                )
                            }}
                        </h2>
                        <input
                            class="input"
                            type="password"
                            placeholder="New password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                        <Show when=move || !reset_message.get().is_empty()>
                            <p class="notice">{move || reset_message.get()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| reset_target.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| submit_reset.run(())>
                                "Reset"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// One table row; long event/meeting lists collapse to three entries with a
/// show-more toggle.
#[component]
fn VolunteerRow(record: VolunteerRecord, on_reset: Callback<String>) -> impl IntoView {
    let show_all_events = RwSignal::new(false);
    let show_all_meetings = RwSignal::new(false);
    let events = record.events_attended.clone();
    let events_len = events.len();
    let meetings = record.meetings_attended.clone();
    let meetings_len = meetings.len();
    let username_for_reset = record.username.clone();
    let phone = record.phone_number.clone().unwrap_or_else(|| "N/A".to_owned());

    view! {
        <tr>
            <td>{record.username.clone()}</td>
            <td>{record.email.clone()}</td>
            <td>{record.total_hours}</td>
            <td>
                {move || {
                    if events_len == 0 {
                        view! { <span class="empty">"N/A"</span> }.into_any()
                    } else {
                        let visible = visible_count(events_len, show_all_events.get());
                        view! {
                            <ul class="cell-list">
                                {events
                                    .iter()
                                    .take(visible)
                                    .map(|title| view! { <li>{title.clone()}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
                <Show when=move || { events_len > COLLAPSED_ENTRIES }>
                    <button
                        class="btn btn--link"
                        on:click=move |_| show_all_events.update(|v| *v = !*v)
                    >
                        {move || if show_all_events.get() { "Show less" } else { "Show more" }}
                    </button>
                </Show>
            </td>
            <td>
                {move || {
                    if meetings_len == 0 {
                        view! { <span class="empty">"N/A"</span> }.into_any()
                    } else {
                        let visible = visible_count(meetings_len, show_all_meetings.get());
                        view! {
                            <ul class="cell-list">
                                {meetings
                                    .iter()
                                    .take(visible)
                                    .map(|meeting| {
                                        let topic = meeting
                                            .topic
                                            .clone()
                                            .unwrap_or_else(|| "N/A".to_owned());
                                        view! {
                                            <li>{format!("{topic}: {} hrs", meeting.online_hours)}</li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
                <Show when=move || { meetings_len > COLLAPSED_ENTRIES }>
                    <button
                        class="btn btn--link"
                        on:click=move |_| show_all_meetings.update(|v| *v = !*v)
                    >
                        {move || if show_all_meetings.get() { "Show less" } else { "Show more" }}
                    </button>
                </Show>
            </td>
            <td>{phone}</td>
            <td>
                <button
                    class="btn btn--outline"
                    on:click=move |_| on_reset.run(username_for_reset.clone())
                >
                    "Reset Password"
                </button>
            </td>
        </tr>
    }
}
