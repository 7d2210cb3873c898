//! Admin form recording online-work hours for selected volunteers.

#[cfg(test)]
#[path = "mark_attendance_test.rs"]
mod mark_attendance_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::net::types::MarkAttendanceRequest;
use crate::state::session::SessionState;

fn toggle_selection(selected: &[String], username: &str) -> Vec<String> {
    if selected.iter().any(|name| name == username) {
        selected.iter().filter(|name| *name != username).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(username.to_owned());
        next
    }
}

fn validate_attendance_input(
    topic: &str,
    selected: &[String],
    hours: &BTreeMap<String, String>,
) -> Result<MarkAttendanceRequest, &'static str> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err("Enter a task name.");
    }
    let mut volunteer_hours = BTreeMap::new();
    for username in selected {
        let Some(raw) = hours.get(username).map(|value| value.trim()) else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }
        let parsed: f64 = raw.parse().map_err(|_| "Enter valid hours for each selected volunteer.")?;
        if !parsed.is_finite() || parsed <= 0.0 {
            return Err("Enter valid hours for each selected volunteer.");
        }
        volunteer_hours.insert(username.clone(), parsed);
    }
    if volunteer_hours.is_empty() {
        return Err("Select at least one volunteer and enter hours.");
    }
    Ok(MarkAttendanceRequest { topic: topic.to_owned(), volunteer_hours })
}

#[component]
pub fn MarkAttendancePage() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let topic = RwSignal::new(String::new());
    let selected = RwSignal::new(Vec::<String>::new());
    let hours_by_user = RwSignal::new(BTreeMap::<String, String>::new());
    let response_message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let volunteers = LocalResource::new(move || {
        let token = state.get_untracked().session.map(|s| s.token).unwrap_or_default();
        async move {
            crate::net::api::list_volunteers(&token, "").await.map_err(|e| {
                log::error!("volunteer list fetch failed: {e}");
                e
            })
        }
    });

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let request = match validate_attendance_input(
            &topic.get_untracked(),
            &selected.get_untracked(),
            &hours_by_user.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                response_message.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        response_message.set(String::new());

        #[cfg(feature = "csr")]
        {
            let token = state.get_untracked().session.map(|s| s.token).unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::mark_attendance(&token, &request).await {
                    Ok(message) => {
                        response_message.set(if message.is_empty() {
                            "Online hours assigned successfully!".to_owned()
                        } else {
                            message
                        });
                        selected.set(Vec::new());
                        hours_by_user.set(BTreeMap::new());
                        topic.set(String::new());
                    }
                    Err(e) => {
                        log::error!("attendance submission failed: {e}");
                        response_message.set("Failed to assign online hours.".to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            busy.set(false);
        }
    });

    view! {
        <div class="page page--narrow">
            <header class="page__header">
                <h1>"Assign Online Hours"</h1>
            </header>
            <label class="form__label">
                "Task Name"
                <input
                    class="input"
                    type="text"
                    prop:value=move || topic.get()
                    on:input=move |ev| topic.set(event_target_value(&ev))
                />
            </label>
            <h2>"Volunteers"</h2>
            <Suspense fallback=move || view! { <p>"Loading volunteers..."</p> }>
                {move || {
                    volunteers
                        .get()
                        .map(|result| match result {
                            Ok(records) => {
                                view! {
                                    <div class="volunteer-grid">
                                        {records
                                            .into_iter()
                                            .map(|record| {
                                                let name_for_checked = record.username.clone();
                                                let name_for_toggle = record.username.clone();
                                                let name_for_show = record.username.clone();
                                                let name_for_hours = record.username.clone();
                                                view! {
                                                    <div class="volunteer-option">
                                                        <label>
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || {
                                                                    selected.get().contains(&name_for_checked)
                                                                }
                                                                on:change=move |_| {
                                                                    selected
                                                                        .update(|list| {
                                                                            *list = toggle_selection(list, &name_for_toggle);
                                                                        });
                                                                }
                                                            />
                                                            {record.username.clone()}
                                                        </label>
                                                        <Show when=move || {
                                                            selected.get().contains(&name_for_show)
                                                        }>
                                                            <HoursField
                                                                username=name_for_hours.clone()
                                                                hours=hours_by_user
                                                            />
                                                        </Show>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
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
            <button
                class="btn btn--primary"
                disabled=move || busy.get()
                on:click=move |_| on_submit.run(())
            >
                "Submit Hours"
            </button>
            <Show when=move || !response_message.get().is_empty()>
                <p class="notice">{move || response_message.get()}</p>
            </Show>
        </div>
    }
}

/// Hours input bound to one volunteer's entry in the hours map.
#[component]
fn HoursField(username: String, hours: RwSignal<BTreeMap<String, String>>) -> impl IntoView {
    let name_for_value = username.clone();

    view! {
        <input
            class="input"
            type="number"
            min="0"
            step="0.5"
            placeholder="Online Hours"
            prop:value=move || hours.get().get(&name_for_value).cloned().unwrap_or_default()
            on:input=move |ev| {
                let value = event_target_value(&ev);
                hours
                    .update(|map| {
                        map.insert(username.clone(), value);
                    });
            }
        />
    }
}
