//! Admin form assigning event hours to a volunteer.

#[cfg(test)]
#[path = "assign_hours_test.rs"]
mod assign_hours_test;

use leptos::prelude::*;

use crate::net::types::AssignHoursRequest;
#[cfg(feature = "csr")]
use crate::state::session::SessionState;

fn validate_assign_input(
    username: &str,
    event_title: &str,
    event_date: &str,
    hours: &str,
) -> Result<AssignHoursRequest, &'static str> {
    let username = username.trim();
    let event_title = event_title.trim();
    let event_date = event_date.trim();
    if username.is_empty() || event_title.is_empty() || event_date.is_empty() || hours.trim().is_empty() {
        return Err("All fields are required.");
    }
    let hours: f64 = hours.trim().parse().map_err(|_| "Enter a valid number of hours.")?;
    if !hours.is_finite() || hours <= 0.0 {
        return Err("Enter a valid number of hours.");
    }
    Ok(AssignHoursRequest {
        volunteer: username.to_owned(),
        event: event_title.to_owned(),
        event_date: event_date.to_owned(),
        hours,
    })
}

#[component]
pub fn AssignHoursPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let event_title = RwSignal::new(String::new());
    let event_date = RwSignal::new(String::new());
    let hours = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let state = expect_context::<RwSignal<SessionState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        let request = match validate_assign_input(
            &username.get(),
            &event_title.get(),
            &event_date.get(),
            &hours.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let token = state.get_untracked().session.map(|s| s.token).unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::assign_hours(&token, &request).await {
                    Ok(()) => {
                        success.set("Hours assigned successfully!".to_owned());
                        username.set(String::new());
                        event_title.set(String::new());
                        event_date.set(String::new());
                        hours.set(String::new());
                    }
                    Err(e) => {
                        log::error!("hour assignment failed: {e}");
                        error.set("Failed to assign hours.".to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="page page--narrow">
            <header class="page__header">
                <h1>"Assign Volunteer Hours"</h1>
            </header>
            <Show when=move || !success.get().is_empty()>
                <p class="notice notice--success">{move || success.get()}</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="notice notice--error">{move || error.get()}</p>
            </Show>
            <form class="form card" on:submit=on_submit>
                <label class="form__label">
                    "Volunteer Username"
                    <input
                        class="input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Event Title"
                    <input
                        class="input"
                        type="text"
                        prop:value=move || event_title.get()
                        on:input=move |ev| event_title.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Event Date (YYYY-MM-DD)"
                    <input
                        class="input"
                        type="date"
                        prop:value=move || event_date.get()
                        on:input=move |ev| event_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Number of Hours"
                    <input
                        class="input"
                        type="number"
                        min="0"
                        step="0.5"
                        prop:value=move || hours.get()
                        on:input=move |ev| hours.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Assign Hours"
                </button>
            </form>
        </div>
    }
}
