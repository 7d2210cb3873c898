//! Admin form for creating a new event.

#[cfg(test)]
#[path = "add_event_test.rs"]
mod add_event_test;

use leptos::prelude::*;

use crate::net::types::NewEvent;
#[cfg(feature = "csr")]
use crate::state::session::SessionState;

fn validate_event_input(
    title: &str,
    date: &str,
    time: &str,
    location: &str,
    description: &str,
) -> Result<NewEvent, &'static str> {
    let title = title.trim();
    let location = location.trim();
    if title.is_empty() || date.is_empty() || time.is_empty() || location.is_empty() {
        return Err("Title, date, time, and location are required.");
    }
    Ok(NewEvent {
        title: title.to_owned(),
        description: description.trim().to_owned(),
        date: date.to_owned(),
        time: time.to_owned(),
        location: location.to_owned(),
    })
}

#[component]
pub fn AddEventPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
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
        let event = match validate_event_input(
            &title.get(),
            &date.get(),
            &time.get(),
            &location.get(),
            &description.get(),
        ) {
            Ok(event) => event,
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
                match crate::net::api::create_event(&token, &event).await {
                    Ok(()) => {
                        success.set("Event added successfully!".to_owned());
                        title.set(String::new());
                        date.set(String::new());
                        time.set(String::new());
                        location.set(String::new());
                        description.set(String::new());
                    }
                    Err(detail) => {
                        log::error!("event creation failed: {detail}");
                        error.set(format!("Failed to add event: {detail}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = event;
        }
    };

    view! {
        <div class="page page--narrow">
            <header class="page__header">
                <h1>"Add New Event"</h1>
            </header>
            <Show when=move || !success.get().is_empty()>
                <p class="notice notice--success">{move || success.get()}</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="notice notice--error">{move || error.get()}</p>
            </Show>
            <form class="form card" on:submit=on_submit>
                <label class="form__label">
                    "Title"
                    <input
                        class="input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Date"
                    <input
                        class="input"
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Time"
                    <input
                        class="input"
                        type="time"
                        prop:value=move || time.get()
                        on:input=move |ev| time.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Location"
                    <input
                        class="input"
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Description"
                    <textarea
                        class="input input--multiline"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add Event"
                </button>
            </form>
        </div>
    }
}
