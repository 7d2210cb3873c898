//! Admin event listing with search and per-row delete.

#[cfg(test)]
#[path = "list_events_test.rs"]
mod list_events_test;

use leptos::prelude::*;

use crate::net::types::EventRecord;
use crate::state::session::SessionState;

fn filter_by_title(events: &[EventRecord], term: &str) -> Vec<EventRecord> {
    let needle = term.trim().to_lowercase();
    events
        .iter()
        .filter(|event| needle.is_empty() || event.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[component]
pub fn ListEventsPage() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let search = RwSignal::new(String::new());
    let delete_error = RwSignal::new(String::new());

    let events = LocalResource::new(move || {
        let token = state.get_untracked().session.map(|s| s.token).unwrap_or_default();
        async move {
            crate::net::api::list_events(&token, "").await.map_err(|e| {
                log::error!("event list fetch failed: {e}");
                e
            })
        }
    });

    let on_delete = Callback::new(move |(title, date): (String, String)| {
        delete_error.set(String::new());
        #[cfg(feature = "csr")]
        {
            let token = state.get_untracked().session.map(|s| s.token).unwrap_or_default();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_event(&token, &title, &date).await {
                    Ok(()) => events.refetch(),
                    Err(e) => {
                        log::error!("event delete failed: {e}");
                        delete_error.set("Failed to delete the event.".to_owned());
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (title, date);
        }
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Event's List"</h1>
            </header>
            <input
                class="input input--search"
                type="text"
                placeholder="Search events by title"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show when=move || !delete_error.get().is_empty()>
                <p class="notice notice--error">{move || delete_error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                {move || {
                    events
                        .get()
                        .map(|result| match result {
                            Ok(records) => {
                                let filtered = filter_by_title(&records, &search.get());
                                if filtered.is_empty() {
                                    view! { <p class="empty">"No events found."</p> }.into_any()
                                } else {
                                    view! {
                                        <table class="data-table">
                                            <thead>
                                                <tr>
                                                    <th>"Title"</th>
                                                    <th>"Date"</th>
                                                    <th>"Time"</th>
                                                    <th>"Description"</th>
                                                    <th>"Volunteers"</th>
                                                    <th>"Actions"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {filtered
                                                    .into_iter()
                                                    .map(|event| {
                                                        let title = event.title.clone();
                                                        let date = event.date.clone();
                                                        view! {
                                                            <tr>
                                                                <td>{event.title.clone()}</td>
                                                                <td>{event.date.clone()}</td>
                                                                <td>{event.time.clone()}</td>
                                                                <td>{event.description.clone()}</td>
                                                                <td>{event.volunteers.len()}</td>
                                                                <td>
                                                                    <button
                                                                        class="btn btn--outline"
                                                                        on:click=move |_| {
                                                                            on_delete.run((title.clone(), date.clone()))
                                                                        }
                                                                    >
                                                                        "Delete"
                                                                    </button>
                                                                </td>
                                                            </tr>
                                                        }
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
                                    <p class="notice notice--error">"Could not load events."</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
