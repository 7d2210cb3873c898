//! Volunteer dashboard: profile, participation summary, upcoming events, and
//! online work.

use leptos::prelude::*;

use crate::components::conduct_dialog::ConductDialog;
use crate::net::types::VolunteerProfile;
use crate::state::session::SessionState;

#[component]
pub fn VolunteerDashboardPage() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let show_conduct = RwSignal::new(false);

    let profile = LocalResource::new(move || {
        let token = state.get_untracked().session.map(|s| s.token).unwrap_or_default();
        async move {
            crate::net::api::fetch_profile(&token).await.map_err(|e| {
                log::error!("profile fetch failed: {e}");
                e
            })
        }
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Volunteer Dashboard"</h1>
                <button class="btn btn--accent" on:click=move |_| show_conduct.set(true)>
                    "View Code of Conduct & Certification Policy"
                </button>
            </header>
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(profile) => view! { <ProfileSections profile=profile/> }.into_any(),
                            Err(_) => {
                                view! {
                                    <p class="notice notice--error">
                                        "Could not load your profile. Please try again later."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <ConductDialog open=show_conduct/>
        </div>
    }
}

/// Profile, summary, upcoming-event, and online-work cards for a loaded
/// profile.
#[component]
fn ProfileSections(profile: VolunteerProfile) -> impl IntoView {
    let phone = profile.phone_number.clone().unwrap_or_else(|| "N/A".to_owned());

    let events_attended = if profile.events_attended.is_empty() {
        view! { <p class="empty">"No events attended yet."</p> }.into_any()
    } else {
        view! {
            <ul class="record-list">
                {profile
                    .events_attended
                    .iter()
                    .map(|event| {
                        view! {
                            <li>
                                <span class="record-list__primary">{event.title.clone()}</span>
                                <span class="record-list__secondary">{event.date.clone()}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
            .into_any()
    };

    let upcoming_events = if profile.upcoming_events.is_empty() {
        view! { <p class="empty">"No upcoming events."</p> }.into_any()
    } else {
        view! {
            <ul class="record-list">
                {profile
                    .upcoming_events
                    .iter()
                    .map(|event| {
                        view! {
                            <li>
                                <span class="record-list__primary">
                                    {format!("{} ({} at {})", event.title, event.date, event.time)}
                                </span>
                                <span class="record-list__secondary">{event.description.clone()}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
            .into_any()
    };

    let online_work = if profile.attendance.is_empty() {
        view! { <p class="empty">"No attendance records."</p> }.into_any()
    } else {
        view! {
            <ul class="record-list">
                {profile
                    .attendance
                    .iter()
                    .map(|record| {
                        let topic = record.topic.clone().unwrap_or_else(|| "N/A".to_owned());
                        view! {
                            <li>
                                <span class="record-list__primary">{format!("Topic: {topic}")}</span>
                                <span class="record-list__secondary">
                                    {format!("Hours: {}", record.hours)}
                                </span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
            .into_any()
    };

    view! {
        <section class="card">
            <h2>"Profile Info"</h2>
            <div class="field-grid">
                <div>
                    <strong>"Username: "</strong>
                    {profile.username.clone()}
                </div>
                <div>
                    <strong>"Email: "</strong>
                    {profile.email.clone()}
                </div>
                <div>
                    <strong>"Phone: "</strong>
                    {phone}
                </div>
            </div>
        </section>
        <section class="card">
            <h2>"Participation Summary"</h2>
            <p>
                <strong>"Total Hours Worked: "</strong>
                {profile.hours_worked}
            </p>
            <h3>"Events Attended"</h3>
            {events_attended}
        </section>
        <section class="card">
            <h2>"Upcoming Events"</h2>
            {upcoming_events}
        </section>
        <section class="card">
            <h2>"Online Work"</h2>
            {online_work}
        </section>
    }
}
