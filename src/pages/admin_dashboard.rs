//! Admin dashboard: entry cards for the administration tools.

use leptos::prelude::*;

/// Tool cards shown on the admin landing page.
const ADMIN_TOOLS: [(&str, &str); 5] = [
    ("Volunteer's List", "/admin/volunteers"),
    ("Add Event", "/admin/events/add"),
    ("Event's List", "/admin/events"),
    ("Assign Volunteer Hours", "/admin/hours/assign"),
    ("Assign Online Work", "/admin/attendance/mark"),
];

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Admin Dashboard"</h1>
            </header>
            <div class="card-grid">
                {ADMIN_TOOLS
                    .iter()
                    .map(|(title, path)| {
                        view! {
                            <a class="tool-card" href=*path>
                                <span class="tool-card__title">{*title}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
