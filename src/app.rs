//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::guard::Guarded;
use crate::components::navbar::Navbar;
use crate::pages::add_event::AddEventPage;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::admin_volunteers::AdminVolunteersPage;
use crate::pages::assign_hours::AssignHoursPage;
use crate::pages::home::HomePage;
use crate::pages::list_events::ListEventsPage;
use crate::pages::login::LoginPage;
use crate::pages::mark_attendance::MarkAttendancePage;
use crate::pages::register::RegisterPage;
use crate::pages::volunteer_dashboard::VolunteerDashboardPage;
use crate::state::session::{BrowserSessionStore, Role, SessionState, SessionStore as _};

/// Root application component.
///
/// Seeds the reactive session snapshot from durable storage, provides it via
/// context, and declares the full navigation surface. Every protected route
/// goes through the same [`Guarded`] wrapper.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState { session: BrowserSessionStore.get() });
    provide_context(session);

    view! {
        <Title text="Prabhav Volunteer System"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=(StaticSegment("volunteer"), StaticSegment("dashboard"))
                        view=|| {
                            view! {
                                <Guarded role=Role::Volunteer>
                                    <VolunteerDashboardPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| {
                            view! {
                                <Guarded role=Role::Admin>
                                    <AdminDashboardPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("volunteers"))
                        view=|| {
                            view! {
                                <Guarded role=Role::Admin>
                                    <AdminVolunteersPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(
                            StaticSegment("admin"),
                            StaticSegment("events"),
                            StaticSegment("add"),
                        )
                        view=|| {
                            view! {
                                <Guarded role=Role::Admin>
                                    <AddEventPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("events"))
                        view=|| {
                            view! {
                                <Guarded role=Role::Admin>
                                    <ListEventsPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(
                            StaticSegment("admin"),
                            StaticSegment("hours"),
                            StaticSegment("assign"),
                        )
                        view=|| {
                            view! {
                                <Guarded role=Role::Admin>
                                    <AssignHoursPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(
                            StaticSegment("admin"),
                            StaticSegment("attendance"),
                            StaticSegment("mark"),
                        )
                        view=|| {
                            view! {
                                <Guarded role=Role::Admin>
                                    <MarkAttendancePage/>
                                </Guarded>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
