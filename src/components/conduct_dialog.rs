//! Modal presenting the volunteer code of conduct and certification policy.
//!
//! The text is fixed display copy; nothing here is enforced client-side.

use leptos::prelude::*;

/// Shared conduct dialog, opened from the registration page and the
/// volunteer dashboard.
#[component]
pub fn ConductDialog(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Volunteer Code of Conduct & Certification Policy"</h2>
                    <section class="dialog__section">
                        <h3>"1. Monthly Hour Commitment"</h3>
                        <p>
                            "Volunteers complete a minimum of 10 hours each month across "
                            "on-ground volunteering, online meetings, and department work. "
                            "Departmental work must be submitted on time."
                        </p>
                    </section>
                    <section class="dialog__section">
                        <h3>"2. Communication Protocol"</h3>
                        <p>
                            "Keep communication clear, respectful, and timely. Acknowledge "
                            "messages in official groups and flag absences or delays "
                            "proactively."
                        </p>
                    </section>
                    <section class="dialog__section">
                        <h3>"3. Weekly Online Meetings"</h3>
                        <p>
                            "Attendance at weekly virtual team meetings is compulsory, with "
                            "cameras on. At most two absences per month with prior "
                            "intimation."
                        </p>
                    </section>
                    <section class="dialog__section">
                        <h3>"Certification & Letter of Appreciation"</h3>
                        <p>
                            "Requires a minimum of 3 months of active participation, at "
                            "least 50 hours of combined work, and consistent "
                            "professionalism."
                        </p>
                    </section>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| open.set(false)>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
