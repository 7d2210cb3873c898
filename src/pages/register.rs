//! Volunteer registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::conduct_dialog::ConductDialog;
use crate::net::types::RegisterRequest;

fn validate_registration_input(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    phone_number: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    let phone_number = phone_number.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() || phone_number.is_empty() {
        return Err("Fill in every field.");
    }
    if password != confirm_password {
        return Err("Passwords do not match.");
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        phone_number: phone_number.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let show_conduct = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        let request = match validate_registration_input(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm_password.get(),
            &phone_number.get(),
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
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request).await {
                    Ok(()) => {
                        success.set("Registration successful! Redirecting to login...".to_owned());
                        gloo_timers::future::TimeoutFuture::new(2_000).await;
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(message) => {
                        log::error!("registration failed: {message}");
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card login-card--wide">
                <h1>"Volunteer Registration"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="notice notice--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="notice notice--success">{move || success.get()}</p>
                </Show>
                <button class="btn btn--accent" on:click=move |_| show_conduct.set(true)>
                    "View Volunteer Instructions"
                </button>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="Phone Number"
                        prop:value=move || phone_number.get()
                        on:input=move |ev| phone_number.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm Password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
            <ConductDialog open=show_conduct/>
        </div>
    }
}
