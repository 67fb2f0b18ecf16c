//! Login Page
//!
//! Credential form for the admin console. A failed sign-in leaves the form
//! as it was; diagnostics go to the console only.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::session::SessionState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            return;
        }

        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match session.sign_in(&user, &pass).await {
                Ok(()) => {
                    navigate("/dumbledore", Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Sign-in failed: {}", e).into());
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <form class="login" on:submit=on_submit>
            <div>
                <label>"Username"</label>
                <input
                    name="username"
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label>"Password"</label>
                <input
                    name="password"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Signing in..." } else { "Let's go" }}
            </button>
        </form>
    }
}
