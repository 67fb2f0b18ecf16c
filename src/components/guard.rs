//! Route Guard
//!
//! Gates views that require a session.

use leptos::*;
use leptos_router::Redirect;

use crate::state::session::SessionState;

/// What the guard decided for the current render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested view, parameters untouched.
    Render,
    /// Bounce to the login view.
    RedirectToLogin,
}

/// Pure decision: anonymous never sees a guarded view.
pub fn evaluate(authenticated: bool) -> GuardOutcome {
    if authenticated {
        GuardOutcome::Render
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Renders its children only while a session exists; otherwise redirects to
/// `/login`. Re-evaluates on every session change, so a sign-out anywhere
/// revokes a guarded view that is currently on screen.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <Show
            when=move || evaluate(session.is_authenticated()) == GuardOutcome::Render
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_redirects_to_login() {
        assert_eq!(evaluate(false), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn test_authenticated_renders() {
        assert_eq!(evaluate(true), GuardOutcome::Render);
    }
}
