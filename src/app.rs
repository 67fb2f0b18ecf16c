//! App Root Component
//!
//! Routing plus the session provider.

use leptos::*;
use leptos_router::*;

use crate::components::RequireAuth;
use crate::pages::{Dashboard, Dumbledore, Login};
use crate::state::session::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // One session store for the whole tree, restored from local storage.
    provide_session();

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=Login />
                <Route
                    path="/dumbledore"
                    view=|| {
                        view! {
                            <RequireAuth>
                                <Dumbledore />
                            </RequireAuth>
                        }
                    }
                />
                <Route path="/" view=Dashboard />
            </Routes>
        </Router>
    }
}
