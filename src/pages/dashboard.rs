//! Dashboard Page
//!
//! Public scoreboard: house gauges, score cards and the point-change log.
//! Polls the API every 60 seconds for as long as the view is mounted.

use leptos::*;
use leptos_router::A;
use std::cell::Cell;
use std::rc::Rc;

use crate::api;
use crate::api::client::{HousePoints, LogEntry};
use crate::components::{HouseGauges, PointLog, ScoreBoard};

/// Poll period for scores and logs
const REFRESH_MILLIS: u32 = 60_000;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (points, set_points) = create_signal(None::<HousePoints>);
    let (logs, set_logs) = create_signal(None::<Vec<LogEntry>>);
    let (refreshed_at, set_refreshed_at) = create_signal(None::<String>);

    // Flipped on cleanup so completions that outlive the view are discarded
    // instead of writing into disposed state.
    let cancelled = Rc::new(Cell::new(false));

    let refresh = {
        let cancelled = Rc::clone(&cancelled);
        move || {
            // The two requests are independent: either may fail or finish
            // first without affecting the other. On failure the previous
            // state stays on screen.
            let scores_cancelled = Rc::clone(&cancelled);
            spawn_local(async move {
                match api::fetch_houses().await {
                    Ok(snapshot) => {
                        if !scores_cancelled.get() {
                            set_points.set(Some(snapshot));
                            set_refreshed_at
                                .set(Some(chrono::Local::now().format("%H:%M:%S").to_string()));
                        }
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch house points: {}", e).into(),
                        );
                    }
                }
            });

            let logs_cancelled = Rc::clone(&cancelled);
            spawn_local(async move {
                match api::fetch_logs().await {
                    // None means the API has no log yet; show an empty table,
                    // not an error.
                    Ok(entries) => {
                        if !logs_cancelled.get() {
                            set_logs.set(entries);
                        }
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch log: {}", e).into());
                    }
                }
            });
        }
    };

    refresh();
    let interval = gloo_timers::callback::Interval::new(REFRESH_MILLIS, refresh);

    let cancelled_on_cleanup = Rc::clone(&cancelled);
    on_cleanup(move || {
        cancelled_on_cleanup.set(true);
        // Dropping the handle cancels the timer.
        drop(interval);
    });

    view! {
        <HouseGauges points=points />
        <ScoreBoard points=points />
        <PointLog logs=logs />

        <footer class="refreshed">
            {move || {
                refreshed_at
                    .get()
                    .map(|at| format!("Last refreshed: {}", at))
                    .unwrap_or_else(|| "Waiting for scores...".to_string())
            }}
        </footer>

        <A class="admin" href="/dumbledore">"Admin"</A>
    }
}
