//! Admin Page ("Dumbledore")
//!
//! Award or deduct points: one student at a time, or a whole CSV of them.
//! Guarded; every request here carries the bearer token.

use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::client::Student;
use crate::state::session::SessionState;

#[derive(Clone, Copy, PartialEq)]
enum AwardMode {
    Single,
    Bulk,
}

/// Admin page component
#[component]
pub fn Dumbledore() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    let (students, set_students) = create_signal(Vec::<Student>::new());
    let (student_id, set_student_id) = create_signal(None::<u32>);
    let (points, set_points) = create_signal("0".to_string());
    let (reason, set_reason) = create_signal(String::new());
    let (file, set_file) = create_signal(None::<web_sys::File>);
    let (mode, set_mode) = create_signal(AwardMode::Single);
    let (submitting, set_submitting) = create_signal(false);

    // Roster is fetched once per mount, never refreshed.
    create_effect(move |_| {
        let token = match session.token() {
            Some(token) => token,
            None => return,
        };
        spawn_local(async move {
            match api::fetch_students(&token).await {
                Ok(roster) => set_students.set(roster),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch students: {}", e).into());
                }
            }
        });
    });

    let navigate_for_submit = navigate.clone();
    let on_submit = move |_: web_sys::MouseEvent| {
        let token = match session.token() {
            Some(token) => token,
            None => return,
        };

        // The delta goes out exactly as typed; the server owns validation.
        let delta = points.get();
        let why = reason.get();

        match mode.get() {
            AwardMode::Single => {
                let id = match student_id.get() {
                    Some(id) => id,
                    None => return,
                };

                set_submitting.set(true);
                let navigate = navigate_for_submit.clone();
                spawn_local(async move {
                    match api::award_student(&token, id, &delta, &why).await {
                        Ok(()) => {
                            navigate("/", Default::default());
                        }
                        Err(e) => {
                            web_sys::console::error_1(&format!("Award failed: {}", e).into());
                            set_submitting.set(false);
                        }
                    }
                });
            }
            AwardMode::Bulk => {
                let selected = match file.get() {
                    Some(file) => file,
                    None => return,
                };

                set_submitting.set(true);
                let navigate = navigate_for_submit.clone();
                spawn_local(async move {
                    match api::award_students_bulk(&token, &delta, &why, &selected).await {
                        Ok(()) => {
                            navigate("/", Default::default());
                        }
                        Err(e) => {
                            web_sys::console::error_1(&format!("Bulk award failed: {}", e).into());
                            set_submitting.set(false);
                        }
                    }
                });
            }
        }
    };

    let navigate_for_sign_out = navigate;
    let on_sign_out = move |_: web_sys::MouseEvent| {
        let navigate = navigate_for_sign_out.clone();
        spawn_local(async move {
            session.sign_out().await;
            navigate("/login", Default::default());
        });
    };

    view! {
        <div class="dumbledore">
            // Mode toggle
            <div class="mode-toggle">
                <ModeButton
                    label="Single student"
                    current=mode
                    target=AwardMode::Single
                    on_click=move |_| set_mode.set(AwardMode::Single)
                />
                <ModeButton
                    label="Bulk upload"
                    current=mode
                    target=AwardMode::Bulk
                    on_click=move |_| set_mode.set(AwardMode::Bulk)
                />
            </div>

            {move || {
                if mode.get() == AwardMode::Single {
                    view! {
                        <div>
                            <label>"Student"</label>
                            <select on:change=move |ev| {
                                set_student_id.set(event_target_value(&ev).parse().ok());
                            }>
                                <option value="">"Select a student"</option>
                                {students.get()
                                    .into_iter()
                                    .map(|student| view! {
                                        <option value=student.id.to_string()>{student.name}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div>
                            <label>"Students file (CSV)"</label>
                            <input
                                type="file"
                                accept=".csv"
                                on:change=move |ev| {
                                    let input: web_sys::HtmlInputElement =
                                        ev.target().unwrap().dyn_into().unwrap();
                                    set_file.set(input.files().and_then(|files| files.get(0)));
                                }
                            />
                        </div>
                    }
                    .into_view()
                }
            }}

            <label>"Points"</label>
            <input
                type="number"
                prop:value=move || points.get()
                on:input=move |ev| set_points.set(event_target_value(&ev))
            />

            <label>"Reason"</label>
            <input
                type="text"
                prop:value=move || reason.get()
                on:input=move |ev| set_reason.set(event_target_value(&ev))
            />

            <button type="button" on:click=on_submit disabled=move || submitting.get()>
                {move || if submitting.get() { "Sending..." } else { "Let's go" }}
            </button>

            <button type="button" class="sign-out" on:click=on_sign_out>
                "Log out"
            </button>
        </div>
    }
}

#[component]
fn ModeButton(
    label: &'static str,
    current: ReadSignal<AwardMode>,
    target: AwardMode,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                if current.get() == target {
                    "mode active"
                } else {
                    "mode"
                }
            }
        >
            {label}
        </button>
    }
}
