//! Point Log
//!
//! Chronological record of awards and deductions, most recent first. The
//! server sends ascending order; the view reverses it.

use leptos::*;

use crate::api::client::{House, LogEntry};

/// Point-change log table
#[component]
pub fn PointLog(logs: ReadSignal<Option<Vec<LogEntry>>>) -> impl IntoView {
    view! {
        <div class="log">
            <table>
                <thead>
                    <tr>
                        <th>"House"</th>
                        <th>"Student"</th>
                        <th>"Points"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        logs.get().map(|entries| {
                            entries
                                .into_iter()
                                .rev()
                                .map(|entry| view! { <LogRow entry=entry /> })
                                .collect_view()
                        })
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn LogRow(entry: LogEntry) -> impl IntoView {
    // An index outside the table degrades to a placeholder crest.
    let crest = House::from_index(entry.house)
        .map(|house| house.css_class())
        .unwrap_or("unknown");
    let delta = entry.signed_points();

    view! {
        <tr>
            <td class="log-crest">
                <img class="house" src=format!("{}.png", crest) alt=crest />
            </td>
            <td>
                <div>{entry.name}</div>
                <div class="reason">{entry.reason}</div>
            </td>
            <td class="log-points">{delta}</td>
        </tr>
    }
}
