//! Score Cards
//!
//! One card per house: crest, name, running total. A house with no snapshot
//! yet shows 0 rather than a hole in the layout.

use leptos::*;

use crate::api::client::{House, HousePoints};

/// Per-house score card strip
#[component]
pub fn ScoreBoard(points: ReadSignal<Option<HousePoints>>) -> impl IntoView {
    view! {
        <aside class="scores">
            {House::DISPLAY_ORDER
                .iter()
                .map(|&house| view! { <HouseCard house=house points=points /> })
                .collect_view()}
        </aside>
    }
}

#[component]
fn HouseCard(house: House, points: ReadSignal<Option<HousePoints>>) -> impl IntoView {
    view! {
        <div class=house.css_class()>
            <img
                class="large house"
                src=format!("{}.png", house.css_class())
                alt=house.name()
            />
            <h3>{house.name()}</h3>
            <p>{move || points.get().map(|snapshot| snapshot.get(house)).unwrap_or(0)}</p>
        </div>
    }
}
