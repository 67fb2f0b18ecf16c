//! House Gauges
//!
//! The big decorative hourglasses. Each gauge is sized by its house's share
//! of the normalization scale via a CSS custom property; nothing here is a
//! precise numeric display.

use leptos::*;

use crate::api::client::{House, HousePoints};

/// Gauge strip, rendered only once a score snapshot has arrived.
#[component]
pub fn HouseGauges(points: ReadSignal<Option<HousePoints>>) -> impl IntoView {
    view! {
        {move || {
            points.get().map(|snapshot| {
                view! {
                    <main class="gauges">
                        {House::DISPLAY_ORDER
                            .iter()
                            .map(|&house| {
                                let size = snapshot.fraction(house);
                                view! {
                                    <div
                                        class=format!("gauge {}", house.css_class())
                                        style=format!("--size: {:.3}", size)
                                    />
                                }
                            })
                            .collect_view()}
                    </main>
                }
            })
        }}
    }
}
