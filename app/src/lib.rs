use leptos::*;

mod components;
mod config;
mod error;
mod state;
mod style;

pub use components::*;
pub use config::*;
pub use error::*;
pub use state::*;
pub use style::*;

#[component]
pub fn App(
    cx: Scope,
    #[prop(optional)]
    thresholds: StyleThresholds,
) -> impl IntoView {
    view! { cx,
        <Counter thresholds=thresholds />
    }
}
