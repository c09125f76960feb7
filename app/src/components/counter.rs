use leptos::*;

use crate::state::{CounterEvent, CounterState};
use crate::style::{CounterClass, StyleThresholds};

pub const HEADER_TEXT: &str = "My Counter";

/// A counter whose increment and decrement buttons move it by an editable step.
///
/// Every handler feeds a [`CounterEvent`] through [`CounterState::apply`], so the
/// component holds no arithmetic of its own.
#[component]
pub fn Counter(
    cx: Scope,
    /// Boundaries for the positive and negative indicator classes.
    #[prop(optional)]
    thresholds: StyleThresholds,
) -> impl IntoView {
    let (state, set_state) = create_signal(cx, CounterState::default());

    let dispatch = move |event: CounterEvent| {
        set_state.update(|state| {
            *state = state.apply(&event);
            log::debug!(
                "{:?} -> counter {}, step {}",
                event,
                state.counter_value(),
                state.step_value()
            );
        })
    };

    let counter_value = move || state.with(|state| state.counter_value());
    let counter_class = create_memo(cx, move |_| thresholds.classify(counter_value()));
    let initial_step = state.with_untracked(|state| state.step_input().to_owned());

    view! { cx,
        <div>
            <h1 data-testid="header">{HEADER_TEXT}</h1>
            <h2
                data-testid="counter"
                class=move || counter_class.get().map(CounterClass::as_str)
            >
                {counter_value}
            </h2>
            <button
                data-testid="subtract-btn"
                on:click=move |_| dispatch(CounterEvent::Decrement)
            >
                "-"
            </button>
            <input
                data-testid="input"
                type="number"
                value=initial_step
                prop:value=move || state.with(|state| state.step_input().to_owned())
                on:input=move |ev| dispatch(CounterEvent::ChangeStep(event_target_value(&ev)))
            />
            <button
                data-testid="add-btn"
                on:click=move |_| dispatch(CounterEvent::Increment)
            >
                "+"
            </button>
        </div>
    }
}
