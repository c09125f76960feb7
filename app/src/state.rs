//! Pure state transitions for the counter.
//!
//! Nothing in here touches the DOM or the reactive runtime, so every
//! transition can be exercised without a browser.

use crate::error::CounterError;

/// Input events the counter reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterEvent {
    Increment,
    Decrement,
    /// Raw text typed into the step input.
    ChangeStep(String),
}

/// The two numbers the counter owns, plus the step input exactly as it was typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterState {
    counter_value: i32,
    step_value: i32,
    step_input: String,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            counter_value: 0,
            step_value: 1,
            step_input: String::from("1"),
        }
    }
}

impl CounterState {
    pub fn counter_value(&self) -> i32 {
        self.counter_value
    }

    pub fn step_value(&self) -> i32 {
        self.step_value
    }

    pub fn step_input(&self) -> &str {
        &self.step_input
    }

    /// Returns the state that follows `event`. `self` is left untouched.
    pub fn apply(&self, event: &CounterEvent) -> CounterState {
        match event {
            CounterEvent::Increment => self.increment(),
            CounterEvent::Decrement => self.decrement(),
            CounterEvent::ChangeStep(text) => self.change_step(text),
        }
    }

    pub fn increment(&self) -> CounterState {
        CounterState {
            counter_value: self.counter_value.saturating_add(self.step_value),
            ..self.clone()
        }
    }

    pub fn decrement(&self) -> CounterState {
        CounterState {
            counter_value: self.counter_value.saturating_sub(self.step_value),
            ..self.clone()
        }
    }

    /// Stores `text` verbatim as the displayed step. The numeric step only
    /// changes when `text` parses; otherwise the previous step stays in effect.
    pub fn change_step(&self, text: &str) -> CounterState {
        let step_value = match parse_step(text) {
            Ok(step) => step,
            Err(err) => {
                log::warn!("{err}, keeping step {}", self.step_value);
                self.step_value
            }
        };

        CounterState {
            counter_value: self.counter_value,
            step_value,
            step_input: text.to_owned(),
        }
    }
}

pub fn parse_step(text: &str) -> Result<i32, CounterError> {
    text.trim()
        .parse::<i32>()
        .map_err(|source| CounterError::InvalidStep {
            input: text.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run(events: &[CounterEvent]) -> CounterState {
        events
            .iter()
            .fold(CounterState::default(), |state, event| state.apply(event))
    }

    fn step(text: &str) -> CounterEvent {
        CounterEvent::ChangeStep(text.to_owned())
    }

    #[test]
    fn starts_at_zero_with_step_one() {
        let state = CounterState::default();

        assert_eq!(state.counter_value(), 0);
        assert_eq!(state.step_value(), 1);
        assert_eq!(state.step_input(), "1");
    }

    #[rstest]
    #[case("5")]
    #[case("-3")]
    #[case("0")]
    #[case("007")]
    fn step_input_keeps_typed_text(#[case] text: &str) {
        let state = run(&[step(text)]);

        assert_eq!(state.step_input(), text);
    }

    #[rstest]
    #[case(&[CounterEvent::Increment], 1)]
    #[case(&[step("5"), CounterEvent::Increment], 5)]
    #[case(&[CounterEvent::Decrement], -1)]
    #[case(&[step("5"), CounterEvent::Decrement], -5)]
    #[case(
        &[
            step("10"),
            CounterEvent::Increment,
            CounterEvent::Increment,
            CounterEvent::Increment,
            CounterEvent::Increment,
            CounterEvent::Decrement,
            CounterEvent::Decrement,
        ],
        20
    )]
    fn applies_events_in_order(#[case] events: &[CounterEvent], #[case] expected: i32) {
        assert_eq!(run(events).counter_value(), expected);
    }

    #[test]
    fn apply_does_not_mutate_previous_state() {
        let before = CounterState::default();
        let after = before.apply(&CounterEvent::Increment);

        assert_eq!(before.counter_value(), 0);
        assert_eq!(after.counter_value(), 1);
    }

    #[test]
    fn changing_step_leaves_counter_alone() {
        let state = run(&[CounterEvent::Increment, step("42")]);

        assert_eq!(state.counter_value(), 1);
        assert_eq!(state.step_value(), 42);
    }

    #[test]
    fn surrounding_whitespace_is_ignored_when_parsing() {
        let state = run(&[step(" 7 ")]);

        assert_eq!(state.step_value(), 7);
        assert_eq!(state.step_input(), " 7 ");
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("1.5")]
    fn malformed_step_keeps_previous_value(#[case] text: &str) {
        let state = run(&[step("3"), step(text), CounterEvent::Increment]);

        assert_eq!(state.step_input(), text);
        assert_eq!(state.step_value(), 3);
        assert_eq!(state.counter_value(), 3);
    }

    #[test]
    fn parse_step_reports_the_offending_text() {
        let err = parse_step("ten").unwrap_err();

        assert!(matches!(err, CounterError::InvalidStep { ref input, .. } if input == "ten"));
    }

    #[test]
    fn saturates_at_integer_bounds() {
        let max = run(&[step(&i32::MAX.to_string()), CounterEvent::Increment, CounterEvent::Increment]);
        assert_eq!(max.counter_value(), i32::MAX);

        let min = run(&[step(&i32::MAX.to_string()), CounterEvent::Decrement, CounterEvent::Decrement]);
        assert_eq!(min.counter_value(), -i32::MAX - 1);
    }
}
