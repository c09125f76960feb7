use serde::{Deserialize, Serialize};

use crate::error::CounterError;

/// Counter values at or above this get [`CounterClass::Positive`].
pub const DEFAULT_POSITIVE_THRESHOLD: i32 = 100;
/// Counter values at or below this get [`CounterClass::Negative`].
pub const DEFAULT_NEGATIVE_THRESHOLD: i32 = -50;

/// Visual indicator attached to the counter display.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CounterClass {
    Positive,
    Negative,
}

impl CounterClass {
    pub fn as_str(self) -> &'static str {
        match self {
            CounterClass::Positive => "green",
            CounterClass::Negative => "red",
        }
    }
}

/// Inclusive boundaries deciding which [`CounterClass`] a value gets.
///
/// `negative` is always strictly below `positive`, so a value can never
/// qualify for both classes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct StyleThresholds {
    positive: i32,
    negative: i32,
}

#[derive(Deserialize)]
struct RawThresholds {
    positive: i32,
    negative: i32,
}

impl TryFrom<RawThresholds> for StyleThresholds {
    type Error = CounterError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        StyleThresholds::new(raw.positive, raw.negative)
    }
}

impl Default for StyleThresholds {
    fn default() -> Self {
        Self {
            positive: DEFAULT_POSITIVE_THRESHOLD,
            negative: DEFAULT_NEGATIVE_THRESHOLD,
        }
    }
}

impl StyleThresholds {
    pub fn new(positive: i32, negative: i32) -> Result<Self, CounterError> {
        if negative >= positive {
            return Err(CounterError::OverlappingThresholds { positive, negative });
        }
        Ok(Self { positive, negative })
    }

    pub fn positive(&self) -> i32 {
        self.positive
    }

    pub fn negative(&self) -> i32 {
        self.negative
    }

    pub fn classify(&self, value: i32) -> Option<CounterClass> {
        if value >= self.positive {
            Some(CounterClass::Positive)
        } else if value <= self.negative {
            Some(CounterClass::Negative)
        } else {
            None
        }
    }
}
