use alloc::format;
use alloc::string::String;

use crate::ElementId;

/// Number of discrete increments a counter runs through.
pub const COUNTER_STEPS: u32 = 50;
/// Total counter duration in milliseconds.
pub const COUNTER_DURATION_MS: u64 = 1500;

const STEP_MS: u64 = COUNTER_DURATION_MS / COUNTER_STEPS as u64;

/// A one-shot count-up tween for a stat element.
///
/// Created when the element first becomes visible, from the text it displayed at that
/// moment. The tween runs `COUNTER_STEPS` increments over `COUNTER_DURATION_MS`;
/// intermediate frames show the floored running value with the original text's
/// non-numeric remainder appended, and the final frame restores the original text
/// byte-for-byte (so `"100+"` ends as `"100+"`, never `"100"` or a rounded variant).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTween {
    element: ElementId,
    original: String,
    remainder: String,
    target: u64,
    start_ms: u64,
    last_step: u32,
    done: bool,
}

impl CounterTween {
    /// Parses the displayed text and starts a tween at `start_ms`.
    ///
    /// Returns `None` when the text contains no integer; the caller must then leave the
    /// element untouched.
    pub fn parse(element: ElementId, text: &str, start_ms: u64) -> Option<Self> {
        let (digits, remainder) = split_first_integer(text)?;
        let target = digits.parse::<u64>().ok()?;
        fxtrace!(element, target, "CounterTween::parse");
        Some(Self {
            element,
            original: String::from(text),
            remainder,
            target,
            start_ms,
            last_step: 0,
            done: false,
        })
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances to `now_ms` and returns the text to display, if it changed.
    ///
    /// Frames are emitted at most once per elapsed step, values are non-decreasing and
    /// never exceed the target, and the final frame is the original text.
    pub fn advance(&mut self, now_ms: u64) -> Option<String> {
        if self.done {
            return None;
        }

        let elapsed = now_ms.saturating_sub(self.start_ms);
        let step = (elapsed / STEP_MS).min(COUNTER_STEPS as u64) as u32;
        if step == self.last_step {
            return None;
        }
        self.last_step = step;

        let current = self.target as f32 * step as f32 / COUNTER_STEPS as f32;
        if step >= COUNTER_STEPS || current >= self.target as f32 {
            self.done = true;
            return Some(self.original.clone());
        }

        Some(format!("{}{}", current as u64, self.remainder))
    }
}

/// Splits `text` into its first run of ascii digits and everything around it.
fn split_first_integer(text: &str) -> Option<(&str, String)> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let len = text[start..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - start);
    let digits = &text[start..start + len];
    let mut remainder = String::with_capacity(text.len() - len);
    remainder.push_str(&text[..start]);
    remainder.push_str(&text[start + len..]);
    Some((digits, remainder))
}
