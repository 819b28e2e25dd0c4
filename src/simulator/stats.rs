//! Stat Counter Module
//! Count-up animation for the numbers on the dashboard stat boxes.
//!
//! The display text is parsed once into a target value and a format; each
//! call to [`StatCounter::advance`] moves one step closer and returns the text
//! to show. Timing is left to the caller.

/// How a stat value is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    /// Bare integer, e.g. `156`
    Plain,
    /// Dollar sign and comma grouping, e.g. `$2,847`
    Currency,
    /// Trailing percent sign, e.g. `45%`
    Percentage,
}

/// One frame of the animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatFrame {
    pub text: String,
    pub done: bool,
}

/// Step state of one animating stat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCounter {
    target: u64,
    format: StatFormat,
    steps: u32,
    step: u32,
}

impl StatCounter {
    pub const DEFAULT_STEPS: u32 = 50;

    /// Parse display text. Returns `None` for text that should stay as is:
    /// no digits at all, or not one of the three recognised shapes.
    pub fn parse(text: &str, steps: u32) -> Option<Self> {
        let format = if text.contains('$') {
            StatFormat::Currency
        } else if text.contains('%') {
            StatFormat::Percentage
        } else if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            StatFormat::Plain
        } else {
            return None;
        };

        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        let target = match digits.parse::<u64>() {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!("Stat '{}' left as is: {}", text, err);
                return None;
            }
        };

        Some(Self {
            target,
            format,
            steps: steps.max(1),
            step: 0,
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn format(&self) -> StatFormat {
        self.format
    }

    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }

    /// Value shown at the current step.
    pub fn current_value(&self) -> u64 {
        if self.is_done() {
            return self.target;
        }
        (self.target as u128 * self.step as u128 / self.steps as u128) as u64
    }

    /// Move one step forward. The last step lands exactly on the target.
    pub fn advance(&mut self) -> StatFrame {
        if !self.is_done() {
            self.step += 1;
        }
        StatFrame {
            text: format_stat(self.current_value(), self.format),
            done: self.is_done(),
        }
    }
}

pub fn format_stat(value: u64, format: StatFormat) -> String {
    match format {
        StatFormat::Plain => value.to_string(),
        StatFormat::Currency => format!("${}", group_thousands(value)),
        StatFormat::Percentage => format!("{}%", value),
    }
}

/// `1234567` -> `1,234,567`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
