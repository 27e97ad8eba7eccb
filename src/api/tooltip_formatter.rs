use num_format::{Locale, ToFormattedString};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

const MILLION: i64 = 1_000_000;

/// Tooltip display mode read from the `data-tooltip-format` attribute.
///
/// Unknown modes fall back to [`TooltipFormat::Raw`]; tooltip text is
/// cosmetic and never fails a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum TooltipFormat {
    /// Value is in millions of dollars: `2` renders as `$2,000,000`.
    DollarsMillions,
    /// Value already is a percentage: `42` renders as `42%`.
    Percentages,
    #[default]
    Raw,
}

impl TooltipFormat {
    #[must_use]
    pub fn from_mode(mode: &str) -> Self {
        match mode.trim() {
            "dollars-millions" => Self::DollarsMillions,
            "percentages" => Self::Percentages,
            "" => Self::Raw,
            other => {
                debug!(mode = other, "unknown tooltip format, using raw values");
                Self::Raw
            }
        }
    }

    #[must_use]
    pub fn format(self, raw: f64) -> String {
        match self {
            Self::DollarsMillions => format_dollars_millions(raw),
            Self::Percentages => format!("{raw}%"),
            Self::Raw => raw.to_string(),
        }
    }
}

impl From<String> for TooltipFormat {
    fn from(mode: String) -> Self {
        Self::from_mode(&mode)
    }
}

/// Returns the tooltip label formatter for `mode`.
pub fn formatter_for(mode: &str) -> impl Fn(f64) -> String + Copy {
    let format = TooltipFormat::from_mode(mode);
    move |raw| format.format(raw)
}

/// Scales `raw` millions to whole dollars with thousands grouping.
///
/// Scaling is exact through `Decimal` up to its range (about 7.9e28). Larger
/// magnitudes fall back to the nearest `f64` integer, still grouped.
/// Non-finite input has no dollar amount and renders as its raw text.
fn format_dollars_millions(raw: f64) -> String {
    if !raw.is_finite() {
        return raw.to_string();
    }
    let exact = Decimal::from_f64_retain(raw)
        .and_then(|value| value.checked_mul(Decimal::from(MILLION)))
        .and_then(|value| value.round().to_i128());

    let (negative, grouped) = match exact {
        Some(dollars) => (
            dollars < 0,
            dollars.unsigned_abs().to_formatted_string(&Locale::en),
        ),
        None => {
            let scaled = raw * MILLION as f64;
            (scaled < 0.0, group_digits(&format!("{:.0}", scaled.abs())))
        }
    };
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn group_digits(digits: &str) -> String {
    let separator = Locale::en.separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}
