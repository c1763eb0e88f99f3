use std::fmt;

/// A value coming from a parameter control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Flag(bool),
}

impl ParamValue {
    pub fn as_number(self) -> Option<f64> {
        match self {
            ParamValue::Number(value) => Some(value),
            ParamValue::Flag(_) => None,
        }
    }

    pub fn as_flag(self) -> Option<bool> {
        match self {
            ParamValue::Flag(value) => Some(value),
            ParamValue::Number(_) => None,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Flag(value)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(value) => write!(f, "{value}"),
            ParamValue::Flag(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Number,
    Flag,
}

impl ParamKind {
    fn describe(self) -> &'static str {
        match self {
            ParamKind::Number => "number",
            ParamKind::Flag => "flag",
        }
    }
}

/// Static description of one demo parameter, used to build its controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDef {
    /// Stable identifier used by `set_parameter`
    pub name: &'static str,
    /// Human-readable label shown next to the control
    pub label: &'static str,
    pub kind: ParamKind,
    /// Slider range and step (unused for flags)
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: ParamValue,
    /// Value applied when numeric text cannot be parsed
    pub fallback: f64,
    /// Hard lower bound applied to every numeric input, if any
    pub floor: Option<f64>,
    /// Captions under the slider: left end, middle, right end
    pub range_labels: [&'static str; 3],
}

impl ParamDef {
    pub const fn number(
        name: &'static str,
        label: &'static str,
        range: (f64, f64, f64),
        default: f64,
        fallback: f64,
        range_labels: [&'static str; 3],
    ) -> Self {
        Self {
            name,
            label,
            kind: ParamKind::Number,
            min: range.0,
            max: range.1,
            step: range.2,
            default: ParamValue::Number(default),
            fallback,
            floor: None,
            range_labels,
        }
    }

    pub const fn flag(name: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            name,
            label,
            kind: ParamKind::Flag,
            min: 0.0,
            max: 1.0,
            step: 1.0,
            default: ParamValue::Flag(default),
            fallback: 0.0,
            floor: None,
            range_labels: ["", "", ""],
        }
    }

    pub const fn with_floor(mut self, floor: f64) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Applies the NaN guard and the optional floor to a numeric value.
    pub fn sanitize(&self, value: f64) -> f64 {
        let value = if value.is_finite() {
            value
        } else {
            self.fallback
        };
        match self.floor {
            Some(floor) => value.max(floor),
            None => value,
        }
    }

    /// Parses numeric field text, falling back when the text is not a finite number.
    pub fn value_from_text(&self, text: &str) -> f64 {
        self.sanitize(parse_number_input(text).unwrap_or(self.fallback))
    }

    pub(crate) fn check_kind(&self, value: ParamValue) -> Result<(), ParamError> {
        let matches = matches!(
            (self.kind, value),
            (ParamKind::Number, ParamValue::Number(_)) | (ParamKind::Flag, ParamValue::Flag(_))
        );
        if matches {
            Ok(())
        } else {
            Err(ParamError::KindMismatch {
                name: self.name,
                expected: self.kind.describe(),
            })
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("unknown parameter '{name}' for demo '{demo}'")]
    UnknownParameter { demo: &'static str, name: String },
    #[error("parameter '{name}' expects a {expected}")]
    KindMismatch {
        name: &'static str,
        expected: &'static str,
    },
    #[error("unknown demo '{0}'")]
    UnknownDemo(String),
}

/// Parses user input text into a finite number.
///
/// Accepts a comma as decimal separator and a dangling separator while the
/// user is still typing ("1." reads as 1). Returns `None` for empty input, a
/// lone sign, non-numeric text and non-finite results such as "NaN" or "inf".
pub fn parse_number_input(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "+" {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    let normalized = normalized.strip_suffix('.').unwrap_or(&normalized);
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Current parameter values of one demo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformParams {
    TimeShift {
        shift: f64,
    },
    TimeReversal {
        reversed: bool,
        phase_shift: f64,
        amplitude: f64,
    },
    AmplitudeScaling {
        amplitude: f64,
    },
    TimeScaling {
        factor: f64,
    },
}

impl TransformParams {
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        let value = match (self, name) {
            (TransformParams::TimeShift { shift }, "shift") => ParamValue::Number(*shift),
            (TransformParams::TimeReversal { reversed, .. }, "reversed") => {
                ParamValue::Flag(*reversed)
            }
            (TransformParams::TimeReversal { phase_shift, .. }, "phase_shift") => {
                ParamValue::Number(*phase_shift)
            }
            (TransformParams::TimeReversal { amplitude, .. }, "amplitude")
            | (TransformParams::AmplitudeScaling { amplitude }, "amplitude") => {
                ParamValue::Number(*amplitude)
            }
            (TransformParams::TimeScaling { factor }, "factor") => ParamValue::Number(*factor),
            _ => return None,
        };
        Some(value)
    }

    /// Writes `value` into the named field. The caller has already checked
    /// the kind; returns `false` when the field does not exist.
    pub(crate) fn set(&mut self, name: &str, value: ParamValue) -> bool {
        match (self, name, value) {
            (TransformParams::TimeShift { shift }, "shift", ParamValue::Number(v)) => *shift = v,
            (TransformParams::TimeReversal { reversed, .. }, "reversed", ParamValue::Flag(v)) => {
                *reversed = v
            }
            (
                TransformParams::TimeReversal { phase_shift, .. },
                "phase_shift",
                ParamValue::Number(v),
            ) => *phase_shift = v,
            (TransformParams::TimeReversal { amplitude, .. }, "amplitude", ParamValue::Number(v))
            | (TransformParams::AmplitudeScaling { amplitude }, "amplitude", ParamValue::Number(v)) => {
                *amplitude = v
            }
            (TransformParams::TimeScaling { factor }, "factor", ParamValue::Number(v)) => {
                *factor = v
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_input_accepts_commas_and_dangling_separator() {
        assert_eq!(parse_number_input("1,25"), Some(1.25));
        assert_eq!(parse_number_input(" 2.5 "), Some(2.5));
        assert_eq!(parse_number_input("-3."), Some(-3.0));
        assert_eq!(parse_number_input(""), None);
        assert_eq!(parse_number_input("-"), None);
        assert_eq!(parse_number_input("abc"), None);
        assert_eq!(parse_number_input("NaN"), None);
        assert_eq!(parse_number_input("inf"), None);
    }

    #[test]
    fn value_from_text_uses_fallback_and_floor() {
        let param = ParamDef::number("factor", "a", (0.1, 3.0, 0.1), 1.0, 0.1, ["", "", ""])
            .with_floor(0.01);
        assert_eq!(param.value_from_text("oops"), 0.1);
        assert_eq!(param.value_from_text("0"), 0.01);
        assert_eq!(param.value_from_text("-2"), 0.01);
        assert_eq!(param.value_from_text("2,5"), 2.5);
        assert_eq!(param.sanitize(f64::NAN), 0.1);
    }

    #[test]
    fn kind_check_rejects_flag_for_number() {
        let param = ParamDef::number("shift", "t0", (-5.0, 5.0, 0.1), 0.0, 0.0, ["", "", ""]);
        assert!(param.check_kind(ParamValue::Number(1.0)).is_ok());
        assert_eq!(
            param.check_kind(ParamValue::Flag(true)),
            Err(ParamError::KindMismatch {
                name: "shift",
                expected: "number"
            })
        );
    }

    #[test]
    fn params_get_and_set_by_name() {
        let mut params = TransformParams::TimeReversal {
            reversed: false,
            phase_shift: 0.0,
            amplitude: 1.0,
        };
        assert!(params.set("reversed", ParamValue::Flag(true)));
        assert!(params.set("amplitude", ParamValue::Number(-2.0)));
        assert!(!params.set("shift", ParamValue::Number(1.0)));
        assert_eq!(params.get("reversed"), Some(ParamValue::Flag(true)));
        assert_eq!(params.get("amplitude"), Some(ParamValue::Number(-2.0)));
        assert_eq!(params.get("factor"), None);
    }
}
