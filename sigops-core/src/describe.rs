//! Caption and explanation text for the current parameter values.

use crate::params::TransformParams;

// `-0.0` would otherwise print as "-0.00".
fn fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value + 0.0)
}

/// Formula with the current values substituted, shown above the plot.
pub fn caption(params: &TransformParams) -> String {
    match *params {
        TransformParams::TimeShift { shift } => format!("y(t) = x(t - {})", fixed(shift, 2)),
        TransformParams::TimeReversal {
            reversed,
            phase_shift,
            amplitude,
        } => {
            if reversed {
                format!(
                    "y(t) = {} × x(-(t - {}))",
                    fixed(amplitude, 1),
                    fixed(phase_shift, 1)
                )
            } else {
                format!(
                    "y(t) = {} × x(t - {})",
                    fixed(amplitude, 1),
                    fixed(phase_shift, 1)
                )
            }
        }
        TransformParams::AmplitudeScaling { amplitude } => {
            format!("y(t) = {} · x(t)", fixed(amplitude, 2))
        }
        TransformParams::TimeScaling { factor } => format!("y(t) = x({}·t)", fixed(factor, 2)),
    }
}

/// One sentence describing what the transform currently does to the signal.
pub fn explanation(params: &TransformParams) -> String {
    match *params {
        TransformParams::TimeShift { shift } => {
            let direction = if shift > 0.0 {
                "delayed"
            } else if shift < 0.0 {
                "advanced"
            } else {
                "not shifted"
            };
            if shift == 0.0 {
                format!("Current transformation: The signal is {direction}")
            } else {
                format!(
                    "Current transformation: The signal is {direction} by {} time units",
                    fixed(shift.abs(), 2)
                )
            }
        }
        TransformParams::TimeReversal { reversed, .. } => {
            if reversed {
                "Time reversal is active. The signal is flipped horizontally. \
                 You can also adjust phase shift and amplitude."
                    .to_string()
            } else {
                "Time reversal is off. Toggle the switch above to flip the signal. \
                 You can still adjust phase shift and amplitude."
                    .to_string()
            }
        }
        TransformParams::AmplitudeScaling { amplitude: a } => {
            if a > 1.0 {
                format!("The signal is amplified by a factor of {}.", fixed(a, 2))
            } else if a == 1.0 {
                "The signal remains unchanged (original amplitude).".to_string()
            } else if a > 0.0 {
                format!(
                    "The signal is attenuated to {}% of its original amplitude.",
                    fixed(a * 100.0, 0)
                )
            } else if a == 0.0 {
                "The signal is completely suppressed (zero amplitude).".to_string()
            } else if a > -1.0 {
                format!(
                    "The signal is inverted and attenuated to {}% of its original amplitude.",
                    fixed(a.abs() * 100.0, 0)
                )
            } else {
                format!(
                    "The signal is inverted and amplified by a factor of {}.",
                    fixed(a.abs(), 2)
                )
            }
        }
        TransformParams::TimeScaling { factor: a } => {
            if a > 1.0 {
                format!(
                    "The signal is compressed by a factor of {}. It appears {}× faster/narrower.",
                    fixed(a, 2),
                    fixed(a, 1)
                )
            } else if a == 1.0 {
                "The signal remains unchanged (original time scale).".to_string()
            } else {
                let inverse = 1.0 / a;
                format!(
                    "The signal is expanded by a factor of {}. It appears {}× slower/wider.",
                    fixed(inverse, 2),
                    fixed(inverse, 1)
                )
            }
        }
    }
}
