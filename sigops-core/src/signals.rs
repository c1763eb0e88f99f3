//! Closed-form original signals, one per demo.
//!
//! These are fixed shapes chosen so that each transform is easy to read on
//! the ±10 time window: a two-tone sinusoid for shifting, Gaussian-damped
//! sinusoids for amplitude and time scaling, and an asymmetric pulse
//! for reversal.

/// `sin(t) + 0.5·sin(3t)`
pub fn two_tone(t: f64) -> f64 {
    t.sin() + 0.5 * (3.0 * t).sin()
}

/// `sin(2t)·exp(−t²/20)`
pub fn damped_sine(t: f64) -> f64 {
    (2.0 * t).sin() * (-(t * t) / 20.0).exp()
}

/// `sin(t)·exp(−t²/30) + 0.3·sin(3t)·exp(−t²/30)`
pub fn damped_two_tone(t: f64) -> f64 {
    t.sin() * (-(t * t) / 30.0).exp() + 0.3 * (3.0 * t).sin() * (-(t * t) / 30.0).exp()
}

/// Asymmetric pulse: ramps up on [−2, 0), decays linearly on [0, 2),
/// decays exponentially on [2, 4) and is zero elsewhere.
pub fn asymmetric_pulse(t: f64) -> f64 {
    if t < -2.0 {
        0.0
    } else if t < 0.0 {
        (t + 2.0) * 0.5
    } else if t < 2.0 {
        1.0 - t * 0.3
    } else if t < 4.0 {
        0.4 * (-(t - 2.0)).exp()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_breakpoints() {
        assert_eq!(asymmetric_pulse(-3.0), 0.0);
        assert_eq!(asymmetric_pulse(-2.0), 0.0);
        assert_eq!(asymmetric_pulse(-1.0), 0.5);
        assert_eq!(asymmetric_pulse(0.0), 1.0);
        assert!((asymmetric_pulse(1.0) - 0.7).abs() < 1e-12);
        assert!((asymmetric_pulse(2.0) - 0.4).abs() < 1e-12);
        assert_eq!(asymmetric_pulse(4.0), 0.0);
        assert_eq!(asymmetric_pulse(9.0), 0.0);
    }

    #[test]
    fn pulse_is_not_symmetric() {
        assert_ne!(asymmetric_pulse(1.0), asymmetric_pulse(-1.0));
        assert_ne!(asymmetric_pulse(3.0), asymmetric_pulse(-3.0));
    }

    #[test]
    fn smooth_signals_at_origin() {
        assert_eq!(two_tone(0.0), 0.0);
        assert_eq!(damped_sine(0.0), 0.0);
        assert_eq!(damped_two_tone(0.0), 0.0);
        let quarter = std::f64::consts::FRAC_PI_2;
        assert!((two_tone(quarter) - 0.5).abs() < 1e-12);
    }
}
