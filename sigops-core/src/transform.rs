//! Function composition for the four transforms.
//!
//! Every builder takes the original signal by reference, clones the shared
//! handle into a new closure and returns a fresh [`SignalFn`]. The original is
//! never modified.

use crate::signal::SignalFn;

/// Smallest time-scale factor accepted anywhere. Zero would collapse the whole
/// window onto `x(0)`.
pub const MIN_TIME_SCALE: f64 = 0.01;

pub fn clamp_time_scale(factor: f64) -> f64 {
    if factor.is_finite() {
        factor.max(MIN_TIME_SCALE)
    } else {
        1.0
    }
}

/// `y(t) = x(t − t₀)`
pub fn time_shift(original: &SignalFn, shift: f64) -> SignalFn {
    let x = original.clone();
    SignalFn::new(move |t| x.eval(t - shift))
}

/// `y(t) = A · x(±(t − t₀))`, with the sign picked by `reversed`.
pub fn time_reversal(
    original: &SignalFn,
    reversed: bool,
    phase_shift: f64,
    amplitude: f64,
) -> SignalFn {
    let x = original.clone();
    SignalFn::new(move |t| {
        let arg = if reversed {
            -(t - phase_shift)
        } else {
            t - phase_shift
        };
        amplitude * x.eval(arg)
    })
}

/// `y(t) = A · x(t)`
pub fn amplitude_scale(original: &SignalFn, amplitude: f64) -> SignalFn {
    let x = original.clone();
    SignalFn::new(move |t| amplitude * x.eval(t))
}

/// `y(t) = x(a · t)` with `a` clamped to [`MIN_TIME_SCALE`].
pub fn time_scale(original: &SignalFn, factor: f64) -> SignalFn {
    let factor = clamp_time_scale(factor);
    let x = original.clone();
    SignalFn::new(move |t| x.eval(factor * t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> SignalFn {
        SignalFn::new(|t| t)
    }

    #[test]
    fn shift_delays_signal() {
        let y = time_shift(&ramp(), 2.0);
        assert_eq!(y.eval(5.0), 3.0);
    }

    #[test]
    fn reversal_with_phase_and_amplitude() {
        let y = time_reversal(&ramp(), true, 1.0, 2.0);
        // 2 · (−(3 − 1))
        assert_eq!(y.eval(3.0), -4.0);
        let y = time_reversal(&ramp(), false, 1.0, 2.0);
        assert_eq!(y.eval(3.0), 4.0);
    }

    #[test]
    fn time_scale_is_clamped() {
        assert_eq!(clamp_time_scale(0.0), MIN_TIME_SCALE);
        assert_eq!(clamp_time_scale(-4.0), MIN_TIME_SCALE);
        assert_eq!(clamp_time_scale(f64::NAN), 1.0);
        assert_eq!(clamp_time_scale(2.5), 2.5);
        let y = time_scale(&ramp(), 0.0);
        assert_eq!(y.eval(100.0), 1.0);
    }

    #[test]
    fn builders_never_touch_the_original() {
        let x = ramp();
        let y = amplitude_scale(&x, 3.0);
        assert!(!y.same_as(&x));
        assert_eq!(x.eval(2.0), 2.0);
        assert_eq!(y.eval(2.0), 6.0);
    }
}
