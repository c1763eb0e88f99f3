use crate::demo::DemoKind;
use crate::describe;
use crate::params::{ParamError, ParamValue, TransformParams};
use crate::signal::SignalFn;
use crate::transform;

/// Parameter state of one mounted demo and the two signals derived from it.
///
/// The original signal is built once and never replaced. The transformed
/// signal is rebuilt whenever a parameter actually changes, which gives it a
/// new identity and bumps [`TransformStore::revision`].
pub struct TransformStore {
    kind: DemoKind,
    params: TransformParams,
    original: SignalFn,
    transformed: SignalFn,
    revision: u64,
}

impl TransformStore {
    pub fn new(kind: DemoKind) -> Self {
        let params = kind.default_params();
        let original = kind.original();
        let transformed = compose(&params, &original);
        Self {
            kind,
            params,
            original,
            transformed,
            revision: 0,
        }
    }

    pub fn kind(&self) -> DemoKind {
        self.kind
    }

    pub fn params(&self) -> &TransformParams {
        &self.params
    }

    pub fn parameter(&self, name: &str) -> Result<ParamValue, ParamError> {
        let param = self.kind.parameter(name)?;
        self.params
            .get(param.name)
            .ok_or_else(|| ParamError::UnknownParameter {
                demo: self.kind.id(),
                name: name.to_string(),
            })
    }

    /// Stores a new parameter value.
    ///
    /// Numeric values go through the parameter's NaN guard and floor. Returns
    /// `Ok(true)` when the value changed and the transformed signal was
    /// rebuilt, `Ok(false)` when it was already current.
    pub fn set_parameter(
        &mut self,
        name: &str,
        value: impl Into<ParamValue>,
    ) -> Result<bool, ParamError> {
        let param = self.kind.parameter(name)?;
        let value = value.into();
        param.check_kind(value)?;
        let value = match value {
            ParamValue::Number(v) => ParamValue::Number(param.sanitize(v)),
            flag => flag,
        };
        if self.params.get(param.name) == Some(value) {
            return Ok(false);
        }
        if !self.params.set(param.name, value) {
            return Err(ParamError::UnknownParameter {
                demo: self.kind.id(),
                name: name.to_string(),
            });
        }
        self.rebuild();
        log::debug!("{}: {} = {}", self.kind, param.name, value);
        Ok(true)
    }

    /// Applies numeric field text, falling back to the parameter's default
    /// fallback when the text is not a number. Returns the value stored.
    pub fn set_parameter_text(&mut self, name: &str, text: &str) -> Result<f64, ParamError> {
        let param = self.kind.parameter(name)?;
        let value = param.value_from_text(text);
        self.set_parameter(param.name, value)?;
        Ok(value)
    }

    /// Restores every parameter to its default.
    pub fn reset(&mut self) {
        let defaults = self.kind.default_params();
        if defaults != self.params {
            self.params = defaults;
            self.rebuild();
        }
    }

    pub fn original(&self) -> &SignalFn {
        &self.original
    }

    pub fn transformed(&self) -> &SignalFn {
        &self.transformed
    }

    /// Every demo draws its original alongside the transformed curve.
    pub fn show_original(&self) -> bool {
        true
    }

    /// Number of times the transformed signal has been rebuilt.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn caption(&self) -> String {
        describe::caption(&self.params)
    }

    pub fn explanation(&self) -> String {
        describe::explanation(&self.params)
    }

    fn rebuild(&mut self) {
        self.transformed = compose(&self.params, &self.original);
        self.revision += 1;
    }
}

/// Builds the transformed signal for the given parameters.
pub fn compose(params: &TransformParams, original: &SignalFn) -> SignalFn {
    match *params {
        TransformParams::TimeShift { shift } => transform::time_shift(original, shift),
        TransformParams::TimeReversal {
            reversed,
            phase_shift,
            amplitude,
        } => transform::time_reversal(original, reversed, phase_shift, amplitude),
        TransformParams::AmplitudeScaling { amplitude } => {
            transform::amplitude_scale(original, amplitude)
        }
        TransformParams::TimeScaling { factor } => transform::time_scale(original, factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_value_keeps_identity() {
        let mut store = TransformStore::new(DemoKind::TimeShift);
        let before = store.transformed().clone();
        assert_eq!(store.set_parameter("shift", 0.0), Ok(false));
        assert!(store.transformed().same_as(&before));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn change_rebuilds_transformed_only() {
        let mut store = TransformStore::new(DemoKind::TimeShift);
        let original = store.original().clone();
        let before = store.transformed().clone();
        assert_eq!(store.set_parameter("shift", 1.5), Ok(true));
        assert!(!store.transformed().same_as(&before));
        assert!(store.original().same_as(&original));
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn wrong_kind_and_unknown_name_are_rejected() {
        let mut store = TransformStore::new(DemoKind::TimeReversal);
        assert!(matches!(
            store.set_parameter("reversed", 1.0),
            Err(ParamError::KindMismatch { .. })
        ));
        assert!(matches!(
            store.set_parameter("factor", 1.0),
            Err(ParamError::UnknownParameter { .. })
        ));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn nan_falls_back() {
        let mut store = TransformStore::new(DemoKind::AmplitudeScaling);
        store.set_parameter("amplitude", f64::NAN).unwrap();
        assert_eq!(store.parameter("amplitude"), Ok(ParamValue::Number(0.0)));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut store = TransformStore::new(DemoKind::TimeReversal);
        store.set_parameter("reversed", true).unwrap();
        store.set_parameter("phase_shift", 2.0).unwrap();
        store.reset();
        assert_eq!(store.params(), &DemoKind::TimeReversal.default_params());
        assert_eq!(store.revision(), 3);
    }
}
