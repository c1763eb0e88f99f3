use crate::params::{ParamError, ParamDef, TransformParams};
use crate::signal::SignalFn;
use crate::signals;
use std::fmt;
use std::str::FromStr;

/// The four transform demos, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    TimeShift,
    TimeReversal,
    AmplitudeScaling,
    TimeScaling,
}

/// Static explanatory text shown above a demo's controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoInfo {
    pub tab_label: &'static str,
    pub heading: &'static str,
    pub summary: &'static str,
    pub formula: &'static str,
    pub notes: &'static [&'static str],
    pub control_hint: &'static str,
    /// Side-by-side comparison cards shown under the plot
    pub cards: &'static [InfoCard],
    /// Standalone remark shown after the cards
    pub remark: Option<InfoCard>,
}

/// Short titled note, optionally with a concrete example line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub body: &'static str,
    pub example: Option<&'static str>,
}

impl InfoCard {
    const fn new(title: &'static str, body: &'static str) -> Self {
        Self {
            title,
            body,
            example: None,
        }
    }

    const fn with_example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }
}

static TIME_SHIFT_PARAMS: [ParamDef; 1] = [ParamDef::number(
    "shift",
    "Time Shift (t₀)",
    (-5.0, 5.0, 0.1),
    0.0,
    0.0,
    ["-5 (advance)", "0", "+5 (delay)"],
)];

static TIME_REVERSAL_PARAMS: [ParamDef; 3] = [
    ParamDef::flag("reversed", "Apply Time Reversal", false),
    ParamDef::number(
        "phase_shift",
        "Phase Shift (t₀)",
        (-5.0, 5.0, 0.1),
        0.0,
        0.0,
        ["-5", "0", "+5"],
    ),
    ParamDef::number(
        "amplitude",
        "Amplitude Scale (A)",
        (-3.0, 3.0, 0.1),
        1.0,
        1.0,
        ["-3", "0", "+3"],
    ),
];

static AMPLITUDE_PARAMS: [ParamDef; 1] = [ParamDef::number(
    "amplitude",
    "Amplitude Factor (A)",
    (-3.0, 3.0, 0.1),
    1.0,
    0.0,
    ["-3 (inverted)", "0", "+3 (amplified)"],
)];

static TIME_SCALING_PARAMS: [ParamDef; 1] = [ParamDef::number(
    "factor",
    "Time Scaling Factor (a)",
    (0.1, 3.0, 0.1),
    1.0,
    0.1,
    ["0.1 (expanded)", "1.0", "3.0 (compressed)"],
)
.with_floor(crate::transform::MIN_TIME_SCALE)];

static TIME_SHIFT_INFO: DemoInfo = DemoInfo {
    tab_label: "Time Shifting",
    heading: "Time Shifting",
    summary: "Time shifting delays or advances a signal in time without changing its shape.",
    formula: "y(t) = x(t - t₀)",
    notes: &[
        "If t₀ > 0: Signal is delayed (shifted right)",
        "If t₀ < 0: Signal is advanced (shifted left)",
    ],
    control_hint: "Adjust the time shift parameter to see the effect",
    cards: &[],
    remark: None,
};

static TIME_REVERSAL_INFO: DemoInfo = DemoInfo {
    tab_label: "Time Reversal",
    heading: "Time Reversal",
    summary: "Time reversal flips the signal about the vertical axis (t = 0), creating a mirror image in time.",
    formula: "y(t) = x(-t)",
    notes: &[
        "The signal is flipped horizontally",
        "What was at time t is now at time -t",
        "Often used in correlation and convolution operations",
    ],
    control_hint: "Toggle time reversal to see the effect",
    cards: &[
        InfoCard::new(
            "Original: x(t)",
            "The signal as a function of positive and negative time",
        ),
        InfoCard::new("Reversed: x(-t)", "The signal flipped about the vertical axis"),
    ],
    remark: None,
};

static AMPLITUDE_INFO: DemoInfo = DemoInfo {
    tab_label: "Amplitude Scaling",
    heading: "Amplitude Scaling",
    summary: "Amplitude scaling multiplies the signal's amplitude by a constant factor, making it larger or smaller.",
    formula: "y(t) = A · x(t)",
    notes: &[
        "If A > 1: Signal is amplified (increased amplitude)",
        "If 0 < A < 1: Signal is attenuated (decreased amplitude)",
        "If A < 0: Signal is inverted and scaled",
    ],
    control_hint: "Adjust the amplitude scaling factor",
    cards: &[
        InfoCard::new("A < 0", "Inverted signal"),
        InfoCard::new("0 < A < 1", "Attenuated signal"),
        InfoCard::new("A > 1", "Amplified signal"),
    ],
    remark: None,
};

static TIME_SCALING_INFO: DemoInfo = DemoInfo {
    tab_label: "Time Scaling",
    heading: "Time Scaling",
    summary: "Time scaling compresses or expands a signal in the time domain, making it faster or slower.",
    formula: "y(t) = x(a·t)",
    notes: &[
        "If a > 1: Signal is compressed (faster, narrower)",
        "If 0 < a < 1: Signal is expanded (slower, wider)",
        "If a < 0: Signal is both reversed and scaled",
    ],
    control_hint: "Adjust the time scaling factor",
    cards: &[
        InfoCard::new(
            "Compression (a > 1)",
            "The signal becomes narrower and events happen faster",
        )
        .with_example("Example: Playing audio at 2× speed"),
        InfoCard::new(
            "Expansion (0 < a < 1)",
            "The signal becomes wider and events happen slower",
        )
        .with_example("Example: Playing audio at 0.5× speed"),
    ],
    remark: Some(InfoCard::new(
        "Note on Duration",
        "Time scaling affects the duration of the signal inversely to the scaling factor. \
         A signal compressed by factor 2 will have half its original duration.",
    )),
};

impl DemoKind {
    pub const ALL: [DemoKind; 4] = [
        DemoKind::TimeShift,
        DemoKind::TimeReversal,
        DemoKind::AmplitudeScaling,
        DemoKind::TimeScaling,
    ];

    /// Kebab-case identifier used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            DemoKind::TimeShift => "time-shift",
            DemoKind::TimeReversal => "time-reversal",
            DemoKind::AmplitudeScaling => "amplitude",
            DemoKind::TimeScaling => "time-scaling",
        }
    }

    pub fn info(self) -> &'static DemoInfo {
        match self {
            DemoKind::TimeShift => &TIME_SHIFT_INFO,
            DemoKind::TimeReversal => &TIME_REVERSAL_INFO,
            DemoKind::AmplitudeScaling => &AMPLITUDE_INFO,
            DemoKind::TimeScaling => &TIME_SCALING_INFO,
        }
    }

    pub fn parameters(self) -> &'static [ParamDef] {
        match self {
            DemoKind::TimeShift => &TIME_SHIFT_PARAMS,
            DemoKind::TimeReversal => &TIME_REVERSAL_PARAMS,
            DemoKind::AmplitudeScaling => &AMPLITUDE_PARAMS,
            DemoKind::TimeScaling => &TIME_SCALING_PARAMS,
        }
    }

    pub fn parameter(self, name: &str) -> Result<&'static ParamDef, ParamError> {
        self.parameters()
            .iter()
            .find(|param| param.name == name)
            .ok_or_else(|| ParamError::UnknownParameter {
                demo: self.id(),
                name: name.to_string(),
            })
    }

    /// Closed-form original signal of this demo.
    pub fn original_fn(self) -> fn(f64) -> f64 {
        match self {
            DemoKind::TimeShift => signals::two_tone,
            DemoKind::TimeReversal => signals::asymmetric_pulse,
            DemoKind::AmplitudeScaling => signals::damped_sine,
            DemoKind::TimeScaling => signals::damped_two_tone,
        }
    }

    pub fn original(self) -> SignalFn {
        SignalFn::from(self.original_fn())
    }

    pub fn default_params(self) -> TransformParams {
        match self {
            DemoKind::TimeShift => TransformParams::TimeShift { shift: 0.0 },
            DemoKind::TimeReversal => TransformParams::TimeReversal {
                reversed: false,
                phase_shift: 0.0,
                amplitude: 1.0,
            },
            DemoKind::AmplitudeScaling => TransformParams::AmplitudeScaling { amplitude: 1.0 },
            DemoKind::TimeScaling => TransformParams::TimeScaling { factor: 1.0 },
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DemoKind {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        DemoKind::ALL
            .into_iter()
            .find(|kind| kind.id() == normalized)
            .ok_or_else(|| ParamError::UnknownDemo(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::DemoKind;
    use crate::params::ParamValue;

    #[test]
    fn ids_round_trip() {
        for kind in DemoKind::ALL {
            assert_eq!(kind.id().parse::<DemoKind>(), Ok(kind));
        }
        assert_eq!("TIME_SHIFT".parse::<DemoKind>(), Ok(DemoKind::TimeShift));
        assert!("fft".parse::<DemoKind>().is_err());
    }

    #[test]
    fn comparison_cards_per_demo() {
        let counts: Vec<usize> = DemoKind::ALL
            .into_iter()
            .map(|kind| kind.info().cards.len())
            .collect();
        assert_eq!(counts, vec![0, 2, 3, 2]);

        let scaling = DemoKind::TimeScaling.info();
        assert_eq!(scaling.cards[0].example, Some("Example: Playing audio at 2× speed"));
        let remark = scaling.remark.expect("duration note");
        assert!(remark.body.ends_with("will have half its original duration."));
        assert_eq!(DemoKind::AmplitudeScaling.info().cards[0].title, "A < 0");
    }

    #[test]
    fn default_params_match_declared_defaults() {
        for kind in DemoKind::ALL {
            let params = kind.default_params();
            for param in kind.parameters() {
                assert_eq!(params.get(param.name), Some(param.default), "{kind} {}", param.name);
            }
        }
    }

    #[test]
    fn reversal_exposes_flag_and_two_numbers() {
        let specs = DemoKind::TimeReversal.parameters();
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].default, ParamValue::Flag(false));
        assert!(DemoKind::TimeReversal.parameter("shift").is_err());
    }
}
