use crate::commands::{Cli, Commands};
use crate::output::{print_info, print_sample};
use sigops_core::{parse_number_input, DemoKind, ParamError, ParamKind, TransformStore};
use sigops_gui::{run_gui, GuiConfig};

/// Upper bound on rows printed by `sample`.
const MAX_SAMPLES: usize = 100_000;

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("expected NAME=VALUE, got `{0}`")]
    MalformedAssignment(String),
    #[error("invalid value `{value}` for `{name}`")]
    InvalidValue { name: String, value: String },
    #[error("invalid sample range: from {from} to {to} step {step}")]
    InvalidRange { from: f64, to: f64, step: f64 },
    #[error(transparent)]
    Param(#[from] ParamError),
}

pub fn handle_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        None => {
            let config = GuiConfig {
                width: cli.width,
                height: cli.height,
                initial_demo: cli.demo,
                ..GuiConfig::default()
            };
            log::info!("starting viewer on {} demo", config.initial_demo);
            run_gui(config)?;
        }
        Some(Commands::Sample {
            demo,
            params,
            from,
            to,
            step,
        }) => handle_sample(demo, &params, from, to, step)?,
    }
    Ok(())
}

fn handle_sample(
    demo: DemoKind,
    assignments: &[String],
    from: f64,
    to: f64,
    step: f64,
) -> Result<(), CommandError> {
    let mut store = TransformStore::new(demo);
    for assignment in assignments {
        apply_assignment(&mut store, assignment)?;
    }
    let times = sample_times(from, to, step)?;
    log::debug!("sampling {} with {}", demo, store.caption());

    print_info(&format!("{demo}: {}", store.caption()));
    let original = store.original();
    let transformed = store.transformed();
    for t in times {
        print_sample(t, original.eval(t), transformed.eval(t));
    }
    Ok(())
}

pub(crate) fn apply_assignment(
    store: &mut TransformStore,
    assignment: &str,
) -> Result<(), CommandError> {
    let (name, value) = assignment
        .split_once('=')
        .ok_or_else(|| CommandError::MalformedAssignment(assignment.to_string()))?;
    let name = name.trim();
    let param = store.kind().parameter(name)?;
    let invalid = || CommandError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    };
    match param.kind {
        ParamKind::Number => {
            let number = parse_number_input(value).ok_or_else(invalid)?;
            store.set_parameter(param.name, number)?;
        }
        ParamKind::Flag => {
            let flag = parse_flag(value).ok_or_else(invalid)?;
            store.set_parameter(param.name, flag)?;
        }
    }
    Ok(())
}

fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

pub(crate) fn sample_times(from: f64, to: f64, step: f64) -> Result<Vec<f64>, CommandError> {
    let invalid = CommandError::InvalidRange { from, to, step };
    if !(from.is_finite() && to.is_finite() && step.is_finite()) || step <= 0.0 || to < from {
        return Err(invalid);
    }
    let steps = ((to - from) / step + 1e-9).floor();
    if !steps.is_finite() || steps >= MAX_SAMPLES as f64 {
        return Err(invalid);
    }
    let count = steps as usize + 1;
    log::debug!("sampling {} points from {} to {}", count, from, to);
    Ok((0..count).map(|i| from + i as f64 * step).collect())
}
