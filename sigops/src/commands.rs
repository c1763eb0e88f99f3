use clap::{Parser, Subcommand};
use sigops_core::DemoKind;

#[derive(Parser)]
#[command(name = "sigops", version, about = "Interactive signal transformation demos")]
pub struct Cli {
    /// Demo opened first in the GUI
    #[arg(long, default_value_t = DemoKind::TimeShift)]
    pub demo: DemoKind,
    /// Window width in points
    #[arg(long, default_value_t = 960.0)]
    pub width: f32,
    /// Window height in points
    #[arg(long, default_value_t = 900.0)]
    pub height: f32,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print original and transformed samples of a demo without opening a window
    Sample {
        /// time-shift, time-reversal, amplitude or time-scaling
        #[arg(long)]
        demo: DemoKind,
        /// Parameter assignment such as `shift=2` or `reversed=true`
        #[arg(long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,
        #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
        from: f64,
        #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
        to: f64,
        #[arg(long, default_value_t = 0.5)]
        step: f64,
    },
}
