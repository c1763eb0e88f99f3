//! Transform parameters and signal composition for the SigOps demos.
//!
//! Each demo owns a [`TransformStore`]: the current values of its one to
//! three parameters, the fixed original signal, and the transformed signal
//! derived from them. The renderer only ever sees the two [`SignalFn`]s.

pub mod demo;
pub mod describe;
pub mod params;
pub mod signal;
pub mod signals;
pub mod store;
pub mod transform;

pub use demo::{DemoInfo, DemoKind, InfoCard};
pub use params::{parse_number_input, ParamError, ParamKind, ParamDef, ParamValue, TransformParams};
pub use signal::SignalFn;
pub use store::TransformStore;
