pub mod error;
pub mod field;
pub mod math;
pub mod trace;

pub use error::{FlowTraceError, Result};
pub use field::{AngleField, SampleMode};
pub use trace::{
    trace_and_polygonize, Centerline, TaperedPolygon, TraceBatch, TraceRequest,
};
