mod enforce_descent;

pub use enforce_descent::{clamp_descent, DescentReport, EnforceDescent, DEFAULT_DESCENT_SAMPLES};
