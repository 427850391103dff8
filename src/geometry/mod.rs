pub mod curve;

pub use curve::{ArcLengthCurve, CatmullRom, Curve, CurveDomain, Parametrization};
