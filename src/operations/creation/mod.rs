mod build_curve;

pub use build_curve::BuildCurve;
