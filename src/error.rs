use thiserror::Error;

/// Top-level error type for flume path construction.
#[derive(Debug, Error)]
pub enum FlumeError {
    #[error(transparent)]
    Course(#[from] CourseError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while turning authored course data into a path.
#[derive(Debug, Error)]
pub enum CourseError {
    #[error("invalid course definition: {0}")]
    InvalidCourseDefinition(String),

    #[error("course `{0}` has an empty zone table")]
    EmptyZoneTable(String),

    #[error("unknown course: {0}")]
    UnknownCourse(String),
}

/// Errors related to curve construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("invalid curve parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`FlumeError`].
pub type Result<T> = std::result::Result<T, FlumeError>;
