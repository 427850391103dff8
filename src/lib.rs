pub mod course;
pub mod debug;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod path;
pub mod tessellation;
pub mod zone;

pub use course::{create_path, CourseDefinition, CourseId, DescentPolicy};
pub use error::{FlumeError, Result};
pub use path::{Path, PathConfig};
pub use zone::{Color, Zone, ZoneTable};
