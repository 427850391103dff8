pub mod creation;
pub mod descent;
pub mod query;
