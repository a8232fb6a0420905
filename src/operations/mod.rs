pub mod analytics;
pub mod offset;
pub mod query;
