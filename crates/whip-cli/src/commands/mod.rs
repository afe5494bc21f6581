pub mod dispatch;
pub mod report;
pub mod schema;
pub mod sessions;
