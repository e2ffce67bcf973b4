pub mod schema_def;
pub use schema_def::*;
