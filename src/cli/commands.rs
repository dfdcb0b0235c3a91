pub mod initdb;
pub mod openapi;
pub mod seed;
pub mod serve;

pub use initdb::{init_database, run_migrations};
pub use openapi::print_openapi;
pub use seed::seed_database;
pub use serve::serve;
