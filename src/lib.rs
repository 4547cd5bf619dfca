pub mod config;
pub mod courses;
pub mod error;
pub mod fetch;
pub mod grades;
pub mod output;
pub mod services;
pub mod session;
pub mod store;
