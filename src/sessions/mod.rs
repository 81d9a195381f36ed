pub mod consts;
pub mod engine;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
