/// Cafe Service Library
///
/// REST backend for the Caffeine Haven web app: accounts, the menu catalog,
/// the memories feed with likes and pins, reservations, carts, coupons and
/// payment intents.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Stored records and request bodies
/// - `services`: Interaction processing, menu filters, payments
/// - `db`: Repository traits and their MongoDB implementations
/// - `middleware`: Bearer-token and admin gates
/// - `state`: Injected application dependencies
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use routes::configure;
pub use state::AppState;
