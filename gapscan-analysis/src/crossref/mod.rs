//! Cross-reference checks between independently authored artifacts.
//!
//! These run after the per-artifact analyses they consume have
//! completed; each consumes two or more artifacts at once.

mod frontend_backend;
mod model_schema;
mod route_controller;

pub use frontend_backend::link_frontend_calls;
pub use model_schema::match_model_schema;
pub use route_controller::bind_routes;
