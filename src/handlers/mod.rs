mod assets;
mod health;
mod metrics;
mod send;
mod visions;

pub use assets::{client_js_handler, index_handler};
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use send::send_handler;
pub use visions::visions_handler;
