pub mod handler;
pub mod messages;
pub mod session;

pub use handler::handle_websocket;
pub use session::run_session;
