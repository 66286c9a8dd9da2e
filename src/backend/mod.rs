/// Backend submodules for the relay connection
///
/// - `connection`: plain and TLS WebSocket setup
/// - `handlers`: UI action handling and relay frame routing
/// - `main_loop`: the polling event loop run on the backend thread
mod connection;
mod handlers;
mod main_loop;

// Re-export the main backend entry points
pub use main_loop::run_backend;

#[cfg(test)]
pub use connection::create_tls_connector;
