mod build;
mod serve;
mod watch;

pub use build::handle_build_command;
pub use serve::handle_serve_command;
pub use watch::handle_watch_command;
