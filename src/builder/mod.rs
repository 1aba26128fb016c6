pub mod page;
pub mod processor;
pub mod site;
pub mod types;
pub mod watcher;

pub use site::build_site;
pub use watcher::watch_site;
