pub mod debounce;
pub mod fs_watcher;

pub use fs_watcher::watch_site;
