use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, error, info};
use notify::{Event, EventKind, RecursiveMode, Result as NotifyResult, Watcher};

use crate::builder::site::build_site;
use crate::builder::types::BoxResult;
use crate::builder::watcher::debounce::Debouncer;
use crate::config::Config;

/// Window during which follow-up filesystem events are swallowed.
/// Editors tend to report a single save as a burst of events, and the
/// build itself touches the output directory under the watched root.
const DEBOUNCE_INTERVAL: Duration = Duration::from_secs(2);

/// How long the event loop waits before checking the stop flag
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Watch the project root for changes and rebuild the site on each burst
/// of events. Returns once Ctrl+C is received.
pub fn watch_site(config: &Config, root: &Path) -> BoxResult<()> {
    // Initial build; watch mode keeps running even when a build fails
    rebuild(config);

    // Create a channel to receive filesystem events
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: NotifyResult<Event>| match res {
        Ok(event) => match event.kind {
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {
                if let Err(e) = tx.send(event) {
                    debug!("Dropping file event: {}", e);
                }
            }
            _ => {}
        },
        Err(e) => error!("Watch error: {}", e),
    })?;

    watcher.watch(root, RecursiveMode::Recursive)?;

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))?;
    }

    info!(
        "Watching {} for changes. Press Ctrl+C to stop.",
        root.display()
    );

    let mut debouncer = Debouncer::new(DEBOUNCE_INTERVAL);
    while !stop.load(Ordering::SeqCst) {
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(event) => {
                debug!("File event: {:?}", event);
                if debouncer.should_trigger(Instant::now()) {
                    rebuild(config);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                error!("File watcher channel closed");
                break;
            }
        }
    }

    // Dropping the watcher ends the subscription; queued events are not
    // replayed
    info!("Stopping watcher");
    Ok(())
}

/// Run one build cycle, reporting failure without ending watch mode
fn rebuild(config: &Config) {
    info!("Rebuilding...");
    if let Err(e) = build_site(config) {
        error!("Build failed: {}", e);
    }
}
