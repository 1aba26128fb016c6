use log::error;

use crate::utils::error::SiteError;

/// Handle the serve command.
///
/// The preview server is reserved surface; invoking it reports a failure
/// instead of silently doing nothing.
pub fn handle_serve_command(host: &str, port: u16) -> bool {
    let err = SiteError::Unimplemented(format!("preview server (requested {}:{})", host, port));
    error!("{}", err);
    false
}
