//! Application-level lifecycle events shared by every front end.

use tracing::{error, info, warn};

use crate::errors::RoostError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// User errors (bad names, taken shortcuts, refused evictions) are warnings;
/// everything else is logged as an error.
pub fn log_app_error<E: RoostError>(error: &E) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    }
}
