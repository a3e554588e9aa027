/*!
 * Error handling
 *
 * Unified result types over anyhow. Library code that has a closed set of
 * failure modes defines its own thiserror enum (see `plugin::manifest`);
 * everything that touches the filesystem or the CLI surface returns `AppResult`
 * and attaches context with `anyhow::Context`.
 */

use anyhow::{anyhow, Result as AnyhowResult};

/// Application-wide result type
pub type AppResult<T> = AnyhowResult<T>;

/// Application-wide error type
pub type AppError = anyhow::Error;

/// Create a plain application error
pub fn app_error(msg: impl Into<String>) -> AppError {
    anyhow!(msg.into())
}

/// Return early with an application error
#[macro_export]
macro_rules! app_bail {
    ($msg:literal $(,)?) => {
        return Err(anyhow::anyhow!($msg))
    };
    ($err:expr $(,)?) => {
        return Err(anyhow::anyhow!($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err(anyhow::anyhow!($fmt, $($arg)*))
    };
}
