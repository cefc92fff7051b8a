//! Failure-capturing region
//!
//! [`guarded`] runs a call, hands its value back on success and swaps any
//! failure for a sentinel after recording it on the error context. The
//! `wrap!` macro registers one adapted function per underlying operation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::config::FailureLevel;
use crate::context::ErrorContext;
use crate::error::{Failure, GuardError};

/// Run `call`, returning `sentinel` instead of propagating its failure.
///
/// The failure is stored on `ctx` under `operation`. With
/// `catch_panics` enabled a panic inside `call` is absorbed the same way.
pub fn guarded<T, E, F>(ctx: &mut ErrorContext, operation: &'static str, sentinel: T, call: F) -> T
where
    F: FnOnce() -> Result<T, E>,
    E: Into<GuardError>,
{
    let outcome: Result<T, GuardError> = if ctx.config().catch_panics {
        panic::catch_unwind(AssertUnwindSafe(call))
            .map(|result| result.map_err(Into::into))
            .unwrap_or_else(|payload| Err(GuardError::Panic(panic_message(payload))))
    } else {
        call().map_err(Into::into)
    };

    match outcome {
        Ok(value) => value,
        Err(err) => {
            let failure = Failure::new(operation, &err);
            log_failure(ctx.config().failure_level, &failure);
            ctx.record(failure);
            sentinel
        }
    }
}

fn log_failure(level: FailureLevel, failure: &Failure) {
    match level {
        FailureLevel::Off => {}
        FailureLevel::Debug => tracing::debug!(
            operation = failure.operation,
            kind = %failure.kind,
            error = %failure.message,
            "MuPDF call failed, returning sentinel"
        ),
        FailureLevel::Warn => tracing::warn!(
            operation = failure.operation,
            kind = %failure.kind,
            error = %failure.message,
            "MuPDF call failed, returning sentinel"
        ),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Declare an adapted operation.
///
/// ```text
/// wrap! {
///     pub fn count_pages(doc: &Document) -> i32 = -1, doc.page_count();
/// }
/// ```
///
/// expands to `pub fn count_pages(ctx: &mut ErrorContext, doc: &Document) -> i32`
/// running the call expression through [`guarded`].
macro_rules! wrap {
    ($(
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty = $sentinel:expr, $call:expr;
    )*) => {$(
        $(#[$meta])*
        $vis fn $name(ctx: &mut $crate::context::ErrorContext, $($arg: $ty),*) -> $ret {
            $crate::guard::guarded(ctx, stringify!($name), $sentinel, || $call)
        }
    )*};
}

pub(crate) use wrap;
