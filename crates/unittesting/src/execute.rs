//! Execution - running a composite unit's methods in isolation.
//!
//! Each method runs inside `catch_unwind`, so a panic in one never stops the
//! next. Panics raised while the harness is executing on the current thread
//! are intercepted by a process-wide hook installed once: it records the
//! location (and, under verbose logging, a backtrace) instead of printing the
//! default panic message. Panics on other threads reach the previous hook
//! unchanged.

use std::any::Any;
use std::backtrace::BacktraceStatus;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::Once;
use std::time::{Duration, Instant};

use backtrace::Backtrace;

use crate::compose::CompositeUnit;
use crate::registry::TestMethod;
use crate::report::{self, FailureKind, FailureRecord, TestError};
use crate::sink::ReportSink;

/// Result of running one module's composite unit.
#[derive(Debug, Clone)]
pub struct UnitOutcome {
    /// Module name
    pub module: String,
    /// Number of test methods executed
    pub total: usize,
    /// Failures in execution order
    pub failures: Vec<FailureRecord>,
    /// Wall-clock time spent
    pub duration: Duration,
}

impl UnitOutcome {
    /// True if every method passed.
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every method of `unit`, logging each failure as it happens and one
/// summary line at the end.
pub fn execute_unit(
    module: &str,
    unit: &CompositeUnit,
    verbose: bool,
    sink: &dyn ReportSink,
) -> UnitOutcome {
    let start = Instant::now();
    let mut failures = Vec::new();

    for resolved in unit.methods() {
        if let Err(error) = invoke_isolated(&resolved.method, verbose) {
            let record = FailureRecord::new(module, resolved.method.name(), error);
            sink.warn(&report::failure_message(&record));
            failures.push(record);
        }
    }

    if failures.is_empty() {
        sink.warn(&report::module_passed_message(module, unit.len()));
    } else {
        let names: Vec<&str> = failures.iter().map(|f| f.test.as_str()).collect();
        sink.warn(&report::module_failed_message(module, &names, unit.len()));
    }

    UnitOutcome {
        module: module.to_string(),
        total: unit.len(),
        failures,
        duration: start.elapsed(),
    }
}

/// Invoke one method, turning a panic or `Err` into a [`TestError`].
pub(crate) fn invoke_isolated(method: &TestMethod, verbose: bool) -> Result<(), TestError> {
    install_panic_hook();

    let mode = if verbose {
        CaptureMode::Verbose
    } else {
        CaptureMode::Quiet
    };
    let previous = CAPTURE_MODE.with(|cell| cell.replace(mode));
    LAST_PANIC.with(|slot| slot.borrow_mut().take());

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| method.invoke()));

    CAPTURE_MODE.with(|cell| cell.set(previous));
    let captured = LAST_PANIC.with(|slot| slot.borrow_mut().take());

    match outcome {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(returned_error(method.name(), &err, verbose)),
        Err(payload) => Err(panic_error(payload.as_ref(), captured, verbose)),
    }
}

fn returned_error(name: &str, err: &anyhow::Error, verbose: bool) -> TestError {
    let error = TestError::new(FailureKind::Error, format!("{err:#}"));
    if !verbose {
        return error;
    }

    // `{:?}` already ends with anyhow's own backtrace when one was captured.
    let header = format!("{name} returned error:\n{err:?}");
    if err.backtrace().status() == BacktraceStatus::Captured {
        error.with_trace(header)
    } else {
        let backtrace = Backtrace::new();
        error.with_trace(format!("{header}\nstack backtrace:\n{backtrace:?}"))
    }
}

fn panic_error(
    payload: &(dyn Any + Send),
    captured: Option<CapturedPanic>,
    verbose: bool,
) -> TestError {
    let message = panic_message(payload);
    let error = TestError::new(FailureKind::Panic, message.clone());
    if !verbose {
        return error;
    }

    let (location, backtrace) = captured.map_or((None, None), |c| (c.location, c.backtrace));
    let header = match location {
        Some(location) => format!("panicked at {location}:\n{message}"),
        None => format!("panicked:\n{message}"),
    };
    match backtrace {
        Some(backtrace) => {
            error.with_trace(format!("{header}\nstack backtrace:\n{backtrace}"))
        }
        None => error.with_trace(header),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "test panicked with a non-string payload".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureMode {
    Off,
    Quiet,
    Verbose,
}

struct CapturedPanic {
    location: Option<String>,
    backtrace: Option<String>,
}

thread_local! {
    static CAPTURE_MODE: Cell<CaptureMode> = const { Cell::new(CaptureMode::Off) };
    static LAST_PANIC: RefCell<Option<CapturedPanic>> = const { RefCell::new(None) };
}

static HOOK: Once = Once::new();

fn install_panic_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
            let mode = CAPTURE_MODE.with(Cell::get);
            if mode == CaptureMode::Off {
                previous(info);
                return;
            }

            let backtrace = (mode == CaptureMode::Verbose)
                .then(|| format!("{:?}", Backtrace::new()));
            let captured = CapturedPanic {
                location: info.location().map(ToString::to_string),
                backtrace,
            };
            LAST_PANIC.with(|slot| *slot.borrow_mut() = Some(captured));
        }));
    });
}
