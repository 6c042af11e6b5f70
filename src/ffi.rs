// C-compatible FFI bindings for Swift/iOS integration.
//
// Safety requirements:
// - Handles must be created by this module and not fabricated
// - A handle must not be used after it is passed to `sine_destroy`
// - Callbacks and their `user_data` must stay valid while bound to a handle
// - Callbacks must not unwind across the FFI boundary
// - Caller must call `sine_destroy` for each `sine_create*` / `sine_clone`

use std::ffi::c_void;

use log::{LevelFilter, debug, warn};
use oslog::OsLogger;

use crate::coefficient::{Coefficient, CoefficientId};
use crate::sine_function::SineFunction;

// Logger subsystem identifier
const LOG_SUBSYSTEM: &str = "com.paramsine";

// ═══════════════════════════════════════════════════════════════════════════
// Logger Initialization
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the oslog logger.
///
/// Call once at application startup. Output appears in Console.app and
/// Xcode's debug console.
#[unsafe(no_mangle)]
pub extern "C" fn paramsine_init_logger() {
    OsLogger::new(LOG_SUBSYSTEM)
        .level_filter(LevelFilter::Debug)
        .init()
        .ok();
}

// ═══════════════════════════════════════════════════════════════════════════
// Opaque Handle Types
// ═══════════════════════════════════════════════════════════════════════════

/// Opaque handle to a SineFunction.
pub struct ParamSineFunction {
    inner: SineFunction,
}

/// Coefficient supplied by the host: `f(x, user_data) -> value`.
pub type SineCoefficientCallback = extern "C" fn(x: f64, user_data: *mut c_void) -> f64;

struct ForeignCoefficient {
    callback: SineCoefficientCallback,
    user_data: *mut c_void,
}

// The host guarantees `user_data` may be read from any thread that
// evaluates the function (see safety requirements above).
unsafe impl Send for ForeignCoefficient {}
unsafe impl Sync for ForeignCoefficient {}

impl ForeignCoefficient {
    #[inline]
    fn call(&self, x: f64) -> f64 {
        (self.callback)(x, self.user_data)
    }
}

fn coefficient_id(index: u32) -> Option<CoefficientId> {
    match CoefficientId::try_from(index) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

fn into_handle(inner: SineFunction) -> *mut ParamSineFunction {
    Box::into_raw(Box::new(ParamSineFunction { inner }))
}

// ═══════════════════════════════════════════════════════════════════════════
// Creation / Destruction
// ═══════════════════════════════════════════════════════════════════════════

/// Create a sine function with all coefficients at their defaults.
///
/// Returns an opaque pointer that must be freed with `sine_destroy`.
#[unsafe(no_mangle)]
pub extern "C" fn sine_create() -> *mut ParamSineFunction {
    debug!("sine_create");
    into_handle(SineFunction::new())
}

/// Create a sine function with fixed A, B, C, D.
#[unsafe(no_mangle)]
pub extern "C" fn sine_create_with_constants(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
) -> *mut ParamSineFunction {
    debug!("sine_create_with_constants: a={} b={} c={} d={}", a, b, c, d);
    into_handle(SineFunction::from_coefficients(a, b, c, d))
}

/// Create a sine function with fixed A, C, D and B = 1 / period.
#[unsafe(no_mangle)]
pub extern "C" fn sine_create_with_period(
    a: f64,
    period: f64,
    c: f64,
    d: f64,
) -> *mut ParamSineFunction {
    debug!("sine_create_with_period: a={} period={} c={} d={}", a, period, c, d);
    into_handle(SineFunction::with_period(a, period, c, d))
}

/// Copy a sine function, including its coefficient bindings.
///
/// Returns NULL if `func` is NULL.
///
/// # Safety
/// `func` must be a valid pointer returned by a `sine_create*` function or NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sine_clone(func: *const ParamSineFunction) -> *mut ParamSineFunction {
    if func.is_null() {
        return std::ptr::null_mut();
    }
    into_handle(unsafe { (*func).inner.clone() })
}

/// Destroy a sine function.
///
/// # Safety
/// `func` must be a valid pointer returned by a `sine_create*` function or NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sine_destroy(func: *mut ParamSineFunction) {
    if !func.is_null() {
        debug!("sine_destroy");
        unsafe { drop(Box::from_raw(func)) };
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Coefficients
// ═══════════════════════════════════════════════════════════════════════════

/// Default value of coefficient `coefficient` (0 = A .. 3 = D).
///
/// Returns NaN for an unknown index.
#[unsafe(no_mangle)]
pub extern "C" fn sine_default_value(coefficient: u32) -> f64 {
    coefficient_id(coefficient)
        .map(CoefficientId::default_value)
        .unwrap_or(f64::NAN)
}

/// Bind a coefficient to a fixed value.
///
/// Returns `false` if `func` is NULL or the index is unknown.
///
/// # Safety
/// `func` must be a valid pointer returned by a `sine_create*` function or NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sine_set_constant(
    func: *mut ParamSineFunction,
    coefficient: u32,
    value: f64,
) -> bool {
    if func.is_null() {
        return false;
    }
    let Some(id) = coefficient_id(coefficient) else {
        return false;
    };
    unsafe { (*func).inner.set(id, value) };
    true
}

/// Bind a coefficient to a host callback evaluated at every x.
///
/// Returns `false` if `func` or `callback` is NULL or the index is unknown.
///
/// # Safety
/// `func` must be a valid pointer returned by a `sine_create*` function or NULL.
/// `user_data` must remain valid for as long as the callback is bound to
/// this handle or any clone of it.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sine_set_callback(
    func: *mut ParamSineFunction,
    coefficient: u32,
    callback: Option<SineCoefficientCallback>,
    user_data: *mut c_void,
) -> bool {
    if func.is_null() {
        return false;
    }
    let Some(callback) = callback else {
        warn!("sine_set_callback: null callback");
        return false;
    };
    let Some(id) = coefficient_id(coefficient) else {
        return false;
    };

    let foreign = ForeignCoefficient { callback, user_data };
    let bound = Coefficient::function(move |x| foreign.call(x));
    unsafe { (*func).inner.set(id, bound) };
    true
}

/// Reset one coefficient to its default.
///
/// # Safety
/// `func` must be a valid pointer returned by a `sine_create*` function or NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sine_reset_coefficient(
    func: *mut ParamSineFunction,
    coefficient: u32,
) -> bool {
    if func.is_null() {
        return false;
    }
    let Some(id) = coefficient_id(coefficient) else {
        return false;
    };
    unsafe { (*func).inner.reset_coefficient(id) };
    true
}

/// Reset all coefficients to their defaults.
///
/// # Safety
/// `func` must be a valid pointer returned by a `sine_create*` function or NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sine_reset(func: *mut ParamSineFunction) {
    if !func.is_null() {
        unsafe { (*func).inner.reset() };
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Evaluation
// ═══════════════════════════════════════════════════════════════════════════

/// Evaluate the function at `x`. Returns NaN if `func` is NULL.
///
/// # Safety
/// `func` must be a valid pointer returned by a `sine_create*` function or NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sine_apply(func: *const ParamSineFunction, x: f64) -> f64 {
    if func.is_null() {
        return f64::NAN;
    }
    unsafe { (*func).inner.apply(x) }
}
