//! WebAssembly bindings via wasm-bindgen for browser integration.
//!
//! This module is only compiled when the `web` feature is enabled.
//!
//! # Usage
//!
//! Build with wasm-pack:
//! ```bash
//! wasm-pack build --target web --features web
//! ```
//!
//! # JavaScript Example
//!
//! ```javascript
//! import init, { paramsine_init, SineFunction } from './paramsine.js';
//!
//! await init();
//! paramsine_init();
//!
//! const f = SineFunction.with_period(0.8, 0.25, 0.0, 0.1);
//! f.set_coefficient(2, 0.5);
//! const y = f.apply(0.3);
//! ```

use wasm_bindgen::prelude::*;

use crate::coefficient::CoefficientId;
use crate::sine_function::SineFunction as Inner;

// ═══════════════════════════════════════════════════════════════════════════
// Initialization
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the wasm module. Call this once before using any other functions.
/// Sets up panic hooks and console logging.
#[wasm_bindgen]
pub fn paramsine_init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
}

/// Default value of coefficient `index` (0 = A .. 3 = D).
#[wasm_bindgen]
pub fn default_value(index: u32) -> Result<f64, JsError> {
    let id = coefficient_id(index)?;
    Ok(id.default_value())
}

fn coefficient_id(index: u32) -> Result<CoefficientId, JsError> {
    CoefficientId::try_from(index).map_err(|e| {
        log::warn!("{}", e);
        JsError::new(&e.to_string())
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Sine Function
// ═══════════════════════════════════════════════════════════════════════════

/// `A * sin(B * x + C * PI) + D` with constant coefficients.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct SineFunction {
    inner: Inner,
}

#[wasm_bindgen]
impl SineFunction {
    /// Create a function with all coefficients at their defaults (`sin(x)`).
    #[wasm_bindgen(constructor)]
    pub fn new() -> SineFunction {
        Self::default()
    }

    /// Create a function with fixed A, B, C, D.
    pub fn with_constants(a: f64, b: f64, c: f64, d: f64) -> SineFunction {
        log::debug!("SineFunction::with_constants: a={} b={} c={} d={}", a, b, c, d);
        Self {
            inner: Inner::from_coefficients(a, b, c, d),
        }
    }

    /// Create a function with fixed A, C, D and B = 1 / period.
    pub fn with_period(a: f64, period: f64, c: f64, d: f64) -> SineFunction {
        log::debug!("SineFunction::with_period: a={} period={} c={} d={}", a, period, c, d);
        Self {
            inner: Inner::with_period(a, period, c, d),
        }
    }

    /// Independent copy of this function.
    pub fn duplicate(&self) -> SineFunction {
        self.clone()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Coefficients
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_a(&mut self, value: f64) {
        self.inner.set_a(value);
    }

    pub fn set_b(&mut self, value: f64) {
        self.inner.set_b(value);
    }

    pub fn set_c(&mut self, value: f64) {
        self.inner.set_c(value);
    }

    pub fn set_d(&mut self, value: f64) {
        self.inner.set_d(value);
    }

    /// Set coefficient `index` (0 = A .. 3 = D). Throws for an unknown index.
    pub fn set_coefficient(&mut self, index: u32, value: f64) -> Result<(), JsError> {
        let id = coefficient_id(index)?;
        self.inner.set(id, value);
        Ok(())
    }

    pub fn reset_a(&mut self) {
        self.inner.reset_a();
    }

    pub fn reset_b(&mut self) {
        self.inner.reset_b();
    }

    pub fn reset_c(&mut self) {
        self.inner.reset_c();
    }

    pub fn reset_d(&mut self) {
        self.inner.reset_d();
    }

    /// Reset coefficient `index` to its default. Throws for an unknown index.
    pub fn reset_coefficient(&mut self, index: u32) -> Result<(), JsError> {
        let id = coefficient_id(index)?;
        self.inner.reset_coefficient(id);
        Ok(())
    }

    /// Reset all coefficients to their defaults.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Evaluation
    // ─────────────────────────────────────────────────────────────────────────

    /// Evaluate the function at `x`.
    pub fn apply(&self, x: f64) -> f64 {
        self.inner.apply(x)
    }
}
