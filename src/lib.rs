// src/lib.rs
//
// Parametrized sine functions: f(x) = A(x) * sin(B(x) * x + C(x) * PI) + D(x).

mod coefficient;
mod sine_function;

#[cfg(feature = "ios")]
pub mod ffi;

#[cfg(feature = "web")]
pub mod wasm;

pub use coefficient::{
    Coefficient, CoefficientError, CoefficientFn, CoefficientId, CoefficientResult, DEFAULT_A,
    DEFAULT_B, DEFAULT_C, DEFAULT_D,
};
pub use sine_function::SineFunction;
