// src/coefficient.rs
//
// Coefficient slots of a sine function: a fixed value or a function of x.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Default amplitude.
pub const DEFAULT_A: f64 = 1.0;
/// Default angular frequency.
pub const DEFAULT_B: f64 = 1.0;
/// Default phase, in multiples of π.
pub const DEFAULT_C: f64 = 0.0;
/// Default vertical offset.
pub const DEFAULT_D: f64 = 0.0;

/// Shared body of a function-valued coefficient.
pub type CoefficientFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Value of one coefficient at a given x.
///
/// Fixed values are stored unboxed; only `Function` calls through a vtable.
#[derive(Clone)]
pub enum Coefficient {
    /// Same value for every x.
    Constant(f64),

    /// Computed from the x being evaluated.
    Function(CoefficientFn),
}

impl Coefficient {
    pub fn constant(value: f64) -> Self {
        Coefficient::Constant(value)
    }

    pub fn function<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Coefficient::Function(Arc::new(f))
    }

    /// Value of the coefficient at `x`.
    #[inline]
    pub fn value_at(&self, x: f64) -> f64 {
        match self {
            Coefficient::Constant(v) => *v,
            Coefficient::Function(f) => f(x),
        }
    }

    /// The fixed value, if this coefficient does not depend on x.
    pub fn as_constant(&self) -> Option<f64> {
        match *self {
            Coefficient::Constant(v) => Some(v),
            Coefficient::Function(_) => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Coefficient::Constant(_))
    }
}

impl fmt::Debug for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Coefficient::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Coefficient::Constant(value)
    }
}

impl From<f32> for Coefficient {
    fn from(value: f32) -> Self {
        Coefficient::Constant(f64::from(value))
    }
}

impl<F> From<F> for Coefficient
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Coefficient::function(f)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Slot identifiers
// ═══════════════════════════════════════════════════════════════════

/// Names one of the four coefficient slots of `A·sin(B·x + C·π) + D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoefficientId {
    A,
    B,
    C,
    D,
}

impl CoefficientId {
    /// All slots in evaluation order.
    pub const ALL: [CoefficientId; 4] = [
        CoefficientId::A,
        CoefficientId::B,
        CoefficientId::C,
        CoefficientId::D,
    ];

    /// The constant a slot holds after construction or reset.
    pub const fn default_value(self) -> f64 {
        match self {
            CoefficientId::A => DEFAULT_A,
            CoefficientId::B => DEFAULT_B,
            CoefficientId::C => DEFAULT_C,
            CoefficientId::D => DEFAULT_D,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CoefficientId::A => "A",
            CoefficientId::B => "B",
            CoefficientId::C => "C",
            CoefficientId::D => "D",
        }
    }

    /// Position of the slot in [`CoefficientId::ALL`].
    pub const fn index(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for CoefficientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for CoefficientId {
    type Error = CoefficientError;

    fn try_from(index: u32) -> CoefficientResult<Self> {
        CoefficientId::ALL
            .get(index as usize)
            .copied()
            .ok_or(CoefficientError::UnknownIndex(index))
    }
}

impl FromStr for CoefficientId {
    type Err = CoefficientError;

    fn from_str(s: &str) -> CoefficientResult<Self> {
        match s.trim() {
            "a" | "A" => Ok(CoefficientId::A),
            "b" | "B" => Ok(CoefficientId::B),
            "c" | "C" => Ok(CoefficientId::C),
            "d" | "D" => Ok(CoefficientId::D),
            other => Err(CoefficientError::UnknownName(other.to_string())),
        }
    }
}

/// Error looking up a coefficient slot from untyped input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoefficientError {
    /// Index outside `0..=3`.
    UnknownIndex(u32),

    /// Name other than a, b, c or d.
    UnknownName(String),
}

impl fmt::Display for CoefficientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoefficientError::UnknownIndex(index) => {
                write!(f, "Unknown coefficient index {} (expected 0-3)", index)
            }
            CoefficientError::UnknownName(name) => {
                write!(f, "Unknown coefficient '{}' (expected A, B, C or D)", name)
            }
        }
    }
}

impl std::error::Error for CoefficientError {}

pub type CoefficientResult<T> = Result<T, CoefficientError>;
