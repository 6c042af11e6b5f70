// src/sine_function.rs
//
// f(x) = A(x) * sin(B(x) * x + C(x) * PI) + D(x)

use std::f64::consts::PI;

use crate::coefficient::{Coefficient, CoefficientId};

/// A general sine function of the form `A * sin(B * x + C * PI) + D`.
///
/// Every coefficient can be a fixed value or a function of `x`. Slots that
/// are never set hold their default constant (A = 1, B = 1, C = 0, D = 0),
/// so a fresh instance evaluates to plain `sin(x)`.
///
/// ```ignore
/// let mut f = SineFunction::new().with_a(2.0).with_d(|x: f64| x * 0.1);
/// f.set_c(0.5);
/// let y = f.apply(1.0);
/// ```
#[derive(Clone, Debug)]
pub struct SineFunction {
    a: Coefficient,
    b: Coefficient,
    c: Coefficient,
    d: Coefficient,
}

impl SineFunction {
    /// All coefficients at their defaults.
    pub fn new() -> Self {
        Self {
            a: Coefficient::Constant(CoefficientId::A.default_value()),
            b: Coefficient::Constant(CoefficientId::B.default_value()),
            c: Coefficient::Constant(CoefficientId::C.default_value()),
            d: Coefficient::Constant(CoefficientId::D.default_value()),
        }
    }

    /// Bind all four coefficients at once.
    pub fn from_coefficients(
        a: impl Into<Coefficient>,
        b: impl Into<Coefficient>,
        c: impl Into<Coefficient>,
        d: impl Into<Coefficient>,
    ) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
        }
    }

    /// Fixed coefficients with the frequency given as a period.
    ///
    /// B is bound to `1 / period`. A period of zero is not rejected and
    /// yields an infinite B.
    pub fn with_period(a: f64, period: impl Into<f64>, c: f64, d: f64) -> Self {
        let period: f64 = period.into();
        Self::from_coefficients(a, 1.0 / period, c, d)
    }

    // ─────────────────────────────────────────────────────────────────
    // Builder-style construction
    // ─────────────────────────────────────────────────────────────────

    pub fn with_a(mut self, a: impl Into<Coefficient>) -> Self {
        self.a = a.into();
        self
    }

    pub fn with_b(mut self, b: impl Into<Coefficient>) -> Self {
        self.b = b.into();
        self
    }

    pub fn with_c(mut self, c: impl Into<Coefficient>) -> Self {
        self.c = c.into();
        self
    }

    pub fn with_d(mut self, d: impl Into<Coefficient>) -> Self {
        self.d = d.into();
        self
    }

    // ─────────────────────────────────────────────────────────────────
    // Setters
    // ─────────────────────────────────────────────────────────────────

    #[inline]
    pub fn set_a(&mut self, a: impl Into<Coefficient>) {
        self.a = a.into();
    }

    #[inline]
    pub fn set_b(&mut self, b: impl Into<Coefficient>) {
        self.b = b.into();
    }

    #[inline]
    pub fn set_c(&mut self, c: impl Into<Coefficient>) {
        self.c = c.into();
    }

    #[inline]
    pub fn set_d(&mut self, d: impl Into<Coefficient>) {
        self.d = d.into();
    }

    /// Replace the coefficient in slot `id`.
    pub fn set(&mut self, id: CoefficientId, value: impl Into<Coefficient>) {
        *self.slot_mut(id) = value.into();
    }

    // ─────────────────────────────────────────────────────────────────
    // Resets
    // ─────────────────────────────────────────────────────────────────

    pub fn reset_a(&mut self) {
        self.reset_coefficient(CoefficientId::A);
    }

    pub fn reset_b(&mut self) {
        self.reset_coefficient(CoefficientId::B);
    }

    pub fn reset_c(&mut self) {
        self.reset_coefficient(CoefficientId::C);
    }

    pub fn reset_d(&mut self) {
        self.reset_coefficient(CoefficientId::D);
    }

    /// Restore slot `id` to its default constant.
    pub fn reset_coefficient(&mut self, id: CoefficientId) {
        *self.slot_mut(id) = Coefficient::Constant(id.default_value());
    }

    /// Restore every coefficient to its default.
    pub fn reset(&mut self) {
        for id in CoefficientId::ALL {
            self.reset_coefficient(id);
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Inspection
    // ─────────────────────────────────────────────────────────────────

    pub fn a(&self) -> &Coefficient {
        &self.a
    }

    pub fn b(&self) -> &Coefficient {
        &self.b
    }

    pub fn c(&self) -> &Coefficient {
        &self.c
    }

    pub fn d(&self) -> &Coefficient {
        &self.d
    }

    pub fn get(&self, id: CoefficientId) -> &Coefficient {
        match id {
            CoefficientId::A => &self.a,
            CoefficientId::B => &self.b,
            CoefficientId::C => &self.c,
            CoefficientId::D => &self.d,
        }
    }

    /// True if slot `id` holds exactly its default constant.
    pub fn is_default(&self, id: CoefficientId) -> bool {
        self.get(id)
            .as_constant()
            .is_some_and(|v| v.to_bits() == id.default_value().to_bits())
    }

    fn slot_mut(&mut self, id: CoefficientId) -> &mut Coefficient {
        match id {
            CoefficientId::A => &mut self.a,
            CoefficientId::B => &mut self.b,
            CoefficientId::C => &mut self.c,
            CoefficientId::D => &mut self.d,
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Evaluation
    // ─────────────────────────────────────────────────────────────────

    /// Evaluate the function at `x`.
    ///
    /// Non-finite coefficients propagate into the result. If a coefficient
    /// function panics, so does this.
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        let a = self.a.value_at(x);
        let b = self.b.value_at(x);
        let c = self.c.value_at(x);
        let d = self.d.value_at(x);
        a * (b * x + c * PI).sin() + d
    }

    /// Borrow this function as a plain closure.
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.apply(x)
    }
}

impl Default for SineFunction {
    fn default() -> Self {
        Self::new()
    }
}

/// A sine function can drive a coefficient of another one.
impl From<SineFunction> for Coefficient {
    fn from(f: SineFunction) -> Self {
        Coefficient::function(move |x| f.apply(x))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use assert_approx_eq::assert_approx_eq;

    use super::*;

    const XS: [f64; 9] = [-7.5, -PI, -1.0, -0.25, 0.0, 0.3, 1.0, 2.0, 10.0];

    #[test]
    fn test_default_is_plain_sine() {
        let f = SineFunction::new();
        for x in XS {
            assert_eq!(f.apply(x), x.sin());
        }
        assert_eq!(f.apply(0.0), 0.0);
        assert_approx_eq!(f.apply(FRAC_PI_2), 1.0);
    }

    #[test]
    fn test_fixed_coefficients() {
        let (a, b, c, d) = (2.0, 1.0, 0.5, 3.0);
        let f = SineFunction::from_coefficients(a, b, c, d);

        assert_approx_eq!(f.apply(0.0), 5.0);
        for x in XS {
            assert_approx_eq!(f.apply(x), a * (b * x + c * PI).sin() + d);
        }
    }

    #[test]
    fn test_partial_construction_keeps_defaults() {
        let f = SineFunction::new().with_a(3.0).with_b(2.0);
        assert!(f.is_default(CoefficientId::C));
        assert!(f.is_default(CoefficientId::D));
        assert!(!f.is_default(CoefficientId::A));
        for x in XS {
            assert_approx_eq!(f.apply(x), 3.0 * (2.0 * x).sin());
        }

        let f = SineFunction::new().with_a(1.5).with_b(0.5).with_c(0.25);
        assert!(f.is_default(CoefficientId::D));
        assert_approx_eq!(f.apply(1.0), 1.5 * (0.5 + 0.25 * PI).sin());
    }

    #[test]
    fn test_identity_amplitude() {
        let f = SineFunction::new().with_a(|x: f64| x);
        assert_approx_eq!(f.apply(2.0), 2.0 * 2.0_f64.sin());
    }

    #[test]
    fn test_function_coefficients_see_x() {
        let f = SineFunction::from_coefficients(
            |x: f64| x + 1.0,
            |x: f64| x * 0.5,
            |x: f64| -x,
            |x: f64| x * x,
        );
        for x in XS {
            let expected = (x + 1.0) * ((x * 0.5) * x + (-x) * PI).sin() + x * x;
            assert_approx_eq!(f.apply(x), expected);
        }
    }

    #[test]
    fn test_period_matches_reciprocal_frequency() {
        for period in [0.25, 1.0, 3.0, -2.0, 1e-3] {
            let by_period = SineFunction::with_period(1.5, period, 0.2, -0.5);
            let by_freq = SineFunction::from_coefficients(1.5, 1.0 / period, 0.2, -0.5);
            for x in XS {
                assert_eq!(by_period.apply(x), by_freq.apply(x));
            }
        }
    }

    #[test]
    fn test_period_accepts_f32() {
        let f = SineFunction::with_period(1.0, 0.1_f32, 0.0, 0.0);
        assert_eq!(f.b().as_constant(), Some(1.0 / f64::from(0.1_f32)));
    }

    #[test]
    fn test_zero_period_is_not_rejected() {
        let f = SineFunction::with_period(1.0, 0.0, 0.0, 0.0);
        assert_eq!(f.b().as_constant(), Some(f64::INFINITY));
        assert!(f.apply(1.0).is_nan());
    }

    #[test]
    fn test_reset_restores_sine() {
        let mut f = SineFunction::from_coefficients(|x: f64| x, 4.0, 0.3, |_: f64| 9.0);
        f.reset();
        for id in CoefficientId::ALL {
            assert!(f.is_default(id));
        }
        for x in XS {
            assert_eq!(f.apply(x), SineFunction::new().apply(x));
        }
    }

    #[test]
    fn test_single_reset_is_independent() {
        let mut f = SineFunction::from_coefficients(2.0, 3.0, 0.5, |x: f64| x);

        f.set_b(7.0);
        f.reset_b();
        assert!(f.is_default(CoefficientId::B));
        assert_eq!(f.a().as_constant(), Some(2.0));
        assert_eq!(f.c().as_constant(), Some(0.5));
        assert!(!f.d().is_constant());

        f.reset_a();
        f.reset_c();
        assert!(f.is_default(CoefficientId::A));
        assert!(f.is_default(CoefficientId::C));
        assert_eq!(f.d().value_at(4.0), 4.0);

        f.reset_d();
        assert!(f.is_default(CoefficientId::D));
    }

    #[test]
    fn test_setters_replace_bindings() {
        let mut f = SineFunction::new();
        f.set_a(|x: f64| 2.0 * x);
        f.set_d(1.0);
        assert_approx_eq!(f.apply(1.0), 2.0 * 1.0_f64.sin() + 1.0);

        f.set_a(0.5);
        assert_eq!(f.a().as_constant(), Some(0.5));

        f.set(CoefficientId::C, 1.0);
        assert_approx_eq!(f.apply(0.0), 1.0);
        f.reset_coefficient(CoefficientId::C);
        assert!(f.is_default(CoefficientId::C));
    }

    #[test]
    fn test_non_finite_propagates() {
        let f = SineFunction::new().with_a(f64::NAN);
        assert!(f.apply(1.0).is_nan());

        let f = SineFunction::new().with_d(f64::INFINITY);
        assert_eq!(f.apply(1.0), f64::INFINITY);

        let f = SineFunction::new().with_b(|x: f64| 1.0 / x);
        assert!(f.apply(0.0).is_nan());
    }

    #[test]
    #[should_panic(expected = "coefficient undefined at x = 1")]
    fn test_panicking_coefficient_propagates() {
        let f = SineFunction::new().with_c(|x: f64| {
            if x == 1.0 {
                panic!("coefficient undefined at x = {}", x);
            }
            0.0
        });
        let _ = f.apply(0.0);
        f.apply(1.0);
    }

    #[test]
    fn test_clones_are_independent() {
        let original = SineFunction::new().with_a(|x: f64| x);
        let mut copy = original.clone();
        copy.set_a(5.0);

        assert_approx_eq!(original.apply(2.0), 2.0 * 2.0_f64.sin());
        assert_approx_eq!(copy.apply(2.0), 5.0 * 2.0_f64.sin());
    }

    #[test]
    fn test_sine_as_coefficient() {
        let lfo = SineFunction::new().with_b(0.1).with_d(2.0);
        let expected = |x: f64| (2.0 + (0.1 * x).sin()) * x.sin();

        let f = SineFunction::new().with_a(lfo.clone());
        for x in XS {
            assert_approx_eq!(f.apply(x), expected(x));
        }

        let via_closure = SineFunction::new().with_a(Coefficient::from(lfo));
        assert_approx_eq!(via_closure.apply(3.0), expected(3.0));
    }

    #[test]
    fn test_as_fn() {
        let f = SineFunction::from_coefficients(2.0, 1.0, 0.0, 0.0);
        let samples: Vec<f64> = [0.0, FRAC_PI_2].into_iter().map(f.as_fn()).collect();
        assert_approx_eq!(samples[0], 0.0);
        assert_approx_eq!(samples[1], 2.0);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SineFunction>();
    }
}
