use thiserror::Error;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Errors from [`bisect`].
///
/// Generic over the residual evaluation error so callers keep their own
/// error type through the solve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BisectError<E> {
    #[error("bracket contains a non-finite endpoint")]
    NonFiniteBracket,

    #[error("bracket has zero width at {at}")]
    ZeroWidth { at: Real },

    #[error("no root in bracket: f({lo}) = {f_lo}, f({hi}) = {f_hi}")]
    NoSignChange {
        lo: Real,
        hi: Real,
        f_lo: Real,
        f_hi: Real,
    },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: Real, residual: Real },

    #[error("no convergence within {max_iter} iterations")]
    MaxIterations { max_iter: usize },

    #[error("residual evaluation failed: {0}")]
    Eval(E),
}

/// Bracketing bisection root-finder.
///
/// Finds x in `[lo, hi]` with f(x) = 0, given a sign change across the
/// bracket. Convergence is guaranteed under a valid sign change; no
/// derivatives are required. The residual may fail (e.g. a property
/// backend query), in which case the failure propagates as
/// [`BisectError::Eval`].
pub fn bisect<E>(
    mut f: impl FnMut(Real) -> Result<Real, E>,
    bracket: [Real; 2],
    tol: Tolerances,
    max_iter: usize,
) -> Result<Real, BisectError<E>> {
    let [mut lo, mut hi] = bracket;
    if !lo.is_finite() || !hi.is_finite() {
        return Err(BisectError::NonFiniteBracket);
    }
    #[allow(clippy::float_cmp)]
    if lo == hi {
        return Err(BisectError::ZeroWidth { at: lo });
    }
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }

    let f_lo = eval(&mut f, lo)?;
    if f_lo == 0.0 {
        return Ok(lo);
    }
    let f_hi = eval(&mut f, hi)?;
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if f_lo.is_sign_negative() == f_hi.is_sign_negative() {
        return Err(BisectError::NoSignChange { lo, hi, f_lo, f_hi });
    }

    let lo_is_negative = f_lo < 0.0;
    for _ in 0..max_iter {
        let mid = 0.5 * (lo + hi);
        let f_mid = eval(&mut f, mid)?;

        if f_mid == 0.0 || (hi - lo) <= tol.abs + tol.rel * mid.abs() {
            return Ok(mid);
        }

        if (f_mid < 0.0) == lo_is_negative {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Err(BisectError::MaxIterations { max_iter })
}

fn eval<E>(
    f: &mut impl FnMut(Real) -> Result<Real, E>,
    x: Real,
) -> Result<Real, BisectError<E>> {
    let residual = f(x).map_err(BisectError::Eval)?;
    if !residual.is_finite() {
        return Err(BisectError::NonFiniteResidual { x, residual });
    }
    Ok(residual)
}

#[cfg(test)]
mod tests {
    use super::*;

    type NoError = std::convert::Infallible;

    fn ok(f: impl Fn(Real) -> Real) -> impl FnMut(Real) -> Result<Real, NoError> {
        move |x| Ok(f(x))
    }

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn bisect_finds_sqrt_two() {
        let tol = Tolerances {
            abs: 1e-10,
            rel: 0.0,
        };
        let root = bisect(ok(|x| x * x - 2.0), [0.0, 2.0], tol, 200).unwrap();
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-9, "root = {root}");
    }

    #[test]
    fn bisect_handles_reversed_bracket() {
        let tol = Tolerances {
            abs: 1e-10,
            rel: 0.0,
        };
        let root = bisect(ok(|x| x - 1.0), [3.0, 0.0], tol, 200).unwrap();
        assert!((root - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bisect_rejects_missing_sign_change() {
        let err = bisect(ok(|x| x * x + 1.0), [0.0, 2.0], Tolerances::default(), 50).unwrap_err();
        assert!(matches!(err, BisectError::NoSignChange { .. }));
    }

    #[test]
    fn bisect_rejects_bad_bracket() {
        let err = bisect(ok(|x| x), [f64::NAN, 1.0], Tolerances::default(), 50).unwrap_err();
        assert!(matches!(err, BisectError::NonFiniteBracket));

        let err = bisect(ok(|x| x), [2.0, 2.0], Tolerances::default(), 50).unwrap_err();
        assert!(matches!(err, BisectError::ZeroWidth { .. }));
    }

    #[test]
    fn bisect_propagates_evaluation_failure() {
        let err = bisect(
            |_x: Real| -> Result<Real, &'static str> { Err("backend down") },
            [0.0, 1.0],
            Tolerances::default(),
            50,
        )
        .unwrap_err();
        assert!(matches!(err, BisectError::Eval("backend down")));
    }
}
