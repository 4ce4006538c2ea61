use std::path::PathBuf;

pub use kurbo::Point;

use crate::error::{MorphkitError, MorphkitResult};

pub mod ease;
pub mod plot;

pub use ease::Ease;

/// One curve job: the three control points of a quadratic Bezier, how many
/// parameter samples to evaluate, and where the rendered figure goes.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CurveConfig {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub samples: usize,
    pub ease: Ease,
    pub output_path: PathBuf,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            p0: Point::new(0.0, 0.0),
            p1: Point::new(0.5, 1.0),
            p2: Point::new(1.0, 0.0),
            samples: 50,
            ease: Ease::Linear,
            output_path: PathBuf::from("de_casteljau.png"),
        }
    }
}

impl CurveConfig {
    pub fn validate(&self) -> MorphkitResult<()> {
        if self.samples < 2 {
            return Err(MorphkitError::validation(
                "samples must be >= 2 to include both endpoints",
            ));
        }
        for p in [self.p0, self.p1, self.p2] {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(MorphkitError::validation(
                    "control points must have finite coordinates",
                ));
            }
        }
        Ok(())
    }
}

/// One De Casteljau evaluation step: the parameter, the two first-level
/// interpolations and the resulting curve point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSample {
    pub t: f64,
    pub q0: Point,
    pub q1: Point,
    pub b: Point,
}

/// Componentwise `(1 - t) * a + t * b`.
///
/// The two-sided form keeps the endpoints exact: `t = 0` evaluates to `a`
/// and `t = 1` to `b`, with no floating-point drift from an
/// `a + t * (b - a)` rearrangement.
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    Point::new((1.0 - t) * a.x + t * b.x, (1.0 - t) * a.y + t * b.y)
}

/// Evaluate the De Casteljau construction at `samples` evenly spaced
/// parameters over `[0, 1]`, both endpoints included.
///
/// The configured ease reshapes each parameter before evaluation;
/// [`Ease::Linear`] leaves the grid untouched. The returned `b` points trace
/// the quadratic Bezier defined by `p0, p1, p2`, with `b == p0` at the first
/// sample and `b == p2` at the last.
pub fn sample_quadratic(config: &CurveConfig) -> MorphkitResult<Vec<CurveSample>> {
    config.validate()?;

    let n = config.samples;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let t = config.ease.apply(i as f64 / (n - 1) as f64);
        let q0 = lerp(config.p0, config.p1, t);
        let q1 = lerp(config.p1, config.p2, t);
        let b = lerp(q0, q1, t);
        out.push(CurveSample { t, q0, q1, b });
    }
    Ok(out)
}

/// De Casteljau for four control points: one interpolation level more than
/// [`sample_quadratic`]'s construction. Endpoints are exact the same way.
pub fn eval_cubic(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let q0 = lerp(p0, p1, t);
    let q1 = lerp(p1, p2, t);
    let q2 = lerp(p2, p3, t);
    let r0 = lerp(q0, q1, t);
    let r1 = lerp(q1, q2, t);
    lerp(r0, r1, t)
}
