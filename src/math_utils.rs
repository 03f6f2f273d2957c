/// Cubic Bezier evaluation and fixed-step sampling
use crate::error::CurveError;
use euclid::default::Point2D;
use num_traits::NumCast;

/// Default increment of the curve parameter between samples.
pub const DEFAULT_STEP: f64 = 0.05;

/// Upper bound on the number of samples a single call may produce.
pub const MAX_SAMPLES: usize = 1 << 20;

/// Evaluate the cubic Bezier defined by `p0..p3` at parameter `t`.
pub fn cubic_point<T>(p0: Point2D<T>, p1: Point2D<T>, p2: Point2D<T>, p3: Point2D<T>, t: T) -> Point2D<T>
where
    T: num_traits::Float,
{
    let three = T::one() + T::one() + T::one();
    let u = T::one() - t;
    let u2 = u * u;
    let t2 = t * t;

    let w0 = u2 * u;
    let w1 = three * u2 * t;
    let w2 = three * u * t2;
    let w3 = t2 * t;

    Point2D::new(
        w0 * p0.x + w1 * p1.x + w2 * p2.x + w3 * p3.x,
        w0 * p0.y + w1 * p1.y + w2 * p2.y + w3 * p3.y,
    )
}

/// Sample the curve at `t = 0, step, 2*step, ...` up to and including `t = 1`.
///
/// `t` is computed from the sample index rather than accumulated, and the last
/// sample is always taken at exactly `t = 1`: a grid value within rounding
/// distance of 1 is snapped to it, otherwise `t = 1` is appended.
///
/// # Arguments
/// * `points` - Control points P0..P3 in order
/// * `step` - Parametric step, must satisfy `0 < step <= 1`
pub fn sample_cubic_bezier<T>(points: &[Point2D<T>; 4], step: T) -> Result<Vec<Point2D<T>>, CurveError>
where
    T: num_traits::Float,
{
    let invalid = || CurveError::InvalidStep(step.to_f64().unwrap_or(f64::NAN));

    if !(step.is_finite() && step > T::zero() && step <= T::one()) {
        return Err(invalid());
    }

    let intervals = (T::one() / step)
        .floor()
        .to_usize()
        .filter(|&n| n < MAX_SAMPLES)
        .ok_or_else(invalid)?;

    let mut params: Vec<T> = (0..=intervals)
        .filter_map(<T as NumCast>::from)
        .map(|i: T| i * step)
        .collect();

    let tolerance = T::epsilon() * <T as NumCast>::from(64).unwrap_or_else(T::one);
    if params
        .last()
        .is_some_and(|&last| (T::one() - last).abs() <= tolerance)
    {
        params.pop();
    }
    params.push(T::one());

    let [p0, p1, p2, p3] = *points;
    Ok(params
        .into_iter()
        .map(|t| cubic_point(p0, p1, p2, p3, t))
        .collect())
}
