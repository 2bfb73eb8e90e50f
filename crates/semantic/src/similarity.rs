//! Cosine similarity over raw embedding vectors.
//!
//! This is the single similarity function used by the matching layer. The
//! accumulation runs in `f64` so that long vectors do not lose precision, and
//! the result is symmetric bit-for-bit: `cosine_similarity(u, v)` and
//! `cosine_similarity(v, u)` perform the same operations in the same order.

/// Dot product of two equally sized slices, accumulated in `f64`.
///
/// Extra trailing components of the longer slice are ignored; callers that
/// care about dimension agreement check it before scoring.
pub fn dot(u: &[f32], v: &[f32]) -> f64 {
    u.iter()
        .zip(v.iter())
        .map(|(a, b)| f64::from(*a) * f64::from(*b))
        .sum()
}

/// `dot(u, v) / sqrt(dot(u, u) * dot(v, v))`, or `0.0` when either vector
/// has zero magnitude.
///
/// The value is clamped to `[-1, 1]` to absorb rounding noise.
pub fn cosine_similarity(u: &[f32], v: &[f32]) -> f32 {
    let uu = dot(u, u);
    let vv = dot(v, v);
    if uu == 0.0 || vv == 0.0 {
        return 0.0;
    }
    let uv = dot(u, v);
    let cos = uv / (uu * vv).sqrt();
    if cos.is_finite() {
        cos.clamp(-1.0, 1.0) as f32
    } else {
        0.0
    }
}
