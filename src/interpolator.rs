use crate::enums::Interpolation;

use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

/// Source of in-plane samples for the resampler.
///
/// Coordinates are (row, column). Implementations saturate coordinates past
/// the last row or column to the edge sample instead of failing.
pub trait PlaneSampler: Sync {
    /// Native (rows, columns) of the plane.
    fn dim(&self) -> (usize, usize);

    fn sample(&self, row: usize, col: usize) -> f32;
}

impl PlaneSampler for ArrayView2<'_, f32> {
    fn dim(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    #[inline]
    fn sample(&self, row: usize, col: usize) -> f32 {
        self[[row.min(self.nrows() - 1), col.min(self.ncols() - 1)]]
    }
}

pub(crate) struct Interpolator;

impl Interpolator {
    /// Resample `source` into a `rows` x `cols` grid, mapping each output
    /// pixel back onto the source plane by dividing by `zoom`.
    pub(crate) fn resample<S: PlaneSampler + ?Sized>(
        source: &S,
        rows: usize,
        cols: usize,
        zoom: f32,
        interpolation: Interpolation,
    ) -> Array2<f32> {
        let (src_rows, src_cols) = source.dim();
        if rows == 0 || cols == 0 || src_rows == 0 || src_cols == 0 {
            return Array2::zeros((rows, cols));
        }

        let pixel_data: Vec<f32> = (0..rows)
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..cols).map(move |x| {
                    let src_y = y as f32 / zoom;
                    let src_x = x as f32 / zoom;
                    match interpolation {
                        Interpolation::NearestNeighbor => {
                            Self::nearest_neighbor(source, src_y, src_x)
                        }
                        Interpolation::Bilinear => {
                            Self::bilinear_interpolate(source, src_y, src_x)
                        }
                    }
                })
            })
            .collect();

        // `pixel_data` has exactly rows * cols entries.
        Array2::from_shape_vec((rows, cols), pixel_data)
            .unwrap_or_else(|_| Array2::zeros((rows, cols)))
    }

    #[inline]
    pub(crate) fn nearest_neighbor<S: PlaneSampler + ?Sized>(source: &S, y: f32, x: f32) -> f32 {
        source.sample(y.round() as usize, x.round() as usize)
    }

    /// Bilinear interpolation between the four samples bracketing (y, x).
    ///
    /// Integer-aligned coordinates fall back to nearest neighbour. Each
    /// bracketing sample is edge-clamped on its own, so on the last row or
    /// column both brackets read the same sample.
    #[inline]
    pub(crate) fn bilinear_interpolate<S: PlaneSampler + ?Sized>(
        source: &S,
        y: f32,
        x: f32,
    ) -> f32 {
        if y.fract() == 0.0 && x.fract() == 0.0 {
            return Self::nearest_neighbor(source, y, x);
        }

        let y0 = y.floor() as usize;
        let x0 = x.floor() as usize;
        let y1 = y0 + 1;
        let x1 = x0 + 1;

        let top = Self::lerp(source.sample(y0, x0), source.sample(y0, x1), x0, x, x1);
        let bottom = Self::lerp(source.sample(y1, x0), source.sample(y1, x1), x0, x, x1);
        Self::lerp(top, bottom, y0, y, y1)
    }

    /// Linear blend of `v1` at `p1` and `v2` at `p2`, evaluated at `p`.
    #[inline]
    pub(crate) fn lerp(v1: f32, v2: f32, p1: usize, p: f32, p2: usize) -> f32 {
        let ratio = (p - p1 as f32) / (p2 as f32 - p1 as f32);
        ratio.mul_add(v2 - v1, v1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn plane() -> Array2<f32> {
        Array2::from_shape_fn((4, 5), |(y, x)| (y * 10 + x) as f32)
    }

    #[test]
    fn nearest_neighbor_at_unit_zoom_is_identity() {
        let plane = plane();
        let source = plane.view();
        let out = Interpolator::resample(&source, 4, 5, 1.0, Interpolation::NearestNeighbor);
        assert_eq!(out, plane);
    }

    #[test]
    fn bilinear_at_unit_zoom_matches_nearest_neighbor() {
        let plane = plane();
        let source = plane.view();
        let nn = Interpolator::resample(&source, 4, 5, 1.0, Interpolation::NearestNeighbor);
        let bl = Interpolator::resample(&source, 4, 5, 1.0, Interpolation::Bilinear);
        assert_eq!(nn, bl);
    }

    #[test]
    fn nearest_neighbor_upscale_rounds_to_closest_sample() {
        let plane = plane();
        let source = plane.view();
        let out = Interpolator::resample(&source, 8, 10, 2.0, Interpolation::NearestNeighbor);
        assert_eq!(out.dim(), (8, 10));
        // 3 / 2 = 1.5 rounds away from zero to 2.
        assert_eq!(out[[3, 3]], plane[[2, 2]]);
        assert_eq!(out[[2, 4]], plane[[1, 2]]);
        // 7 / 2 = 3.5 rounds to 4 and saturates at the last row.
        assert_eq!(out[[7, 9]], plane[[3, 4]]);
    }

    #[test]
    fn bilinear_upscale_blends_neighbors() {
        let plane = plane();
        let source = plane.view();
        let out = Interpolator::resample(&source, 8, 10, 2.0, Interpolation::Bilinear);
        assert_relative_eq!(out[[1, 1]], 5.5);
        assert_relative_eq!(out[[2, 3]], 11.5);
        assert_relative_eq!(out[[3, 0]], 15.0);
    }

    #[test]
    fn bilinear_clamps_at_edges() {
        let plane = plane();
        let source = plane.view();
        // Row 3.5 brackets rows 3 and 4; row 4 saturates to 3.
        assert_relative_eq!(Interpolator::bilinear_interpolate(&source, 3.5, 4.5), 34.0);
        assert_relative_eq!(Interpolator::bilinear_interpolate(&source, 3.5, 1.25), 31.25);
    }

    #[test]
    fn downscale_skips_samples() {
        let plane = plane();
        let source = plane.view();
        let out = Interpolator::resample(&source, 2, 2, 0.5, Interpolation::NearestNeighbor);
        assert_eq!(out, ndarray::array![[0.0f32, 2.0], [20.0, 22.0]]);
    }

    #[test]
    fn empty_output_is_allowed() {
        let plane = plane();
        let source = plane.view();
        let out = Interpolator::resample(&source, 0, 3, 0.5, Interpolation::Bilinear);
        assert_eq!(out.dim(), (0, 3));
    }

    #[test]
    fn lerp_weights_by_distance() {
        assert_relative_eq!(Interpolator::lerp(2.0, 6.0, 3, 3.25, 4), 3.0);
    }
}
