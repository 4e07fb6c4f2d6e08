use crate::enums::Interpolation;
use crate::geometry::ViewGeometry;
use crate::intensity::NormalizedField;
use crate::interpolator::Interpolator;

use ndarray::{Array2, ArrayView2, Axis, concatenate};

/// Zoom applied to every thumbnail.
pub const THUMBNAIL_SF: f32 = 0.5;
/// Slices between neighbouring thumbnails.
pub const FILMSTRIP_GAP: usize = 5;
/// Thumbnails on each side of the centre slice.
pub const FILMSTRIP_COUNT: usize = 3;

/// Slice indices shown around `center`, in ascending order.
///
/// Candidates are `center + k * gap` for `k` in `-count..=count`; those
/// outside `[0, max_slice]` are dropped rather than replaced.
pub fn filmstrip_slices(center: usize, max_slice: usize, gap: usize, count: usize) -> Vec<usize> {
    let center = center as i64;
    let (gap, count) = (gap as i64, count as i64);
    (-count..=count)
        .map(|k| center + k * gap)
        .filter(|&i| (0..=max_slice as i64).contains(&i))
        .map(|i| i as usize)
        .collect()
}

/// Lay the given slices side by side, each resampled at [`THUMBNAIL_SF`].
///
/// The result is one thumbnail high and `slices.len()` thumbnails wide.
/// Thumbnails always come from single-slice lookups, never a projection.
pub fn render_filmstrip(
    field: &NormalizedField,
    geometry: &ViewGeometry,
    slices: &[usize],
    interpolation: Interpolation,
) -> Array2<f32> {
    let (rows, cols) = geometry.scaled_dim(THUMBNAIL_SF);
    let thumbnails: Vec<Array2<f32>> = slices
        .iter()
        .map(|&index| {
            let plane = field.index_axis(Axis(geometry.slice_axis()), index);
            Interpolator::resample(&plane, rows, cols, THUMBNAIL_SF, interpolation)
        })
        .collect();

    let views: Vec<ArrayView2<'_, f32>> = thumbnails.iter().map(|t| t.view()).collect();
    concatenate(Axis(1), &views).unwrap_or_else(|_| Array2::zeros((rows, 0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Orientation;

    #[test]
    fn slices_around_center() {
        assert_eq!(
            filmstrip_slices(50, 112, FILMSTRIP_GAP, FILMSTRIP_COUNT),
            vec![35, 40, 45, 50, 55, 60, 65]
        );
    }

    #[test]
    fn out_of_range_slices_are_omitted() {
        assert_eq!(filmstrip_slices(7, 112, 5, 3), vec![2, 7, 12, 17, 22]);
        assert_eq!(filmstrip_slices(110, 112, 5, 3), vec![95, 100, 105, 110]);
        assert_eq!(filmstrip_slices(0, 0, 5, 3), vec![0]);
    }

    #[test]
    fn thumbnails_are_laid_out_left_to_right() {
        let field = NormalizedField::from_shape_fn((20, 6, 8), |(z, _, _)| z as f32 / 19.0);
        let geometry = ViewGeometry::new(Orientation::Axial, field.dim());
        let slices = filmstrip_slices(10, geometry.max_slice(), 5, 3);
        assert_eq!(slices, vec![0, 5, 10, 15]);

        let strip = render_filmstrip(&field, &geometry, &slices, Interpolation::NearestNeighbor);
        assert_eq!(strip.dim(), (3, 4 * 4));
        for (n, &slice) in slices.iter().enumerate() {
            let expected = slice as f32 / 19.0;
            let thumb = strip.slice(ndarray::s![.., n * 4..(n + 1) * 4]);
            assert!(thumb.iter().all(|&v| v == expected));
        }
    }
}
