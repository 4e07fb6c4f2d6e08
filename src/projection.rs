use crate::geometry::ViewGeometry;
use crate::intensity::NormalizedField;

use ndarray::{Array2, ArrayView1, Axis, Zip};

/// Maximum-intensity projection of a normalized field along an
/// orientation's slice axis.
///
/// Each in-plane (row, column) holds the largest intensity found across the
/// full depth of the slice axis. The slice index plays no part.
pub struct MaximumIntensityProjection {
    plane: Array2<f32>,
}

impl MaximumIntensityProjection {
    pub fn new(field: &NormalizedField, geometry: &ViewGeometry) -> Self {
        let lanes = field.lanes(Axis(geometry.slice_axis()));
        let plane = Zip::from(lanes).par_map_collect(|lane| Self::lane_max(lane));
        Self { plane }
    }

    /// Projected plane in (row, column) order.
    pub fn plane(&self) -> &Array2<f32> {
        &self.plane
    }

    pub fn into_plane(self) -> Array2<f32> {
        self.plane
    }

    // Starts below any mapped intensity so the first sample always wins.
    fn lane_max(lane: ArrayView1<'_, f32>) -> f32 {
        lane.fold(f32::NEG_INFINITY, |acc, &v| acc.max(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Orientation;

    fn field() -> NormalizedField {
        NormalizedField::from_shape_fn((3, 4, 5), |(z, y, x)| {
            (((z * 7 + y * 3 + x * 11) % 13) as f32) / 12.0
        })
    }

    #[test]
    fn projection_dominates_every_slice() {
        let field = field();
        for orientation in Orientation::ALL {
            let geometry = ViewGeometry::new(orientation, field.dim());
            let mip = MaximumIntensityProjection::new(&field, &geometry);
            assert_eq!(mip.plane().dim(), geometry.plane_dim());

            for i in 0..geometry.slice_len() {
                let slice = field.index_axis(Axis(geometry.slice_axis()), i);
                assert!(
                    Zip::from(&slice)
                        .and(mip.plane())
                        .all(|&value, &max| value <= max)
                );
            }
        }
    }

    #[test]
    fn projection_value_is_attained() {
        let field = field();
        let geometry = ViewGeometry::new(Orientation::Coronal, field.dim());
        let mip = MaximumIntensityProjection::new(&field, &geometry);

        let (z, x) = (2, 4);
        let expected = (0..4)
            .map(|y| field[[z, y, x]])
            .fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(mip.plane()[[z, x]], expected);
    }
}
