use crate::enums::Orientation;
use crate::geometry::ViewGeometry;

use ndarray::Array3;
use ndarray::ArrayView2;
use ndarray::Axis;
use rayon::prelude::*;

/// Raw CT samples in (z, y, x) order together with their global extrema.
///
/// A volume is immutable once built; `min` and `max` are computed in
/// [`Volume::new`] and drive every intensity mapping.
#[derive(Debug, Clone)]
pub struct Volume {
    data: Array3<i16>,
    min: i16,
    max: i16,
}

impl Volume {
    pub fn new(data: Array3<i16>) -> Self {
        let (min, max) = Self::extrema(&data);
        Self { data, min, max }
    }

    /// Get the dimensions of the volume (depth, height, width)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &Array3<i16> {
        &self.data
    }

    pub fn min(&self) -> i16 {
        self.min
    }

    pub fn max(&self) -> i16 {
        self.max
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn geometry(&self, orientation: Orientation) -> ViewGeometry {
        ViewGeometry::new(orientation, self.dim())
    }

    pub fn get_slice_from_axis(
        &self,
        index: usize,
        orientation: Orientation,
    ) -> Option<ArrayView2<'_, i16>> {
        let geometry = self.geometry(orientation);
        if index > geometry.max_slice() || geometry.slice_len() == 0 {
            return None;
        }
        Some(self.data.index_axis(Axis(geometry.slice_axis()), index))
    }

    // An empty array keeps the fold's identity (i16::MAX, i16::MIN).
    fn extrema(data: &Array3<i16>) -> (i16, i16) {
        let fold = |(lo, hi): (i16, i16), v: i16| (lo.min(v), hi.max(v));
        let identity = || (i16::MAX, i16::MIN);
        match data.as_slice() {
            Some(samples) => samples
                .par_iter()
                .copied()
                .fold(identity, fold)
                .reduce(identity, |a, b| (a.0.min(b.0), a.1.max(b.1))),
            None => data.iter().copied().fold(identity(), fold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_global_extrema() {
        let data = Array3::from_shape_fn((3, 4, 5), |(z, y, x)| {
            (z as i16 * 100) - (y as i16 * 10) + x as i16 - 7
        });
        let volume = Volume::new(data);
        assert_eq!(volume.min(), -37);
        assert_eq!(volume.max(), 197);
        assert_eq!(volume.dim(), (3, 4, 5));
    }

    #[test]
    fn extrema_of_non_contiguous_data() {
        let data = Array3::from_shape_fn((2, 3, 4), |(z, y, x)| (z * 12 + y * 4 + x) as i16);
        let volume = Volume::new(data.reversed_axes().to_owned());
        assert_eq!(volume.min(), 0);
        assert_eq!(volume.max(), 23);
    }

    #[test]
    fn slices_follow_orientation() {
        let data = Array3::from_shape_fn((2, 3, 4), |(z, y, x)| (z * 100 + y * 10 + x) as i16);
        let volume = Volume::new(data);

        let axial = volume.get_slice_from_axis(1, Orientation::Axial).unwrap();
        assert_eq!(axial.dim(), (3, 4));
        assert_eq!(axial[[2, 3]], 123);

        let coronal = volume.get_slice_from_axis(2, Orientation::Coronal).unwrap();
        assert_eq!(coronal.dim(), (2, 4));
        assert_eq!(coronal[[1, 3]], 123);

        let sagittal = volume.get_slice_from_axis(3, Orientation::Sagittal).unwrap();
        assert_eq!(sagittal.dim(), (2, 3));
        assert_eq!(sagittal[[1, 2]], 123);

        assert!(volume.get_slice_from_axis(2, Orientation::Axial).is_none());
    }
}
