//! Axis bookkeeping shared by every orientation.
//!
//! Each [`Orientation`] is reduced to a small table: which volume axis is
//! stepped through by the slice index, and which two remaining axes become
//! the (row, column) of the rendered plane. Removing the slice axis from
//! (z, y, x) keeps the other two in order, so the plane of any orientation is
//! exactly `data.index_axis(Axis(slice_axis), i)`.

use crate::enums::Orientation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewGeometry {
    orientation: Orientation,
    slice_axis: usize,
    row_axis: usize,
    col_axis: usize,
    dim: [usize; 3],
}

impl ViewGeometry {
    /// `dim` is the volume shape as (depth, height, width).
    pub fn new(orientation: Orientation, dim: (usize, usize, usize)) -> Self {
        let (slice_axis, row_axis, col_axis) = match orientation {
            Orientation::Axial => (0, 1, 2),
            Orientation::Coronal => (1, 0, 2),
            Orientation::Sagittal => (2, 0, 1),
        };
        Self {
            orientation,
            slice_axis,
            row_axis,
            col_axis,
            dim: [dim.0, dim.1, dim.2],
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn slice_axis(&self) -> usize {
        self.slice_axis
    }

    pub fn slice_len(&self) -> usize {
        self.dim[self.slice_axis]
    }

    pub fn max_slice(&self) -> usize {
        self.slice_len().saturating_sub(1)
    }

    /// In-plane size as (rows, columns).
    pub fn plane_dim(&self) -> (usize, usize) {
        (self.dim[self.row_axis], self.dim[self.col_axis])
    }

    /// Output size as (rows, columns) after scaling by `zoom`.
    pub fn scaled_dim(&self, zoom: f32) -> (usize, usize) {
        let (rows, cols) = self.plane_dim();
        (scale_len(rows, zoom), scale_len(cols, zoom))
    }

    pub fn clamp_slice(&self, index: i64) -> usize {
        index.clamp(0, self.max_slice() as i64) as usize
    }

    /// Volume index (z, y, x) for in-plane `row`/`col` on slice `index`.
    ///
    /// Row and column saturate to the last valid sample; the slice index is
    /// passed through.
    pub fn voxel_index(&self, row: usize, col: usize, index: usize) -> (usize, usize, usize) {
        let (rows, cols) = self.plane_dim();
        let mut voxel = [0; 3];
        voxel[self.slice_axis] = index;
        voxel[self.row_axis] = row.min(rows.saturating_sub(1));
        voxel[self.col_axis] = col.min(cols.saturating_sub(1));
        (voxel[0], voxel[1], voxel[2])
    }
}

#[inline]
pub(crate) fn scale_len(len: usize, zoom: f32) -> usize {
    (len as f32 * zoom).floor().max(0.0) as usize
}
