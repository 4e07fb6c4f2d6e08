use crate::enums::{IntensityMapping, Interpolation, Orientation};
use crate::filmstrip::{self, FILMSTRIP_COUNT, FILMSTRIP_GAP};
use crate::geometry::ViewGeometry;
use crate::intensity::{self, EqualizationTable, NormalizedField};
use crate::interpolator::Interpolator;
use crate::projection::MaximumIntensityProjection;
use crate::volume::Volume;

use log::{debug, warn};
use ndarray::{Array2, Axis};
use web_time::Instant;

/// Smallest allowed zoom factor.
pub const MIN_SF: f32 = 0.5;
/// Largest allowed zoom factor.
pub const MAX_SF: f32 = 4.0;

/// Viewer state over one loaded volume.
///
/// The session owns the volume, its equalization table and the normalized
/// field currently in use, plus the user's choices: orientation, slice,
/// zoom and the MIP / equalization / interpolation toggles. Every setter
/// clamps its input into range instead of rejecting it. Frames are never
/// cached; each render call recomputes from the current state.
pub struct Session {
    volume: Volume,
    equalization: EqualizationTable,
    field: NormalizedField,
    orientation: Orientation,
    slice: usize,
    zoom: f32,
    mip: bool,
    mapping: IntensityMapping,
    interpolation: Interpolation,
}

impl Session {
    pub fn new(volume: Volume) -> Self {
        Self::with_zoom(volume, 1.0)
    }

    /// Build a session on the axial view at slice 0 with the given initial zoom.
    pub fn with_zoom(volume: Volume, zoom: f32) -> Self {
        let t0 = Instant::now();
        let equalization = EqualizationTable::new(&volume);
        let mapping = IntensityMapping::default();
        let field = intensity::normalize(&volume, mapping, &equalization);
        debug!(
            "session ready: {} equalization levels, field built in {:?}",
            equalization.len(),
            t0.elapsed()
        );

        let mut session = Self {
            volume,
            equalization,
            field,
            orientation: Orientation::default(),
            slice: 0,
            zoom: 1.0,
            mip: false,
            mapping,
            interpolation: Interpolation::default(),
        };
        session.set_zoom(zoom);
        session
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn equalization_table(&self) -> &EqualizationTable {
        &self.equalization
    }

    /// The normalized field frames are currently sampled from.
    pub fn field(&self) -> &NormalizedField {
        &self.field
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn slice(&self) -> usize {
        self.slice
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_mip(&self) -> bool {
        self.mip
    }

    pub fn is_equalized(&self) -> bool {
        self.mapping == IntensityMapping::Equalized
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn geometry(&self) -> ViewGeometry {
        self.volume.geometry(self.orientation)
    }

    pub fn current_max_slice(&self) -> usize {
        self.geometry().max_slice()
    }

    /// (rows, columns) of the next [`Session::render_current_frame`].
    pub fn current_frame_dim(&self) -> (usize, usize) {
        self.geometry().scaled_dim(self.zoom)
    }

    /// Switch orientation, pulling the current slice into the new range.
    pub fn set_view(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.slice = self.slice.min(self.current_max_slice());
        debug!(
            "view set to {} (slice {}, max {})",
            orientation.label(),
            self.slice,
            self.current_max_slice()
        );
    }

    pub fn set_slice(&mut self, index: i64) {
        self.slice = self.geometry().clamp_slice(index);
        debug!("slice set to {} (requested {index})", self.slice);
    }

    /// Set the zoom factor, clamped to [`MIN_SF`, `MAX_SF`]. NaN is ignored.
    pub fn set_zoom(&mut self, factor: f32) {
        if factor.is_nan() {
            warn!("ignoring NaN zoom factor, keeping {}", self.zoom);
            return;
        }
        self.zoom = factor.clamp(MIN_SF, MAX_SF);
        debug!("zoom set to {} (requested {factor})", self.zoom);
    }

    pub fn toggle_mip(&mut self) {
        self.mip = !self.mip;
        debug!("mip {}", if self.mip { "on" } else { "off" });
    }

    /// Flip between linear and equalized mapping, rebuilding the whole field.
    pub fn toggle_equalization(&mut self) {
        let t0 = Instant::now();
        self.mapping = match self.mapping {
            IntensityMapping::Linear => IntensityMapping::Equalized,
            IntensityMapping::Equalized => IntensityMapping::Linear,
        };
        self.field = intensity::normalize(&self.volume, self.mapping, &self.equalization);
        debug!("{:?} mapping applied in {:?}", self.mapping, t0.elapsed());
    }

    pub fn toggle_interpolation_mode(&mut self) {
        self.interpolation = self.interpolation.toggled();
        debug!("interpolation set to {:?}", self.interpolation);
    }

    /// Render the frame for the current orientation, slice and zoom.
    ///
    /// With MIP enabled the slice index is ignored and the projection over
    /// the full slice axis is resampled instead.
    pub fn render_current_frame(&self) -> Array2<f32> {
        let t0 = Instant::now();
        let geometry = self.geometry();
        let (rows, cols) = geometry.scaled_dim(self.zoom);

        let frame = if self.mip {
            let projection = MaximumIntensityProjection::new(&self.field, &geometry);
            Interpolator::resample(
                &projection.plane().view(),
                rows,
                cols,
                self.zoom,
                self.interpolation,
            )
        } else {
            let plane = self.field.index_axis(Axis(geometry.slice_axis()), self.slice);
            Interpolator::resample(&plane, rows, cols, self.zoom, self.interpolation)
        };

        debug!(
            "rendered {} {}x{} frame (slice {}, zoom {}, mip {}) in {:?}",
            self.orientation.label(),
            cols,
            rows,
            self.slice,
            self.zoom,
            self.mip,
            t0.elapsed()
        );
        frame
    }

    /// Slice indices the next [`Session::render_filmstrip`] will show.
    pub fn filmstrip_slices(&self) -> Vec<usize> {
        filmstrip::filmstrip_slices(
            self.slice,
            self.current_max_slice(),
            FILMSTRIP_GAP,
            FILMSTRIP_COUNT,
        )
    }

    /// Render thumbnails of the slices around the current one, side by side.
    ///
    /// The filmstrip always shows single slices, even while MIP is on.
    pub fn render_filmstrip(&self) -> Array2<f32> {
        let t0 = Instant::now();
        let slices = self.filmstrip_slices();
        let strip =
            filmstrip::render_filmstrip(&self.field, &self.geometry(), &slices, self.interpolation);
        debug!(
            "rendered filmstrip of slices {:?} ({}x{}) in {:?}",
            slices,
            strip.ncols(),
            strip.nrows(),
            t0.elapsed()
        );
        strip
    }
}
