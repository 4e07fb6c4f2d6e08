//! Raw sample to `[0, 1]` intensity mapping.
//!
//! Two policies exist, see [`IntensityMapping`]. Linear mapping stretches the
//! volume's `[min, max]` range onto `[0, 1]`. Equalized mapping looks every
//! sample up in an [`EqualizationTable`], the cumulative histogram of the
//! whole volume, so an intensity band's on-screen weight follows its
//! frequency instead of its value span.

use crate::enums::IntensityMapping;
use crate::volume::Volume;

use ndarray::{Array3, Zip};
use rayon::prelude::*;

/// Normalized intensities in (z, y, x) order, one per raw sample.
pub type NormalizedField = Array3<f32>;

/// Cumulative distribution of the volume's raw values.
///
/// Entry `i` holds the fraction of samples whose value is `<= min + i`.
/// The table is non-decreasing and its last entry is `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualizationTable {
    min: i16,
    cdf: Vec<f32>,
}

impl EqualizationTable {
    pub fn new(volume: &Volume) -> Self {
        let min = volume.min();
        let levels = Self::level_count(volume);
        let histogram = Self::histogram(volume, levels);

        let total = volume.len().max(1) as f64;
        let mut running = 0u64;
        let cdf = histogram
            .iter()
            .map(|&count| {
                running += count;
                (running as f64 / total) as f32
            })
            .collect();

        Self { min, cdf }
    }

    /// Number of distinct raw levels covered, `max - min + 1`.
    pub fn len(&self) -> usize {
        self.cdf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cdf.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.cdf
    }

    /// Equalized intensity of a raw sample. Values outside the volume's
    /// range saturate to the first or last entry.
    #[inline]
    pub fn get(&self, raw: i16) -> f32 {
        let offset = (i32::from(raw) - i32::from(self.min)).max(0) as usize;
        let last = self.cdf.len().saturating_sub(1);
        self.cdf.get(offset.min(last)).copied().unwrap_or(0.0)
    }

    fn level_count(volume: &Volume) -> usize {
        if volume.is_empty() {
            return 0;
        }
        (i32::from(volume.max()) - i32::from(volume.min()) + 1) as usize
    }

    fn histogram(volume: &Volume, levels: usize) -> Vec<u64> {
        let min = i32::from(volume.min());
        let bucket = |v: i16| (i32::from(v) - min) as usize;
        match volume.data().as_slice() {
            Some(samples) => samples
                .par_chunks(1 << 16)
                .map(|chunk| {
                    let mut hist = vec![0u64; levels];
                    for &v in chunk {
                        hist[bucket(v)] += 1;
                    }
                    hist
                })
                .reduce(
                    || vec![0u64; levels],
                    |mut a, b| {
                        a.iter_mut().zip(b).for_each(|(x, y)| *x += y);
                        a
                    },
                ),
            None => {
                let mut hist = vec![0u64; levels];
                volume.data().iter().for_each(|&v| hist[bucket(v)] += 1);
                hist
            }
        }
    }
}

/// Linear mapping of `raw` onto `[0, 1]` for the range `[min, max]`.
///
/// A flat volume (`max == min`) maps everything to `0.0`.
#[inline]
pub fn linear_intensity(raw: i16, min: i16, max: i16) -> f32 {
    let span = f32::from(max) - f32::from(min);
    if span <= 0.0 {
        return 0.0;
    }
    ((f32::from(raw) - f32::from(min)) / span).min(1.0)
}

/// Build the full normalized field for `volume` under `mapping`.
pub fn normalize(
    volume: &Volume,
    mapping: IntensityMapping,
    table: &EqualizationTable,
) -> NormalizedField {
    let (min, max) = (volume.min(), volume.max());
    match mapping {
        IntensityMapping::Linear => {
            Zip::from(volume.data()).par_map_collect(|&raw| linear_intensity(raw, min, max))
        }
        IntensityMapping::Equalized => Zip::from(volume.data()).par_map_collect(|&raw| table.get(raw)),
    }
}
