/// The three canonical, axis-aligned viewing orientations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Looking down the Z axis (top view).
    #[default]
    Axial,
    /// Looking down the Y axis (front view).
    Coronal,
    /// Looking down the X axis (side view).
    Sagittal,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Axial,
        Orientation::Coronal,
        Orientation::Sagittal,
    ];

    /// Display label used by the viewer's plane selector.
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Axial => "Transverse",
            Orientation::Coronal => "Coronal",
            Orientation::Sagittal => "Sagittal",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.label() == label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    #[default]
    NearestNeighbor,
    Bilinear,
    // TODO:
    // Bicubic,
}

impl Interpolation {
    pub fn toggled(self) -> Self {
        match self {
            Interpolation::NearestNeighbor => Interpolation::Bilinear,
            Interpolation::Bilinear => Interpolation::NearestNeighbor,
        }
    }
}

/// How raw samples are turned into `[0, 1]` intensities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntensityMapping {
    #[default]
    Linear,
    Equalized,
}
