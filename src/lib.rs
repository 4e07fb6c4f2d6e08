//! # CT head library
//!
//! This crate turns a raw CT volume into the 2D grayscale frames a viewer
//! displays. The volume is a fixed block of big-endian signed 16-bit
//! samples in (z, y, x) order, 113 x 256 x 256 for the CT head data set.
//! Frames are plain `ndarray` arrays of intensities in `[0, 1]`.
//!
//! The volume can be viewed along the three medical axes:
//!  - Axial (transverse, looking down Z)
//!  - Coronal (looking down Y)
//!  - Sagittal (looking down X)
//!
//! Every orientation shares one resampler. Frames can be zoomed between
//! [`MIN_SF`] and [`MAX_SF`] with nearest-neighbour or bilinear
//! interpolation, replaced by a maximum-intensity projection over the full
//! depth, and contrast-stretched by histogram equalization. A filmstrip of
//! thumbnails around the current slice can be rendered as well.
//!
//! The [`Session`] holds all viewer state and re-validates it on every
//! change: slice and zoom values out of range are clamped, never rejected.
//! Rendering is synchronous and uncached, every call recomputes the frame.
//!
//! # Examples
//!
//! ## Rendering a zoomed maximum-intensity projection
//!
//! ```no_run
//! # use ct_head::{Orientation, Session, VolumeLoader, render};
//! let volume = VolumeLoader::load_from_path("CThead")
//!     .expect("should have loaded the CT head volume");
//! let mut session = Session::new(volume);
//! session.set_view(Orientation::Coronal);
//! session.set_zoom(2.0);
//! session.toggle_mip();
//! let frame = session.render_current_frame();
//! render::to_luma_image(&frame)
//!     .expect("frame should convert to an image")
//!     .save("mip.png")
//!     .expect("should have written the image");
//! ```

pub mod enums;
pub mod filmstrip;
pub mod geometry;
pub mod intensity;
mod interpolator;
pub mod projection;
pub mod render;
pub mod session;
pub mod volume;
pub mod volume_loader;

pub use enums::{IntensityMapping, Interpolation, Orientation};
pub use geometry::ViewGeometry;
pub use intensity::{EqualizationTable, NormalizedField};
pub use interpolator::PlaneSampler;
pub use projection::MaximumIntensityProjection;
pub use session::{MAX_SF, MIN_SF, Session};
pub use volume::Volume;
pub use volume_loader::{CT_HEAD_DIM, VolumeLoader, VolumeLoaderError};
