use crate::volume::Volume;

use byteorder::{BigEndian, ByteOrder};
use log::{debug, info, warn};
use ndarray::Array3;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use thiserror::Error;
use web_time::Instant;

/// Shape (depth, height, width) of the CT head data set.
pub const CT_HEAD_DIM: (usize, usize, usize) = (113, 256, 256);

const SAMPLE_BYTES: usize = 2;

#[derive(Debug, Error)]
pub enum VolumeLoaderError {
    #[error("Truncated volume: expected {expected} samples, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("Invalid volume dimensions {0:?}")]
    InvalidDimensions((usize, usize, usize)),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct VolumeLoader;

impl VolumeLoader {
    /// Load a CT head volume from a raw file
    ///
    /// The file must hold [`CT_HEAD_DIM`] big-endian signed 16-bit samples
    /// in (z, y, x) order with no header.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or holds too few samples
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Volume, VolumeLoaderError> {
        Self::load_from_path_with_dim(path, CT_HEAD_DIM)
    }

    pub fn load_from_path_with_dim(
        path: impl AsRef<Path>,
        dim: (usize, usize, usize),
    ) -> Result<Volume, VolumeLoaderError> {
        let path = path.as_ref();
        debug!("opening {}", path.display());
        let file = File::open(path)?;
        Self::load_from_reader_with_dim(BufReader::new(file), dim)
    }

    pub fn load_from_reader(reader: impl Read) -> Result<Volume, VolumeLoaderError> {
        Self::load_from_reader_with_dim(reader, CT_HEAD_DIM)
    }

    /// Load a volume of shape `dim` (depth, height, width) from a raw stream
    ///
    /// Bytes past the expected block are ignored.
    ///
    /// # Errors
    ///
    /// Returns error if any axis is empty, the stream fails, or it ends
    /// before `depth * height * width` samples were read
    pub fn load_from_reader_with_dim(
        mut reader: impl Read,
        dim: (usize, usize, usize),
    ) -> Result<Volume, VolumeLoaderError> {
        let t0 = Instant::now();
        let expected = Self::sample_count(dim)?;

        let mut bytes = Vec::with_capacity(expected * SAMPLE_BYTES);
        (&mut reader)
            .take((expected * SAMPLE_BYTES) as u64)
            .read_to_end(&mut bytes)?;
        if bytes.len() < expected * SAMPLE_BYTES {
            return Err(VolumeLoaderError::Truncated {
                expected,
                found: bytes.len() / SAMPLE_BYTES,
            });
        }
        if reader.read(&mut [0u8; 1])? > 0 {
            warn!("ignoring trailing data after {expected} samples");
        }

        let mut samples = vec![0i16; expected];
        BigEndian::read_i16_into(&bytes, &mut samples);
        let data = Array3::from_shape_vec(dim, samples)
            .map_err(|_| VolumeLoaderError::InvalidDimensions(dim))?;

        let volume = Volume::new(data);
        info!(
            "loaded {}x{}x{} volume, range [{}, {}], in {:?}",
            dim.0,
            dim.1,
            dim.2,
            volume.min(),
            volume.max(),
            t0.elapsed()
        );
        Ok(volume)
    }

    fn sample_count(dim: (usize, usize, usize)) -> Result<usize, VolumeLoaderError> {
        let (depth, height, width) = dim;
        if depth == 0 || height == 0 || width == 0 {
            return Err(VolumeLoaderError::InvalidDimensions(dim));
        }
        depth
            .checked_mul(height)
            .and_then(|n| n.checked_mul(width))
            .filter(|n| n.checked_mul(SAMPLE_BYTES).is_some())
            .ok_or(VolumeLoaderError::InvalidDimensions(dim))
    }
}
