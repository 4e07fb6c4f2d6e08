use std::io::Write;

use tempfile::NamedTempFile;

/// Deterministic CT-like sample at (z, y, x): a bright sphere in a dim
/// background with a little structured noise.
pub fn phantom_sample(dim: (usize, usize, usize), z: usize, y: usize, x: usize) -> i16 {
    let centre = |len: usize| len as f32 / 2.0;
    let dz = (z as f32 - centre(dim.0)) / dim.0 as f32;
    let dy = (y as f32 - centre(dim.1)) / dim.1 as f32;
    let dx = (x as f32 - centre(dim.2)) / dim.2 as f32;
    let r = (dz * dz + dy * dy + dx * dx).sqrt();
    let noise = ((z * 31 + y * 17 + x * 7) % 23) as i16;
    if r < 0.3 { 1200 + noise * 10 } else { -900 + noise }
}

/// Write a phantom volume of shape `dim` as raw big-endian samples.
pub fn phantom_file(dim: (usize, usize, usize)) -> NamedTempFile {
    let mut bytes = Vec::with_capacity(dim.0 * dim.1 * dim.2 * 2);
    for z in 0..dim.0 {
        for y in 0..dim.1 {
            for x in 0..dim.2 {
                bytes.extend_from_slice(&phantom_sample(dim, z, y, x).to_be_bytes());
            }
        }
    }
    let mut file = NamedTempFile::new().expect("should create temp file");
    file.write_all(&bytes).expect("should write phantom volume");
    file.flush().expect("should flush phantom volume");
    file
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
