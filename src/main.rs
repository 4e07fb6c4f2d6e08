use std::{error::Error, path::PathBuf};

use clap::Parser;
use ct_head::{CT_HEAD_DIM, Orientation, Session, VolumeLoader, render};
use log::info;

#[derive(Debug, clap::ValueEnum, Clone, Copy)]
enum ArgView {
    Axial,
    Coronal,
    Sagittal,
}

impl From<ArgView> for Orientation {
    fn from(view: ArgView) -> Self {
        match view {
            ArgView::Axial => Orientation::Axial,
            ArgView::Coronal => Orientation::Coronal,
            ArgView::Sagittal => Orientation::Sagittal,
        }
    }
}

#[derive(Parser, Debug)]
struct Args {
    /// Path to the raw volume: big-endian signed 16-bit samples, no header.
    input: PathBuf,
    /// Where to write the rendered PNG.
    output: PathBuf,
    #[arg(long, value_enum, default_value = "axial")]
    view: ArgView,
    /// Slice index, clamped to the view's range.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    slice: i64,
    /// Zoom factor, clamped to [0.5, 4.0].
    #[arg(long, default_value_t = 1.0)]
    zoom: f32,
    /// Render a maximum-intensity projection instead of a single slice.
    #[arg(long)]
    mip: bool,
    /// Use histogram-equalized intensities.
    #[arg(long)]
    equalize: bool,
    /// Use bilinear instead of nearest-neighbour resampling.
    #[arg(long)]
    bilinear: bool,
    /// Render the filmstrip around the slice instead of the main frame.
    #[arg(long)]
    filmstrip: bool,
    /// Volume shape as depth, height, width.
    #[arg(long, num_args = 3, value_delimiter = ',', default_values_t = [CT_HEAD_DIM.0, CT_HEAD_DIM.1, CT_HEAD_DIM.2])]
    dim: Vec<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    let args = Args::parse();

    let dim = match args.dim[..] {
        [depth, height, width] => (depth, height, width),
        _ => return Err("--dim takes exactly three values".into()),
    };
    let volume = VolumeLoader::load_from_path_with_dim(&args.input, dim)?;

    let mut session = Session::with_zoom(volume, args.zoom);
    session.set_view(args.view.into());
    session.set_slice(args.slice);
    if args.mip {
        session.toggle_mip();
    }
    if args.equalize {
        session.toggle_equalization();
    }
    if args.bilinear {
        session.toggle_interpolation_mode();
    }

    let frame = if args.filmstrip {
        session.render_filmstrip()
    } else {
        session.render_current_frame()
    };
    let image = render::to_luma_image(&frame).ok_or("frame has no pixel data")?;
    image.save(&args.output)?;
    info!(
        "wrote {}x{} image to {}",
        image.width(),
        image.height(),
        args.output.display()
    );

    Ok(())
}
