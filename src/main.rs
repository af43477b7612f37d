use {
  std::{path::PathBuf, process::ExitCode},
  anyhow::{Context, Result},
  clap::Parser,
  rgb_demo::{
    canvas::{Canvas, Preset},
    raster::{self, PixelSource},
    profile
  }
};

/// Draw three overlapping red, green and blue circles into a new PNG file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
  /// Destination file, must not exist yet
  #[arg(default_value = "rgb.png")]
  output: PathBuf,
  /// Side of the square image, in pixels
  #[arg(short, long, default_value_t = 400, allow_negative_numbers = true)]
  side: i64,
  /// Circle layout: rgb, disc or blank
  #[arg(short, long, default_value_t = Preset::Rgb)]
  preset: Preset,
  /// Rasterize on a dedicated pool of this many threads
  #[arg(short, long)]
  threads: Option<usize>,
  /// Open the written image with the default viewer
  #[arg(long)]
  open: bool,
  /// Log progress at info level
  #[arg(short, long)]
  verbose: bool,
  /// Log timings and error details at debug level
  #[arg(long)]
  debug: bool,
}

fn main() -> ExitCode {
  let args = Args::parse();

  // RUST_LOG wins unless a level flag was given explicitly
  let filter = tracing_subscriber::EnvFilter::builder()
    .with_default_directive(tracing::Level::WARN.into())
    .from_env_lossy();
  let filter = if args.debug {
    filter.add_directive(tracing::Level::DEBUG.into())
  } else if args.verbose {
    filter.add_directive(tracing::Level::INFO.into())
  } else {
    filter
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      tracing::debug!("{:?}", err);
      eprintln!("error: {:#}", err);
      ExitCode::FAILURE
    }
  }
}

fn run(args: &Args) -> Result<()> {
  let canvas = Canvas::with_preset(args.side, args.preset)?;
  tracing::info!(
    side = canvas.side(),
    preset = %args.preset,
    circles = canvas.layers().len(),
    "rendering {:?}", canvas.bounds()
  );

  let image = match args.threads {
    Some(num_threads) => rayon::ThreadPoolBuilder::new()
      .num_threads(num_threads)
      .build()?
      .install(|| profile!("rasterize", raster::rasterize_parallel(&canvas)))?,
    None => profile!("rasterize", raster::rasterize_parallel(&canvas))?
  };

  profile!("encode", raster::write_png(&args.output, &image))
    .with_context(|| format!("cannot write {}", args.output.display()))?;

  if args.open {
    let status = open::that(&args.output)
      .with_context(|| format!("cannot open {}", args.output.display()))?;
    if !status.success() {
      tracing::warn!(%status, "image viewer exited with failure");
    }
  }
  Ok(())
}
