use {
  std::{
    fs::OpenOptions,
    io::BufWriter,
    path::Path
  },
  image::{ImageOutputFormat, RgbaImage},
  crate::error::Result
};

/// Encode `image` as PNG into a file that must not exist yet.
/// Returns the number of bytes written.
pub fn write_png(path: impl AsRef<Path>, image: &RgbaImage) -> Result<u64> {
  use humansize::{FileSize, file_size_opts as options};

  let path = path.as_ref();
  // never clobber an existing file
  let file = OpenOptions::new()
    .write(true)
    .create_new(true)
    .open(path)?;

  let mut writer = BufWriter::new(file);
  image.write_to(&mut writer, ImageOutputFormat::Png)?;
  let file = writer.into_inner()
    .map_err(|err| err.into_error())?;
  let written = file.metadata()?.len();

  tracing::info!(
    path = %path.display(),
    width = image.width(),
    height = image.height(),
    size = %written.file_size(options::BINARY).unwrap_or_else(|_| format!("{} B", written)),
    "image written"
  );
  Ok(written)
}
