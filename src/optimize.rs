use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageFormat, ImageReader};

use crate::error::ErrorKind;
use crate::sniff::{self, ContentType};
use crate::Result;

const TARGET_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub const JPEG_QUALITY: u8 = 85;

const OUTPUT_SUFFIX: &str = "_optimized";

/// Re-encodes the image at `path` into `<stem>_optimized<ext>` next to it
/// and returns the output path.
pub fn optimize(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    check_extension(path)?;

    match sniff::sniff(&mut File::open(path)?)? {
        ContentType::Jpeg | ContentType::Png => {}
        ContentType::Other => return Err(ErrorKind::UnsupportedFormat)?,
    }

    // The decoder's own format identification is authoritative from here on,
    // even when it disagrees with the extension.
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format().ok_or(ErrorKind::Internal)?;
    let image = reader.decode().map_err(ErrorKind::Decode)?;

    let output_path = output_file_name(path);
    let mut writer = BufWriter::new(File::create(&output_path)?);
    match format {
        ImageFormat::Jpeg => image
            .write_with_encoder(JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY))
            .map_err(ErrorKind::Encode)?,
        ImageFormat::Png => image
            .write_with_encoder(PngEncoder::new_with_quality(
                &mut writer,
                CompressionType::Best,
                FilterType::Adaptive,
            ))
            .map_err(ErrorKind::Encode)?,
        _ => return Err(ErrorKind::Internal)?,
    }
    writer.flush()?;

    info!("{format:?} 画像の圧縮が完了しました");
    Ok(output_path)
}

fn check_extension(path: &Path) -> Result<()> {
    let ext = match path.extension().and_then(OsStr::to_str) {
        Some(ext) if !ext.is_empty() => ext,
        _ => return Err(ErrorKind::MissingExtension)?,
    };
    if !TARGET_EXTENSIONS
        .iter()
        .any(|target| ext.eq_ignore_ascii_case(target))
    {
        return Err(ErrorKind::UnsupportedExtension(format!(".{ext}")))?;
    }
    Ok(())
}

fn output_file_name(path: &Path) -> PathBuf {
    let stem = path.file_stem().and_then(OsStr::to_str).unwrap_or_default();
    let ext = path.extension().and_then(OsStr::to_str).unwrap_or_default();
    path.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_target_extensions_case_insensitively() {
        for name in ["a.jpg", "a.JPG", "a.jpeg", "a.JpEg", "a.png", "a.PNG"] {
            assert!(check_extension(Path::new(name)).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_unrelated_extension() {
        let err = check_extension(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnsupportedExtension(ref e) if e == ".txt"));
    }

    #[test]
    fn rejects_missing_extension() {
        for name in ["photo", "photo.", ".gitignore"] {
            let err = check_extension(Path::new(name)).unwrap_err();
            assert!(matches!(err.kind, ErrorKind::MissingExtension), "{name}");
        }
    }

    #[test]
    fn output_name_keeps_extension_case() {
        assert_eq!(
            output_file_name(Path::new("photo.JPG")),
            PathBuf::from("photo_optimized.JPG")
        );
    }

    #[test]
    fn output_name_stays_in_input_directory() {
        assert_eq!(
            output_file_name(Path::new("/tmp/shots/photo.png")),
            PathBuf::from("/tmp/shots/photo_optimized.png")
        );
    }
}
