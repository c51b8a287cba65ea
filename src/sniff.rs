use std::io::Read;

use crate::Result;

// The first 512 bytes are enough to classify the content.
pub const SNIFF_LEN: usize = 512;

const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];
const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Jpeg,
    Png,
    Other,
}

impl ContentType {
    pub fn mime(self) -> &'static str {
        match self {
            ContentType::Jpeg => "image/jpeg",
            ContentType::Png => "image/png",
            ContentType::Other => "application/octet-stream",
        }
    }
}

/// Reads the sniff window from `reader` and classifies it. Sources with
/// fewer than [`SNIFF_LEN`] bytes are rejected as an I/O error.
pub fn sniff(reader: &mut impl Read) -> Result<ContentType> {
    let mut buf = [0u8; SNIFF_LEN];
    reader.read_exact(&mut buf)?;
    let content_type = detect(&buf);
    trace!("sniffed content type {}", content_type.mime());
    Ok(content_type)
}

pub fn detect(bytes: &[u8]) -> ContentType {
    if bytes.starts_with(&JPEG_MAGIC) {
        ContentType::Jpeg
    } else if bytes.starts_with(&PNG_MAGIC) {
        ContentType::Png
    } else {
        ContentType::Other
    }
}
