use std::fmt;
use std::path::Path;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};

use crate::consts::{IMAGE_MEDIA_PREFIX, UNKNOWN_MEDIA_TYPE};
use crate::error::{Result, ScanError};

/// A file handed over by the user (picked or dropped), not yet validated.
#[derive(Clone, Debug)]
pub struct PickedFile {
    pub name: String,
    /// Declared media type, e.g. `image/png`.
    pub media_type: String,
    pub bytes: Arc<[u8]>,
}

impl PickedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, inferring its media type from the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self::new(name, media_type_for_path(path), bytes))
    }

    pub fn is_image(&self) -> bool {
        is_image_media_type(&self.media_type)
    }
}

pub fn is_image_media_type(media_type: &str) -> bool {
    image_media_essence(media_type).is_some()
}

/// The `image/<subtype>` part of a media type, without parameters. `None`
/// unless the type is `image` and the subtype is a non-empty token.
pub fn image_media_essence(media_type: &str) -> Option<&str> {
    let essence = media_type.split(';').next()?.trim();
    let subtype = essence.strip_prefix(IMAGE_MEDIA_PREFIX)?;
    let valid = !subtype.is_empty() && subtype.chars().all(is_token_char);
    valid.then_some(essence)
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

/// Media type for a path, based on its extension. Unknown extensions map to
/// `application/octet-stream`.
pub fn media_type_for_path(path: &Path) -> &'static str {
    match ImageFormat::from_path(path) {
        Ok(format) => format.to_mime_type(),
        Err(_) => UNKNOWN_MEDIA_TYPE,
    }
}

/// Identity of one selection. Every accepted file gets a fresh id, so a
/// request tagged with an older id belongs to a selection that is gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionId(pub u64);

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The currently selected image. Always carries an `image/*` media type.
#[derive(Clone, Debug)]
pub struct SelectedImage {
    id: SelectionId,
    name: String,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl SelectedImage {
    /// Accept a picked file as a selection, rejecting non-image media types.
    /// Parameters are dropped from the stored media type.
    pub fn accept(id: SelectionId, file: PickedFile) -> Result<Self> {
        let Some(essence) = image_media_essence(&file.media_type) else {
            return Err(ScanError::InvalidFileType {
                media_type: file.media_type,
            });
        };
        Ok(Self {
            id,
            media_type: essence.to_string(),
            name: file.name,
            bytes: file.bytes,
        })
    }

    pub fn id(&self) -> SelectionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Decode image bytes into RGBA pixels for on-screen preview.
pub fn decode_preview(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}
