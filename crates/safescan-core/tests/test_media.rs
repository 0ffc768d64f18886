use std::path::Path;

use safescan_core::error::ScanError;
use safescan_core::media::{
    decode_preview, is_image_media_type, media_type_for_path, PickedFile, SelectedImage,
    SelectionId,
};

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 10, 10, 255]));
    img.save(&path).unwrap();
    path
}

#[test]
fn test_media_type_from_extension() {
    assert_eq!(media_type_for_path(Path::new("a.png")), "image/png");
    assert_eq!(media_type_for_path(Path::new("a.JPG")), "image/jpeg");
    assert_eq!(media_type_for_path(Path::new("a.webp")), "image/webp");
    assert_eq!(media_type_for_path(Path::new("a.txt")), "application/octet-stream");
    assert_eq!(media_type_for_path(Path::new("noext")), "application/octet-stream");
}

#[test]
fn test_is_image_media_type() {
    assert!(is_image_media_type("image/png"));
    assert!(is_image_media_type("image/svg+xml"));
    assert!(!is_image_media_type("text/plain"));
    assert!(!is_image_media_type("image"));
    assert!(!is_image_media_type("image/"));
    assert!(!is_image_media_type("image/ png"));
    assert!(!is_image_media_type("image/png/x"));
}

#[test]
fn test_accept_strips_media_type_parameters() {
    let file = PickedFile::new("x.png", " image/png; name=x ", vec![1u8; 4]);
    let image = SelectedImage::accept(SelectionId(2), file).unwrap();
    assert_eq!(image.media_type(), "image/png");
}

#[test]
fn test_picked_file_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "red.png", 3, 2);

    let file = PickedFile::from_path(&path).unwrap();

    assert_eq!(file.name, "red.png");
    assert_eq!(file.media_type, "image/png");
    assert!(file.is_image());
    assert!(!file.bytes.is_empty());
}

#[test]
fn test_picked_file_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PickedFile::from_path(&dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, ScanError::Io(_)));
}

#[test]
fn test_accept_rejects_non_image() {
    let file = PickedFile::new("doc.pdf", "application/pdf", vec![1u8, 2, 3]);
    let err = SelectedImage::accept(SelectionId(1), file).unwrap_err();
    match err {
        ScanError::InvalidFileType { media_type } => assert_eq!(media_type, "application/pdf"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_accept_keeps_payload() {
    let file = PickedFile::new("x.gif", "image/gif", vec![7u8; 10]);
    let image = SelectedImage::accept(SelectionId(4), file).unwrap();
    assert_eq!(image.id(), SelectionId(4));
    assert_eq!(image.name(), "x.gif");
    assert_eq!(image.media_type(), "image/gif");
    assert_eq!(image.bytes(), &[7u8; 10][..]);
    assert_eq!(image.len(), 10);
}

#[test]
fn test_decode_preview() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "red.png", 5, 4);
    let file = PickedFile::from_path(&path).unwrap();

    let preview = decode_preview(&file.bytes).unwrap();

    assert_eq!(preview.dimensions(), (5, 4));
    assert_eq!(preview.get_pixel(0, 0).0, [200, 10, 10, 255]);
}

#[test]
fn test_decode_preview_rejects_garbage() {
    let err = decode_preview(b"not an image").unwrap_err();
    assert!(matches!(err, ScanError::Image(_)));
}
