use super::*;

#[test]
fn pick_guesses_media_type_from_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("before.jpg");
    std::fs::write(&path, b"jpeg").expect("write");

    let file = pick(&path).expect("pick");
    assert_eq!(file.display_name, "before.jpg");
    assert_eq!(file.media_type, "image/jpeg");
    assert!(file.is_previewable());
}

#[test]
fn tif_is_an_image_but_not_previewable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scene.tif");
    std::fs::write(&path, b"tiff").expect("write");

    let file = pick(&path).expect("pick");
    assert_eq!(file.media_type, "image/tiff");
    assert!(!file.is_previewable());
}

#[test]
fn unknown_extension_falls_back_to_octet_stream() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scene.raw-dump");
    std::fs::write(&path, b"??").expect("write");
    assert_eq!(pick(&path).expect("pick").media_type, "application/octet-stream");
}

#[test]
fn pick_rejects_missing_and_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(pick(&dir.path().join("nope.png")), Err(CliError::ReadFile { .. })));
    assert!(matches!(pick(dir.path()), Err(CliError::ReadFile { .. })));
}

#[test]
fn local_preview_points_at_absolute_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("after.png");
    std::fs::write(&path, b"png").expect("write");

    let file = pick(&path).expect("pick");
    let preview = LocalPreview::for_file(&file).expect("preview");
    assert!(preview.url().starts_with("file://"));
    assert!(preview.url().ends_with("after.png"));
}
