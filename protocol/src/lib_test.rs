use super::*;
use serde_json::json;

// =============================================================
// StreamMessage
// =============================================================

#[test]
fn stream_message_recognizes_reserved_payloads() {
    assert_eq!(StreamMessage::parse("."), StreamMessage::Idle);
    assert_eq!(StreamMessage::parse("__ANALYSIS_DONE__"), StreamMessage::Done);
}

#[test]
fn stream_message_does_not_trim_reserved_payloads() {
    assert_eq!(StreamMessage::parse(" ."), StreamMessage::Line(" .".to_owned()));
    assert_eq!(StreamMessage::parse(".."), StreamMessage::Line("..".to_owned()));
    assert_eq!(
        StreamMessage::parse("__ANALYSIS_DONE__ "),
        StreamMessage::Line("__ANALYSIS_DONE__ ".to_owned())
    );
}

#[test]
fn stream_message_passes_free_text_through() {
    assert_eq!(
        StreamMessage::parse("Loading model"),
        StreamMessage::Line("Loading model".to_owned())
    );
}

// =============================================================
// DetectResponse
// =============================================================

#[test]
fn detect_response_parses_success_body() {
    let body = json!({
        "status": "success",
        "before_preview": "AAAA",
        "after_preview": "BBBB",
        "stats": { "pixel_changed_pixels": 4213, "texture_confirmed_pixels": 1200 },
        "geojson": { "type": "FeatureCollection", "features": [] }
    });
    let response = DetectResponse::from_slice(body.to_string().as_bytes()).expect("parse");
    assert_eq!(response.status, Some(json!("success")));
    assert_eq!(response.error_message(), None);
    assert_eq!(response.before_image(), Some(PreviewImage::new("AAAA")));
    assert_eq!(response.after_image(), Some(PreviewImage::new("BBBB")));
    assert_eq!(
        response.stats,
        Some(ChangeStats { pixel_changed_pixels: 4213, texture_confirmed_pixels: 1200 })
    );
    assert_eq!(
        response.geojson_document().and_then(|doc| doc.get("type")),
        Some(&json!("FeatureCollection"))
    );
}

#[test]
fn detect_response_parses_error_body() {
    let response =
        DetectResponse::from_slice(br#"{"error":"Image sizes do not match"}"#).expect("parse");
    assert_eq!(response.error_message(), Some("Image sizes do not match"));
    assert!(response.before_image().is_none());
    assert!(response.geojson_document().is_none());
}

#[test]
fn detect_response_treats_empty_and_null_fields_as_absent() {
    let response = DetectResponse::from_slice(
        br#"{"error":"","before_preview":"","after_preview":null,"geojson":null}"#,
    )
    .expect("parse");
    assert_eq!(response.error_message(), None);
    assert!(response.before_image().is_none());
    assert!(response.after_image().is_none());
    assert!(response.geojson_document().is_none());
}

#[test]
fn detect_response_ignores_falsy_geojson_scalars() {
    for falsy in [json!(false), json!(0), json!("")] {
        let response = DetectResponse { geojson: Some(falsy), ..DetectResponse::default() };
        assert!(response.geojson_document().is_none());
    }
    let response = DetectResponse { geojson: Some(json!([])), ..DetectResponse::default() };
    assert!(response.geojson_document().is_some());
}

#[test]
fn detect_response_accepts_empty_object() {
    let response = DetectResponse::from_slice(b"{}").expect("parse");
    assert_eq!(response, DetectResponse::default());
}

#[test]
fn detect_response_rejects_non_json_body() {
    let err = DetectResponse::from_slice(b"<html>Internal Server Error</html>")
        .expect_err("html is not json");
    assert!(matches!(err, ProtocolError::Json(_)));
}

#[test]
fn detect_response_tolerates_odd_status_and_stats() {
    let body = json!({
        "status": 200,
        "after_preview": "QQ==",
        "stats": { "pixel_changed_pixels": 12.5 },
        "geojson": { "type": "FeatureCollection", "features": [] }
    });
    let response = DetectResponse::from_slice(body.to_string().as_bytes()).expect("parse");
    assert_eq!(response.status, Some(json!(200)));
    assert_eq!(response.stats, None);
    assert_eq!(response.after_image(), Some(PreviewImage::new("QQ==")));
    assert!(response.geojson_document().is_some());
}

#[test]
fn detect_response_reads_null_stats_as_absent() {
    let response = DetectResponse::from_slice(br#"{"stats":null}"#).expect("parse");
    assert_eq!(response.stats, None);
}

// =============================================================
// PreviewImage
// =============================================================

#[test]
fn preview_image_builds_png_data_url() {
    assert_eq!(PreviewImage::new("iVBOR").data_url(), "data:image/png;base64,iVBOR");
}

#[test]
fn preview_image_decodes_standard_base64() {
    let image = PreviewImage::new("iVBORw0KGgo=");
    assert_eq!(image.decode().expect("decode"), b"\x89PNG\r\n\x1a\n".to_vec());
}

#[test]
fn preview_image_rejects_garbage() {
    let err = PreviewImage::new("not base64!").decode().expect_err("garbage");
    assert!(matches!(err, ProtocolError::Base64(_)));
}

// =============================================================
// Download
// =============================================================

#[test]
fn geojson_download_is_pretty_printed_with_two_spaces() {
    let download = Download::geojson(pretty_json(&json!({ "type": "FeatureCollection" })));
    assert_eq!(download.file_name, "change_output.geojson");
    assert_eq!(download.mime, "application/json");
    assert_eq!(download.body, "{\n  \"type\": \"FeatureCollection\"\n}");
}

#[test]
fn pretty_json_keeps_backend_key_order() {
    let document: Value = serde_json::from_str(r#"{"type":"FeatureCollection","features":[],"crs":null}"#).unwrap();
    assert_eq!(
        pretty_json(&document),
        "{\n  \"type\": \"FeatureCollection\",\n  \"features\": [],\n  \"crs\": null\n}"
    );
}
