//! Multipart submission to `/detect-change`.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` diagnostics. The caller hands them to
//! `Session::on_transport_failure`, which shows the generic message and keeps
//! the detail out of the log panel.

#[cfg(feature = "csr")]
use protocol::{AFTER_FIELD, BEFORE_FIELD, DETECT_CHANGE_PATH, DetectResponse};

/// Upload both images and parse the response body, whatever the status.
#[cfg(feature = "csr")]
pub async fn submit(before: &web_sys::File, after: &web_sys::File) -> Result<DetectResponse, String> {
    let form = web_sys::FormData::new().map_err(js_message)?;
    form.append_with_blob_and_filename(BEFORE_FIELD, before, &before.name())
        .map_err(js_message)?;
    form.append_with_blob_and_filename(AFTER_FIELD, after, &after.name())
        .map_err(js_message)?;

    let response = gloo_net::http::Request::post(DETECT_CHANGE_PATH)
        .body(form)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    let status = response.status();
    let body = response.binary().await.map_err(|err| err.to_string())?;
    log::debug!("detect-change responded {status} with {} bytes", body.len());
    DetectResponse::from_slice(&body).map_err(|err| err.to_string())
}

#[cfg(feature = "csr")]
fn js_message(err: wasm_bindgen::JsValue) -> String {
    format!("{err:?}")
}
