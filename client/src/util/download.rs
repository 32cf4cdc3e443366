//! Save generated artifacts without a network round trip.

use protocol::Download;

/// Trigger a browser download of `download`.
#[cfg(feature = "csr")]
pub fn save(download: &Download) {
    if let Err(err) = try_save(download) {
        log::warn!("download of {} failed: {err:?}", download.file_name);
    }
}

#[cfg(not(feature = "csr"))]
pub fn save(download: &Download) {
    let _ = download;
}

#[cfg(feature = "csr")]
fn try_save(download: &Download) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    use crate::util::object_url::ObjectUrl;

    let parts = js_sys::Array::of1(&JsValue::from_str(&download.body));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(download.mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = ObjectUrl::from_blob(&blob).ok_or_else(|| JsValue::from_str("object URL unavailable"))?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(session::PreviewHandle::url(&url));
    anchor.set_download(download.file_name);
    anchor.click();
    Ok(())
}
