//! `blob:` URLs that are revoked when dropped.

#[cfg(test)]
#[path = "object_url_test.rs"]
mod object_url_test;

use session::PreviewHandle;

/// Owned object URL. Dropping it releases the blob reference.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Create a URL for `blob`. Returns `None` if the browser refuses.
    #[cfg(feature = "csr")]
    pub fn from_blob(blob: &web_sys::Blob) -> Option<Self> {
        match web_sys::Url::create_object_url_with_blob(blob) {
            Ok(url) => Some(Self { url }),
            Err(err) => {
                log::warn!("object URL creation failed: {err:?}");
                None
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn detached(url: &str) -> Self {
        Self { url: url.to_owned() }
    }
}

impl PreviewHandle for ObjectUrl {
    fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        #[cfg(feature = "csr")]
        if let Err(err) = web_sys::Url::revoke_object_url(&self.url) {
            log::debug!("object URL revoke failed: {err:?}");
        }
    }
}
