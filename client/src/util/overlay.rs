//! Blob URL lifecycle for uploaded background files.
//!
//! The overlay is the only owned external resource in the app. Creation and
//! revocation are browser-only; native builds no-op so state logic tests do
//! not need a DOM.

use board::model::OverlaySource;

/// Mint a revocable blob URL for an uploaded file.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn create_overlay(file: &web_sys::File) -> Option<OverlaySource> {
    match web_sys::Url::create_object_url_with_blob(file) {
        Ok(url) => Some(OverlaySource { url, mime: file.type_() }),
        Err(err) => {
            log::warn!("overlay URL creation failed: {err:?}");
            None
        }
    }
}

/// Release a replaced or cleared overlay's blob URL.
pub fn revoke_overlay(source: &OverlaySource) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = web_sys::Url::revoke_object_url(&source.url) {
            log::warn!("overlay URL revocation failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = source;
    }
}
