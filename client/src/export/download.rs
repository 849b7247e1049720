//! Client-side file download via a synthetic anchor click.

#[cfg(feature = "hydrate")]
use board::export::ExportError;

/// Hand a data URL to the browser's download machinery under `file_name`.
///
/// # Errors
///
/// Returns [`ExportError::Download`] if the anchor cannot be created.
#[cfg(feature = "hydrate")]
pub fn trigger_png_download(file_name: &str, data_url: &str) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Download("no document available".to_owned()))?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|err| ExportError::Download(format!("{err:?}")))?
        .dyn_into()
        .map_err(|_| ExportError::Download("created element is not an anchor".to_owned()))?;
    anchor.set_download(file_name);
    anchor.set_href(data_url);
    anchor.click();
    Ok(())
}
