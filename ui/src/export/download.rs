use super::ExportError;

/// Deliver `bytes` as a file named `filename`. Returns the written path on
/// native, `None` when the browser took over the download.
pub async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| ExportError::Delivery("failed to create blob".into()))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| ExportError::Delivery("unable to create download".into()))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ExportError::Delivery("document unavailable".into()))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| ExportError::Delivery("unable to create anchor".into()))?
            .dyn_into()
            .map_err(|_| ExportError::Delivery("anchor cast failed".into()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| ExportError::Delivery("missing body".into()))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let path = write_export(&desktop_export_dir()?, filename, &bytes)?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

/// Write `bytes` to `dir/filename`, creating `dir` if needed. An existing
/// export with the same name is replaced.
#[cfg(not(target_arch = "wasm32"))]
pub fn write_export(
    dir: &std::path::Path,
    filename: &str,
    bytes: &[u8],
) -> Result<std::path::PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("com", "AdGauge", "AdGauge")
        .ok_or_else(|| ExportError::Delivery("unable to determine export directory".into()))?;
    Ok(dirs.data_dir().join("exports"))
}
