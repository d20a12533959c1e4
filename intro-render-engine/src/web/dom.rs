use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("no element with id '{0}'")]
    MissingElement(String),
    #[error("element '{0}' is not an HTML element")]
    NotHtmlElement(String),
    #[error("failed to update style of '{id}': {reason}")]
    Style { id: String, reason: String },
}

/// Environment variable standing in for the location fragment on native builds.
#[cfg(not(target_arch = "wasm32"))]
pub const FRAGMENT_ENV_VAR: &str = "INTRO_LOCATION_FRAGMENT";

/// The page's location fragment including the leading `#`, if any.
#[cfg(target_arch = "wasm32")]
pub fn location_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    (!hash.is_empty()).then_some(hash)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn location_fragment() -> Option<String> {
    std::env::var(FRAGMENT_ENV_VAR).ok()
}

/// Make the element with `id` visible.
#[cfg(target_arch = "wasm32")]
pub fn reveal_element(id: &str) -> Result<(), DomError> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?;
    let element: web_sys::HtmlElement = element
        .dyn_into()
        .map_err(|_| DomError::NotHtmlElement(id.to_string()))?;

    element
        .style()
        .set_property("visibility", "visible")
        .map_err(|err| DomError::Style {
            id: id.to_string(),
            reason: format!("{:?}", err),
        })
}

/// There is no page outside the browser; the reveal is only logged by the caller.
#[cfg(not(target_arch = "wasm32"))]
pub fn reveal_element(_id: &str) -> Result<(), DomError> {
    Ok(())
}
