use crate::core::form::FormState;
use crate::error::ShareError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use url::Url;

/// Fragment parameter carrying the encoded form.
pub const FRAGMENT_PARAM: &str = "simple";

/// JSON, then URL-safe base64. Safe to drop into a fragment unescaped.
pub fn encode(state: &FormState) -> String {
    // A struct of plain strings always serializes.
    let json = serde_json::to_vec(state).expect("FormState serializes to JSON");
    URL_SAFE_NO_PAD.encode(json)
}

pub fn decode(token: &str) -> Result<FormState, ShareError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.trim())
        .map_err(|e| ShareError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ShareError::Payload(e.to_string()))
}

/// `base` without query or fragment, plus `#simple=<token>`.
pub fn share_link(base: &str, state: &FormState) -> Result<Url, ShareError> {
    let mut url = Url::parse(base).map_err(|e| ShareError::BaseUrl(format!("{base}: {e}")))?;
    url.set_query(None);
    url.set_fragment(Some(&format!("{FRAGMENT_PARAM}={}", encode(state))));
    Ok(url)
}

/// Accepts a full link, a `#simple=...` fragment, or `simple=...`.
pub fn state_from_link(link: &str) -> Result<FormState, ShareError> {
    let link = link.trim();
    let fragment = match Url::parse(link) {
        Ok(url) => url.fragment().map(str::to_owned),
        Err(_) => Some(link.trim_start_matches('#').to_owned()),
    }
    .ok_or(ShareError::MissingFragment)?;

    let token = fragment
        .split('&')
        .find_map(|pair| pair.strip_prefix(FRAGMENT_PARAM)?.strip_prefix('='))
        .ok_or(ShareError::MissingFragment)?;
    decode(token)
}
