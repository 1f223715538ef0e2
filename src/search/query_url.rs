use crate::error::Result;
use url::Url;

pub const QUERY_PARAM: &str = "q";

/// Extracts the pre-populated query from a search page URL. Relative links
/// such as `/search?q=chatgpt` or `?q=chatgpt` are accepted. An absent or
/// empty `q` yields `None`.
pub fn query_from_url(raw: &str) -> Result<Option<String>> {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse("http://localhost/")?.join(raw)?
        }
        Err(e) => return Err(e.into()),
    };

    Ok(url
        .query_pairs()
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty()))
}
