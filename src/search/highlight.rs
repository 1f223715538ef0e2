use crate::types::config::HighlightConfig;
use regex::{Captures, RegexBuilder};
use tracing::debug;

/// Wraps every case-insensitive occurrence of `term` in the default
/// `<span class="highlight">` marker.
pub fn highlight(text: &str, term: &str) -> String {
    highlight_with(text, term, &HighlightConfig::default())
}

/// Same as [`highlight`] with a caller-supplied marker. `term` is matched
/// literally; regex metacharacters in it carry no meaning.
pub fn highlight_with(text: &str, term: &str, marker: &HighlightConfig) -> String {
    if term.is_empty() {
        return text.to_string();
    }

    let regex = match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => regex,
        Err(e) => {
            debug!(error = %e, "highlight pattern rejected, leaving text unmarked");
            return text.to_string();
        }
    };

    regex
        .replace_all(text, |caps: &Captures| {
            format!("{}{}{}", marker.open, &caps[0], marker.close)
        })
        .into_owned()
}
