//! Host document scripts.

use dain_site_core::{Result, SiteError};
use dioxus::prelude::*;

/// Smooth-scrolls the page back to the top and reports completion.
pub const SCROLL_TO_TOP_JS: &str = r#"
window.scrollTo({ top: 0, behavior: 'smooth' });
return true;
"#;

/// Smoothly scroll the host document to its top edge.
pub async fn scroll_to_top() -> Result<()> {
    let done: bool = document::eval(SCROLL_TO_TOP_JS)
        .join()
        .await
        .map_err(|e| SiteError::Script(format!("{e:?}")))?;
    if done {
        Ok(())
    } else {
        Err(SiteError::Script("scroll did not run".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_scrolls_smoothly_to_origin() {
        assert!(SCROLL_TO_TOP_JS.contains("top: 0"));
        assert!(SCROLL_TO_TOP_JS.contains("behavior: 'smooth'"));
        assert!(SCROLL_TO_TOP_JS.trim_end().ends_with("return true;"));
    }
}
