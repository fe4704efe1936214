// Accessibility helpers

/// Critical focus-ring and screen-reader CSS, injected early.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #e855ff;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers.
///
/// Writes into the #game-status element if present, announcing phase
/// changes to assistive technology without disturbing the layout.
pub fn set_status(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("game-status"))
    {
        node.set_text_content(Some(msg));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = msg;
    }
}
