use web_sys::wasm_bindgen::JsCast;

/// The box metrics an at-bottom decision is made from.
///
/// Browsers disagree on which of the body/root height properties reflects the
/// real document height, so all five candidates are kept and the decision
/// takes their maximum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Height of the visible viewport.
    pub viewport_height: f64,
    /// Vertical scroll offset of the viewport from the document top.
    pub scroll_offset: f64,
    /// `document.body.scrollHeight`.
    pub body_scroll_height: f64,
    /// `document.body.offsetHeight`.
    pub body_offset_height: f64,
    /// `document.documentElement.clientHeight`.
    pub root_client_height: f64,
    /// `document.documentElement.scrollHeight`.
    pub root_scroll_height: f64,
    /// `document.documentElement.offsetHeight`.
    pub root_offset_height: f64,
}

impl ScrollMetrics {
    /// Read the live metrics from the browser window.
    ///
    /// `None` when any of window/document/body is missing, e.g. before the
    /// document has a body or outside a browser.
    pub fn capture() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let body = document.body()?;
        let root = document.document_element()?;

        let viewport_height = window.inner_height().ok().and_then(|v| v.as_f64())?;
        let scroll_offset = window.page_y_offset().ok()?;
        let root_offset_height = root
            .dyn_ref::<web_sys::HtmlElement>()
            .map(|el| f64::from(el.offset_height()))
            .unwrap_or_default();

        Some(Self {
            viewport_height,
            scroll_offset,
            body_scroll_height: f64::from(body.scroll_height()),
            body_offset_height: f64::from(body.offset_height()),
            root_client_height: f64::from(root.client_height()),
            root_scroll_height: f64::from(root.scroll_height()),
            root_offset_height,
        })
    }

    /// The document height: the maximum of the five candidate measurements.
    pub fn document_height(&self) -> f64 {
        [
            self.body_scroll_height,
            self.body_offset_height,
            self.root_client_height,
            self.root_scroll_height,
            self.root_offset_height,
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }

    /// Whether the bottom edge of the viewport has reached the bottom edge of
    /// the document.
    pub fn at_bottom(&self) -> bool {
        self.viewport_height + self.scroll_offset >= self.document_height()
    }
}
