//! Browser bindings: geometry read from rendered SVG elements.
//!
//! Only compiled with the `web` feature. The host creates one element per
//! spawned choice with the id from [`choice_dom_id`]; `DomGeometry` then
//! measures choices by their live client rect.

use web_sys::{Document, Element};

use crate::choice::{Choice, ChoiceId};
use crate::consts::{CHOICE_ID_PREFIX, LABEL_DATA_ATTRIBUTE, SLOT_VALUE_ATTRIBUTE};
use crate::config::DragnetConfig;
use crate::engine::Coordinator;
use crate::error::Result;
use crate::geom::{GeometryProvider, LabelGeometry, Rect};
use crate::markup::{AnswerMarkup, ScannedLabel};

/// DOM id of the element rendering `id`.
#[must_use]
pub fn choice_dom_id(id: ChoiceId) -> String {
    format!("{CHOICE_ID_PREFIX}{id}")
}

/// Client rect of `element`.
#[must_use]
pub fn element_region(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::from_edges(r.left(), r.top(), r.right(), r.bottom())
}

/// Expected value and region of a pre-tagged slot element, or `None` if the
/// element carries no answer attribute.
#[must_use]
pub fn tagged_slot(element: &Element) -> Option<(String, Rect)> {
    let value = element
        .get_attribute(SLOT_VALUE_ATTRIBUTE)
        .or_else(|| element.get_attribute(LABEL_DATA_ATTRIBUTE))?;
    Some((value, element_region(element)))
}

/// Write a scanned label back into its element: rewritten text, and the
/// answer recorded under the label attribute.
pub fn apply_markup(element: &Element, markup: &AnswerMarkup) {
    element.set_text_content(Some(&markup.rewritten));
    if let Err(e) = element.set_attribute(LABEL_DATA_ATTRIBUTE, &markup.answer) {
        tracing::warn!(error = ?e, "failed to record answer attribute");
    }
}

/// Scan `labels` for embedded answers, rewrite each match in the page and
/// build slots over the rewritten elements.
///
/// # Errors
///
/// [`crate::DragnetError::InvalidAnswerPattern`] if the configured pattern is
/// unusable.
pub fn scan_elements(config: DragnetConfig, labels: &[Element]) -> Result<(Coordinator, Vec<ScannedLabel>)> {
    let texts: Vec<String> = labels.iter().map(|e| e.text_content().unwrap_or_default()).collect();
    Coordinator::from_markup(config, texts.iter().map(String::as_str), |label| {
        let element = &labels[label.index];
        apply_markup(element, &label.markup);
        element_region(element)
    })
}

/// Measures choices through `getBoundingClientRect`.
///
/// Choices whose element is missing fall back to fixed label boxes.
pub struct DomGeometry {
    document: Document,
    fallback: LabelGeometry,
}

impl DomGeometry {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document, fallback: LabelGeometry::default() }
    }
}

impl GeometryProvider for DomGeometry {
    fn choice_bounds(&self, choice: &Choice) -> Rect {
        match self.document.get_element_by_id(&choice_dom_id(choice.id())) {
            Some(element) => element_region(&element),
            None => {
                tracing::debug!(id = %choice.id(), "choice element not found; using label box");
                self.fallback.choice_bounds(choice)
            }
        }
    }
}
