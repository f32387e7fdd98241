use js_sys::wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement};

use crate::error::Error;

pub(crate) fn document() -> Result<Document, Error> {
    web_sys::window()
        .ok_or(Error::window_not_found())
        .and_then(|w| w.document().ok_or(Error::document_not_found()))
}

pub(crate) fn get_canvas_by_id(canvas_id: &str) -> Result<HtmlCanvasElement, Error> {
    let document = document()?;
    document
        .query_selector(canvas_id)
        .map_err(|_| Error::canvas_not_found())?
        .ok_or(Error::canvas_not_found())?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| Error::canvas_not_found())
}

pub(crate) fn get_webgl2_context(
    canvas: &HtmlCanvasElement,
) -> Result<web_sys::WebGl2RenderingContext, Error> {
    canvas
        .get_context("webgl2")
        .map_err(|_| Error::canvas_context_failed())?
        .ok_or(Error::webgl_context_failed())?
        .dyn_into::<web_sys::WebGl2RenderingContext>()
        .map_err(|_| Error::webgl_context_failed())
}

/// Creates a canvas of the given size and appends it to the document body.
pub(crate) fn append_canvas(width: u32, height: u32) -> Result<HtmlCanvasElement, Error> {
    let canvas = create_element::<HtmlCanvasElement>("canvas")?;
    canvas.set_width(width);
    canvas.set_height(height);
    append_to_body(&canvas)?;

    Ok(canvas)
}

/// Creates a button labeled `label` and appends it to the document body.
pub(crate) fn append_button(label: &str) -> Result<HtmlButtonElement, Error> {
    let button = create_element::<HtmlButtonElement>("button")?;
    button.set_inner_text(label);
    append_to_body(&button)?;

    Ok(button)
}

fn create_element<T: JsCast>(tag: &str) -> Result<T, Error> {
    document()?
        .create_element(tag)
        .map_err(|_| Error::element_creation_failed(tag))?
        .dyn_into::<T>()
        .map_err(|_| Error::element_creation_failed(tag))
}

fn append_to_body(node: &web_sys::Node) -> Result<(), Error> {
    document()?
        .body()
        .ok_or(Error::body_not_found())?
        .append_child(node)
        .map(|_| ())
        .map_err(|_| Error::body_not_found())
}
