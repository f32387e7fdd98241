use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{closure::Closure, JsCast};

use crate::{js, Axis, Error, Scene};

type ClickListener = Closure<dyn FnMut(web_sys::MouseEvent)>;

/// A canvas with "Rotate X", "Rotate Y" and "Rotate Z" buttons underneath.
///
/// Each click advances one axis and redraws synchronously. Listeners are
/// removed when the app is dropped; keep it alive for as long as the buttons
/// should respond.
pub struct PyramidApp {
    scene: Rc<RefCell<Scene>>,
    buttons: Vec<(web_sys::HtmlButtonElement, ClickListener)>,
}

impl PyramidApp {
    /// Appends a `width`x`height` canvas and the three rotate buttons to the
    /// document body, then draws the first frame.
    pub fn mount(width: u32, height: u32) -> Result<Self, Error> {
        let canvas = js::append_canvas(width, height)?;

        let mut buttons = Vec::with_capacity(Axis::ALL.len());
        for axis in Axis::ALL {
            buttons.push(js::append_button(axis.label())?);
        }

        let scene = Scene::builder(canvas).build()?;
        scene.render_frame()?;

        Self::attach(Rc::new(RefCell::new(scene)), buttons)
    }

    fn attach(
        scene: Rc<RefCell<Scene>>,
        buttons: Vec<web_sys::HtmlButtonElement>,
    ) -> Result<Self, Error> {
        let mut listeners = Vec::with_capacity(buttons.len());
        for (axis, button) in Axis::ALL.into_iter().zip(buttons) {
            let on_click = make_callback(axis, scene.clone());
            button
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .map_err(|_| Error::listener_failed("click"))?;

            listeners.push((button, on_click));
        }

        Ok(Self { scene, buttons: listeners })
    }

    /// Returns the scene driven by the buttons.
    pub fn scene(&self) -> Rc<RefCell<Scene>> {
        self.scene.clone()
    }

    /// Removes the click listeners.
    pub fn cleanup(&self) {
        for (button, on_click) in &self.buttons {
            let _ = button
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
}

impl Drop for PyramidApp {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn make_callback(axis: Axis, scene: Rc<RefCell<Scene>>) -> ClickListener {
    Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
        match scene.borrow_mut().rotate(axis) {
            Ok([x, y, z]) => log::debug!("rotation: x={x} y={y} z={z}"),
            Err(e) => log::error!("failed drawing pyramid: {e}"),
        }
    }) as Box<dyn FnMut(_)>)
}
