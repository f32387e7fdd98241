use compact_str::CompactString;

use crate::{
    controls::{Axis, RotationControls},
    gl::{GlDevice, PyramidRenderer, RenderContext, SceneConfig},
    Error,
};

/// The rotatable pyramid: a [`PyramidRenderer`] driven by [`RotationControls`].
///
/// The scene owns the rotation angles; the renderer only ever sees them as
/// arguments to [`PyramidRenderer::draw_scene`]. Every [`Scene::rotate`] call
/// updates one angle and synchronously draws a full frame.
///
/// # Examples
///
/// ```rust,no_run
/// use pyramid_renderer::{Axis, Scene};
///
/// let mut scene = Scene::builder("#canvas").rotation_step(15.0).build()?;
/// scene.render_frame()?;
///
/// // one click on "Rotate X"
/// scene.rotate(Axis::X)?;
/// # Ok::<(), pyramid_renderer::Error>(())
/// ```
#[derive(Debug)]
pub struct Scene<D: GlDevice = RenderContext> {
    renderer: PyramidRenderer<D>,
    controls: RotationControls,
}

impl Scene<RenderContext> {
    /// Creates a new scene builder with the specified canvas source.
    ///
    /// # Parameters
    /// * `canvas` - Canvas identifier (CSS selector) or `HtmlCanvasElement`
    #[allow(private_bounds)]
    pub fn builder(canvas: impl Into<CanvasSource>) -> SceneBuilder {
        SceneBuilder::new(canvas.into())
    }

    /// Returns the canvas the scene is rendered to.
    pub fn canvas(&self) -> &web_sys::HtmlCanvasElement {
        self.renderer.device().canvas()
    }
}

impl<D: GlDevice> Scene<D> {
    pub fn new(renderer: PyramidRenderer<D>, controls: RotationControls) -> Self {
        Self { renderer, controls }
    }

    /// Advances the rotation about `axis` by one step and redraws.
    ///
    /// The angle is updated even if drawing fails.
    pub fn rotate(&mut self, axis: Axis) -> Result<[f32; 3], Error> {
        let angles = self.controls.rotate(axis);
        self.render_frame()?;
        Ok(angles)
    }

    /// Draws the pyramid at the current angles.
    pub fn render_frame(&self) -> Result<(), Error> {
        let [x, y, z] = self.controls.angles();
        self.renderer.draw_scene(x, y, z)
    }

    /// Current `[x, y, z]` rotation in degrees.
    pub fn angles(&self) -> [f32; 3] {
        self.controls.angles()
    }

    pub fn renderer(&self) -> &PyramidRenderer<D> {
        &self.renderer
    }
}

/// Canvas source for scene initialization.
enum CanvasSource {
    /// CSS selector string for canvas lookup (e.g., "#pyramid", "canvas").
    Id(CompactString),
    /// Direct reference to an existing canvas element.
    Element(web_sys::HtmlCanvasElement),
}

/// Builder for configuring and creating a [`Scene`].
pub struct SceneBuilder {
    canvas: CanvasSource,
    config: SceneConfig,
    rotation_step: f32,
}

impl SceneBuilder {
    fn new(canvas: CanvasSource) -> Self {
        SceneBuilder {
            canvas,
            config: SceneConfig::default(),
            rotation_step: RotationControls::DEFAULT_STEP,
        }
    }

    /// Sets camera and clear parameters; see [`SceneConfig`] for defaults.
    pub fn config(mut self, config: SceneConfig) -> Self {
        self.config = config;
        self
    }

    /// Degrees added to an axis per rotate action. Defaults to 10.
    pub fn rotation_step(mut self, degrees: f32) -> Self {
        self.rotation_step = degrees;
        self
    }

    /// Acquires the WebGL2 context and creates the renderer.
    ///
    /// A scene whose shaders failed to build is still returned; drawing it
    /// fails with `Error::NotInitialized`.
    ///
    /// # Errors
    /// * `Error::Initialization` - canvas element not found
    /// * `Error::ContextUnavailable` - WebGL2 not supported
    pub fn build(self) -> Result<Scene, Error> {
        let context = match self.canvas {
            CanvasSource::Id(id) => RenderContext::create(&id)?,
            CanvasSource::Element(element) => RenderContext::create_with_canvas(element)?,
        };

        let renderer = PyramidRenderer::with_config(context, self.config);
        Ok(Scene::new(renderer, RotationControls::new(self.rotation_step)))
    }
}

impl From<&str> for CanvasSource {
    fn from(id: &str) -> Self {
        CanvasSource::Id(id.into())
    }
}

impl From<web_sys::HtmlCanvasElement> for CanvasSource {
    fn from(element: web_sys::HtmlCanvasElement) -> Self {
        CanvasSource::Element(element)
    }
}

impl<'a> From<&'a web_sys::HtmlCanvasElement> for CanvasSource {
    fn from(value: &'a web_sys::HtmlCanvasElement) -> Self {
        value.clone().into()
    }
}
