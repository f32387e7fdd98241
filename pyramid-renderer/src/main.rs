use pyramid_renderer::{Error, PyramidApp};

const CANVAS_WIDTH: u32 = 640;
const CANVAS_HEIGHT: u32 = 480;

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Info).unwrap();

    run().unwrap()
}

fn run() -> Result<(), Error> {
    let app = PyramidApp::mount(CANVAS_WIDTH, CANVAS_HEIGHT)?;

    // the buttons stay wired for the lifetime of the page
    std::mem::forget(app);

    Ok(())
}
