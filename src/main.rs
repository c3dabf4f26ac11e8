mod audio;
mod catalog;
mod components;
mod constants;
mod context;
mod model;
mod sizing;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("village builder starting");
    yew::Renderer::<App>::new().render();
}
