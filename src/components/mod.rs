pub mod app;
pub mod build_menu;
pub mod building_icon;
pub mod placement_banner;

pub use app::App;
