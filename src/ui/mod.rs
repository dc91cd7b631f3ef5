pub mod dashboard;
pub mod views;
pub mod widgets;

pub use dashboard::render_dashboard;
pub use widgets::RenderOptions;
