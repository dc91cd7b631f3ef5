pub mod bar;
pub mod panel;

pub use bar::{gantt_track, meter};
pub use panel::{Panel, RenderOptions, NO_DATA};
