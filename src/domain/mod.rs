pub mod budget;
pub mod progress;
pub mod project;
pub mod resource;
pub mod risk;
pub mod task;
