mod app;
mod render;

pub use app::run;
