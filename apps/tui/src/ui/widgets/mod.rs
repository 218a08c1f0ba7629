pub mod controls;
pub mod map_canvas;
pub mod popup;
pub mod tables;
