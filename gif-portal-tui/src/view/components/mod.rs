pub mod form;
pub mod gif_grid;
pub mod statusbar;
