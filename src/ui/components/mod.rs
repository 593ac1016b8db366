pub mod countdown_display;
pub mod dashboard;
pub mod dot_grid;
pub mod legend;
pub mod numerals;
