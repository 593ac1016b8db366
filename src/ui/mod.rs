pub mod components;
pub mod labels;
pub mod layout;
pub mod pulse;
pub mod theme;
