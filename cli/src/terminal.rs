pub mod colors;
pub mod input;
pub mod logging;
pub mod panel;
pub mod print;
pub mod spinner;
