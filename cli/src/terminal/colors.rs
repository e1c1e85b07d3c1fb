use colored::Color;

pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const PLACEHOLDER: Color = Color::BrightBlack;
pub const EMPTY: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;
