use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MAC_ADDR: Color = Color::Magenta;
pub const IPV4_ADDR: Color = Color::Cyan;
pub const ACCOUNT: Color = Color::BrightBlue;
pub const INVALID: Color = Color::Red;
