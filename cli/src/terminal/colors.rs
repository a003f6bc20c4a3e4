use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const SERVICE: Color = Color::BrightYellow;
pub const UNKNOWN: Color = Color::BrightBlack;
pub const BANNER: Color = Color::Cyan;
pub const IPV4_ADDR: Color = Color::BrightBlue;
pub const IPV6_ADDR: Color = Color::BrightMagenta;
