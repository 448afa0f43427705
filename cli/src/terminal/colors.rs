use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightMagenta;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const IPV4_ADDR: Color = Color::BrightGreen;
pub const IPV6_ADDR: Color = Color::BrightBlue;
pub const REJECTED: Color = Color::BrightRed;
