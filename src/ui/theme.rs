use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x19, 0x76, 0xd2);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const TABLE_HEADER_BG: Color = Color::Rgb(0x02, 0x15, 0x26);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
