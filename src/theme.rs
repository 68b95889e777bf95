use ratatui::style::Color;

// Centralized desktop colors. Kept as small helpers so components never
// hard-code a palette.

pub const WALLPAPER_RGB: (u8, u8, u8) = (0, 128, 128);
pub const BLUE_SCREEN_RGB: (u8, u8, u8) = (0, 0, 170);

// Wallpaper
pub fn wallpaper_bg() -> Color {
    let (r, g, b) = WALLPAPER_RGB;
    Color::Rgb(r, g, b)
}
pub fn wallpaper_fg() -> Color {
    Color::Cyan
}

// Window chrome
pub fn titlebar_focused_bg() -> Color {
    Color::Blue
}
pub fn titlebar_unfocused_bg() -> Color {
    Color::DarkGray
}
pub fn titlebar_fg() -> Color {
    Color::White
}
pub fn border() -> Color {
    Color::Gray
}
pub fn border_focused() -> Color {
    Color::White
}

// Window body
pub fn body_bg() -> Color {
    Color::Black
}
pub fn body_fg() -> Color {
    Color::Gray
}

// Error view
pub fn blue_screen_bg() -> Color {
    let (r, g, b) = BLUE_SCREEN_RGB;
    Color::Rgb(r, g, b)
}
pub fn blue_screen_fg() -> Color {
    Color::White
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_and_unfocused_titlebars_differ() {
        assert_ne!(titlebar_focused_bg(), titlebar_unfocused_bg());
    }

    #[test]
    fn rgb_helpers_match_constants() {
        assert_eq!(wallpaper_bg(), Color::Rgb(0, 128, 128));
        assert_eq!(blue_screen_bg(), Color::Rgb(0, 0, 170));
    }
}
