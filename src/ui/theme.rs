use crate::config::Theme;
use crate::models::RatingBand;
use crate::ui::color_parser::parse_color;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct ThemeTokens {
    pub ui_border: Color,
    pub ui_accent: Color,
    pub ui_muted: Color,
    pub ui_today: Color,
    pub ui_selection_bg: Color,
    pub ui_toast: Color,
    pub content_chip: Color,
    pub content_category: Color,
    pub rating_high: Color,
    pub rating_mid: Color,
    pub rating_low: Color,
}

impl ThemeTokens {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            ui_border: parse_color(&theme.border),
            ui_accent: parse_color(&theme.accent),
            ui_muted: parse_color(&theme.muted),
            ui_today: parse_color(&theme.today),
            ui_selection_bg: parse_color(&theme.selection_bg),
            ui_toast: parse_color(&theme.toast),
            content_chip: parse_color(&theme.chip),
            content_category: parse_color(&theme.category),
            rating_high: parse_color(&theme.rating_high),
            rating_mid: parse_color(&theme.rating_mid),
            rating_low: parse_color(&theme.rating_low),
        }
    }

    pub fn rating(&self, band: RatingBand) -> Color {
        match band {
            RatingBand::High => self.rating_high,
            RatingBand::Mid => self.rating_mid,
            RatingBand::Low => self.rating_low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_maps_rating_bands() {
        let tokens = ThemeTokens::from_theme(&Theme::default());
        assert_eq!(tokens.rating(RatingBand::High), Color::Green);
        assert_eq!(tokens.rating(RatingBand::Mid), Color::Yellow);
        assert_eq!(tokens.rating(RatingBand::Low), Color::Red);
        assert_eq!(tokens.ui_selection_bg, Color::Rgb(60, 60, 60));
    }
}
