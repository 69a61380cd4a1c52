//! Inline CSS shared by the dashboard views.

pub const CONTAINER_STYLE: &str = "max-width: 1200px; margin: 0 auto; padding: 20px;";
pub const TABLE_STYLE: &str =
    "width: 100%; border-collapse: collapse; margin: 20px 0; box-shadow: 0 0 20px rgba(0,0,0,0.1);";
pub const TH_STYLE: &str =
    "background-color: #f8f9fa; padding: 12px; text-align: left; border-bottom: 1px solid #ddd;";
pub const TD_STYLE: &str = "padding: 12px; border-bottom: 1px solid #ddd;";
pub const TITLE_STYLE: &str = "color: #333; margin-bottom: 30px;";
pub const SECTION_TITLE_STYLE: &str = "color: #444; margin-bottom: 20px;";
pub const NOTICE_STYLE: &str = "padding: 20px; text-align: center;";
pub const ERROR_NOTICE_STYLE: &str = "color: red; padding: 20px; text-align: center;";

/// Text color of a status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Green,
    Orange,
    Red,
}

impl StatusColor {
    pub const fn css(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}
