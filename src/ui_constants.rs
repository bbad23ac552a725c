// Layout numbers for the page and the card, kept in one place.

/// Card width in logical pixels
pub const CARD_WIDTH: f32 = 320.0;

/// UI spacing constants
pub mod spacing {
    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Large spacing (16px)
    pub const LARGE: f32 = 16.0;
}

/// Card-specific layout constants
pub mod card {
    use eframe::egui::Color32;

    /// Padding around the image region
    pub const IMAGE_PADDING: f32 = 16.0;

    /// Horizontal and bottom padding of the text region
    pub const BODY_PADDING: f32 = 24.0;

    /// Border radius of the panel
    pub const ROUNDING: f32 = 28.0;

    /// Image region is square
    pub const IMAGE_SIZE: f32 = 260.0;

    pub const IMAGE_ROUNDING: f32 = 16.0;

    pub const PILL_PAD_X: f32 = 12.0;
    pub const PILL_PAD_Y: f32 = 4.0;

    /// Discount and price pills (black at 20%)
    pub const STRONG_PILL_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 51);

    /// Badge and stock pills (black at 10%)
    pub const SOFT_PILL_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 26);

    pub const BUTTON_HEIGHT: f32 = 48.0;
    pub const BUTTON_FILL: Color32 = Color32::from_rgb(75, 51, 45);

    /// Drop shadow under the panel
    pub const SHADOW_BLUR: f32 = 24.0;
    pub const SHADOW_OFFSET_Y: f32 = 8.0;
}
