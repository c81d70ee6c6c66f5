//! Pointer-following radial highlight used by the card components.
//!
//! A card feeds its DOM measurements into [`PointerHighlight`] and renders the
//! inline styles it returns. Nothing in here touches the DOM, so the same
//! state drives server rendering, hydration and tests.

/// Radius of the radial gradient drawn under the pointer.
pub const HIGHLIGHT_RADIUS_PX: u32 = 600;
/// Point of the gradient where the glow has faded out completely.
pub const GLOW_FALLOFF_PERCENT: u32 = 40;

const CENTER: &str = "50%";
const RESTING_BORDER: &str = "var(--border)";

/// Bounding box of a card in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn is_degenerate(&self) -> bool {
        let finite = self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        !finite || self.width <= 0.0 || self.height <= 0.0
    }
}

/// Pointer location in pixels, relative to the card's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Translates client coordinates into card-local ones.
    ///
    /// Returns `None` when the card has no usable size or the coordinates are
    /// not finite; callers then fall back to the card centre. Results are
    /// clamped to the card so a stray event on the border never lands outside.
    pub fn within(client_x: f64, client_y: f64, bounds: CardBounds) -> Option<Self> {
        if bounds.is_degenerate() || !client_x.is_finite() || !client_y.is_finite() {
            return None;
        }
        Some(Self {
            x: (client_x - bounds.left).clamp(0.0, bounds.width),
            y: (client_y - bounds.top).clamp(0.0, bounds.height),
        })
    }

    /// The same position as a percentage of the card's width and height.
    /// Degenerate bounds give the centre.
    pub fn as_percent(&self, bounds: CardBounds) -> (f64, f64) {
        if bounds.is_degenerate() {
            return (50.0, 50.0);
        }
        (
            self.x / bounds.width * 100.0,
            self.y / bounds.height * 100.0,
        )
    }
}

/// Static colours for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightTheme {
    pub primary_color: &'static str,
    pub glow_color: &'static str,
    pub background_tint: &'static str,
}

pub const PALETTE: [HighlightTheme; 4] = [
    HighlightTheme {
        primary_color: "rgb(56 189 248)",
        glow_color: "rgb(56 189 248 / 0.25)",
        background_tint: "rgb(56 189 248 / 0.04)",
    },
    HighlightTheme {
        primary_color: "rgb(167 139 250)",
        glow_color: "rgb(167 139 250 / 0.25)",
        background_tint: "rgb(167 139 250 / 0.04)",
    },
    HighlightTheme {
        primary_color: "rgb(52 211 153)",
        glow_color: "rgb(52 211 153 / 0.25)",
        background_tint: "rgb(52 211 153 / 0.04)",
    },
    HighlightTheme {
        primary_color: "rgb(251 191 36)",
        glow_color: "rgb(251 191 36 / 0.25)",
        background_tint: "rgb(251 191 36 / 0.04)",
    },
];

impl HighlightTheme {
    /// Picks a palette entry so neighbouring cards get different colours.
    pub fn for_index(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }
}

impl Default for HighlightTheme {
    fn default() -> Self {
        PALETTE[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPhase {
    #[default]
    Resting,
    Hovered,
}

/// Per-card hover state.
///
/// `Resting` and `Hovered` switch on pointer enter/leave. Pointer moves only
/// record a position; the phase decides whether the layer is visible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerHighlight {
    phase: HoverPhase,
    position: Option<PointerPosition>,
}

impl PointerHighlight {
    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    pub fn is_hovered(&self) -> bool {
        self.phase == HoverPhase::Hovered
    }

    /// Last recorded position, `None` until the first usable move.
    pub fn position(&self) -> Option<PointerPosition> {
        self.position
    }

    /// Starts a hover. The position from any earlier hover is dropped, so
    /// the glow sits at the centre until the first move.
    pub fn pointer_enter(&mut self) {
        self.phase = HoverPhase::Hovered;
        self.position = None;
    }

    pub fn pointer_leave(&mut self) {
        self.phase = HoverPhase::Resting;
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, bounds: CardBounds) {
        self.position = PointerPosition::within(client_x, client_y, bounds);
    }

    /// Gradient centre as a CSS length pair.
    pub fn gradient_center(&self) -> (String, String) {
        match self.position {
            Some(PointerPosition { x, y }) => (format!("{x:.1}px"), format!("{y:.1}px")),
            None => (CENTER.to_string(), CENTER.to_string()),
        }
    }

    /// Inline style for the card container: the custom-property pair read by
    /// the highlight layer, the tint and the resting or emphasized frame.
    ///
    /// The tint is painted as a background image so the card's own
    /// `background-color` stays visible underneath it.
    pub fn card_style(&self, theme: &HighlightTheme) -> String {
        let (x, y) = self.gradient_center();
        let frame = match self.phase {
            HoverPhase::Resting => format!("border-color: {RESTING_BORDER}; box-shadow: none;"),
            HoverPhase::Hovered => format!(
                "border-color: {}; box-shadow: 0 0 24px 2px {};",
                theme.primary_color, theme.glow_color
            ),
        };
        format!(
            "--mouse-x: {x}; --mouse-y: {y}; background-image: linear-gradient({tint}, {tint}); {frame}",
            tint = theme.background_tint
        )
    }

    /// Inline style for the decorative layer stacked over the card.
    pub fn layer_style(&self, theme: &HighlightTheme) -> String {
        let opacity = if self.is_hovered() { 1 } else { 0 };
        format!(
            "opacity: {opacity}; background: radial-gradient({HIGHLIGHT_RADIUS_PX}px circle at var(--mouse-x) var(--mouse-y), {}, transparent {GLOW_FALLOFF_PERCENT}%);",
            theme.glow_color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardBounds {
        CardBounds::new(20.0, 20.0, 300.0, 200.0)
    }

    #[test]
    fn test_move_is_relative_to_card_origin() {
        let mut highlight = PointerHighlight::default();
        highlight.pointer_enter();
        highlight.pointer_move(120.0, 80.0, card());

        assert_eq!(
            highlight.position(),
            Some(PointerPosition { x: 100.0, y: 60.0 })
        );
        assert_eq!(
            highlight.gradient_center(),
            ("100.0px".to_string(), "60.0px".to_string())
        );
    }

    #[test]
    fn test_percent_view_of_position() {
        let pos = PointerPosition { x: 100.0, y: 60.0 };
        let (px, py) = pos.as_percent(card());
        assert!((px - 100.0 / 3.0).abs() < 1e-9, "x was {px}");
        assert!((py - 30.0).abs() < 1e-9, "y was {py}");

        assert_eq!(
            pos.as_percent(CardBounds::new(0.0, 0.0, 0.0, 200.0)),
            (50.0, 50.0)
        );
        assert_eq!(
            pos.as_percent(CardBounds::new(0.0, 0.0, 300.0, f64::NAN)),
            (50.0, 50.0)
        );
    }

    #[test]
    fn test_positions_stay_within_card() {
        let bounds = card();
        let mut highlight = PointerHighlight::default();
        highlight.pointer_enter();

        let moves = [
            (20.0, 20.0),
            (320.0, 220.0),
            (19.5, 100.0),
            (500.0, -40.0),
            (-1000.0, 1000.0),
            (170.25, 119.75),
        ];
        for (x, y) in moves {
            highlight.pointer_move(x, y, bounds);
            let pos = highlight.position().expect("bounds are usable");
            assert!((0.0..=bounds.width).contains(&pos.x), "x out of range: {pos:?}");
            assert!((0.0..=bounds.height).contains(&pos.y), "y out of range: {pos:?}");
        }
    }

    #[test]
    fn test_starts_resting_and_centered() {
        let highlight = PointerHighlight::default();
        let theme = HighlightTheme::default();

        assert_eq!(highlight.phase(), HoverPhase::Resting);
        assert_eq!(highlight.position(), None);
        assert!(highlight
            .card_style(&theme)
            .starts_with("--mouse-x: 50%; --mouse-y: 50%;"));
        assert!(highlight.layer_style(&theme).starts_with("opacity: 0;"));
    }

    #[test]
    fn test_enter_emphasizes_and_leave_restores() {
        let theme = HighlightTheme::for_index(1);
        let mut highlight = PointerHighlight::default();
        let resting = highlight.card_style(&theme);

        highlight.pointer_enter();
        highlight.pointer_move(60.0, 60.0, card());
        let hovered = highlight.card_style(&theme);
        assert!(hovered.contains(theme.glow_color));
        assert!(hovered.contains(&format!("border-color: {}", theme.primary_color)));
        assert!(highlight.layer_style(&theme).starts_with("opacity: 1;"));

        highlight.pointer_leave();
        assert_eq!(highlight.phase(), HoverPhase::Resting);
        assert!(highlight.layer_style(&theme).starts_with("opacity: 0;"));
        // the frame is back to resting even though the position was kept
        assert!(highlight.card_style(&theme).contains("box-shadow: none;"));
        assert_ne!(highlight.card_style(&theme), resting);
        assert_eq!(
            highlight.position(),
            Some(PointerPosition { x: 40.0, y: 40.0 })
        );
    }

    #[test]
    fn test_reentry_starts_at_center() {
        let mut highlight = PointerHighlight::default();
        highlight.pointer_enter();
        highlight.pointer_move(300.0, 200.0, card());
        highlight.pointer_leave();

        highlight.pointer_enter();
        assert_eq!(highlight.position(), None);
        assert_eq!(
            highlight.gradient_center(),
            ("50%".to_string(), "50%".to_string())
        );
    }

    #[test]
    fn test_tint_does_not_replace_card_background() {
        let theme = HighlightTheme::for_index(2);
        let mut highlight = PointerHighlight::default();
        for hovered in [false, true] {
            if hovered {
                highlight.pointer_enter();
            }
            let style = highlight.card_style(&theme);
            assert!(!style.contains("background-color"), "{style}");
            assert!(style.contains(&format!(
                "background-image: linear-gradient({0}, {0});",
                theme.background_tint
            )));
        }
    }

    #[test]
    fn test_leave_always_rests() {
        let mut highlight = PointerHighlight::default();
        highlight.pointer_leave();
        assert_eq!(highlight.phase(), HoverPhase::Resting);

        highlight.pointer_enter();
        highlight.pointer_enter();
        highlight.pointer_move(5000.0, 5000.0, card());
        highlight.pointer_leave();
        assert_eq!(highlight.phase(), HoverPhase::Resting);
    }

    #[test]
    fn test_degenerate_bounds_fall_back_to_center() {
        let mut highlight = PointerHighlight::default();
        highlight.pointer_enter();
        highlight.pointer_move(120.0, 80.0, card());
        assert!(highlight.position().is_some());

        highlight.pointer_move(120.0, 80.0, CardBounds::new(20.0, 20.0, 0.0, 200.0));
        assert_eq!(highlight.position(), None);
        assert_eq!(
            highlight.gradient_center(),
            ("50%".to_string(), "50%".to_string())
        );

        highlight.pointer_move(f64::NAN, 80.0, card());
        assert_eq!(highlight.position(), None);

        highlight.pointer_move(1.0, 1.0, CardBounds::new(f64::INFINITY, 0.0, 10.0, 10.0));
        assert_eq!(highlight.position(), None);
    }

    #[test]
    fn test_cards_do_not_share_state() {
        let mut first = PointerHighlight::default();
        let second = PointerHighlight::default();
        first.pointer_enter();
        first.pointer_move(30.0, 30.0, card());

        assert!(first.is_hovered());
        assert!(!second.is_hovered());
        assert_eq!(second.position(), None);
    }

    #[test]
    fn test_theme_cycles_through_palette() {
        assert_eq!(HighlightTheme::for_index(0), PALETTE[0]);
        assert_eq!(HighlightTheme::for_index(PALETTE.len() + 2), PALETTE[2]);
        assert_ne!(HighlightTheme::for_index(0), HighlightTheme::for_index(1));
    }
}
