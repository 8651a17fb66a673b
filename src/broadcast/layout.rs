//! Fixed canvas geometry for the broadcast overlay.

use crate::foundation::core::CanvasSize;
use crate::render::Rect;

pub const CANVAS: CanvasSize = CanvasSize {
    width: 720,
    height: 1280,
};
pub const CANVAS_WIDTH: u32 = CANVAS.width;
pub const CANVAS_HEIGHT: u32 = CANVAS.height;

/// Scoreboard name labels are truncated to this many characters.
pub const NAME_BUDGET: usize = 15;

pub const W: i32 = CANVAS_WIDTH as i32;
pub const H: i32 = CANVAS_HEIGHT as i32;

/// Header bar; `pulse` stretches the bottom edge a few pixels.
pub fn header_bar(pulse: i32) -> Rect {
    Rect::new(0, 0, W, 90 + pulse)
}

pub fn score_panel_left() -> Rect {
    Rect::new(20, 110, W / 2 - 10, 200)
}

pub fn score_panel_right() -> Rect {
    Rect::new(W / 2 + 10, 110, W - 20, 200)
}

/// Circular VS badge between the scoreboards; `pulse` inflates it.
pub fn vs_badge(pulse: i32) -> Rect {
    Rect::new(W / 2 - 25, 130, W / 2 + 25, 180).inflate(pulse)
}

/// Reserved middle region the game frame is fitted into.
pub fn game_region() -> Rect {
    Rect::new(30, 230, W - 30, 230 + (H - 380))
}

pub fn footer_bar() -> Rect {
    Rect::new(0, H - 90, W, H)
}

pub fn turn_badge() -> Rect {
    Rect::new(100, H - 70, W - 100, H - 20)
}

/// Intro team panels at their resting positions.
pub fn intro_panel_one() -> Rect {
    Rect::new(60, 400, W - 60, 520)
}

pub fn intro_panel_two() -> Rect {
    Rect::new(60, 680, W - 60, 800)
}

/// Outcome winner panel, `width` pixels wide, centered horizontally.
pub fn winner_panel(width: i32) -> Rect {
    let left = (W - width) / 2;
    Rect::new(left, 350, left + width, 500)
}

pub fn final_panel_left() -> Rect {
    Rect::new(60, 660, W / 2 - 20, 780)
}

pub fn final_panel_right() -> Rect {
    Rect::new(W / 2 + 20, 660, W - 60, 780)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stay_inside_the_canvas() {
        for r in [
            header_bar(5),
            score_panel_left(),
            score_panel_right(),
            vs_badge(3),
            game_region(),
            footer_bar(),
            turn_badge(),
            intro_panel_one(),
            intro_panel_two(),
            final_panel_left(),
            final_panel_right(),
        ] {
            assert!(r.x0 >= 0 && r.y0 >= 0 && r.x1 <= W && r.y1 <= H, "{r:?}");
            assert!(r.width() > 0 && r.height() > 0, "{r:?}");
        }
    }

    #[test]
    fn winner_panel_is_centered() {
        let r = winner_panel(600);
        assert_eq!(r.x0, 60);
        assert_eq!(r.x1, 660);
        let degenerate = winner_panel(0);
        assert_eq!(degenerate.width(), 0);
    }

    #[test]
    fn scoreboards_do_not_overlap_the_badge_row() {
        assert!(score_panel_left().x1 < score_panel_right().x0);
        assert!(game_region().y0 > score_panel_left().y1);
        assert!(game_region().y1 < footer_bar().y0);
    }
}
