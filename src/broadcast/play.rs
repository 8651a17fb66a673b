//! Play phase: the per-turn HUD overlay around the embedded game frame.

use image::RgbImage;

use crate::broadcast::{Broadcast, anim, layout};
use crate::render::{Surface, Weight};
use crate::theme::{BADGE, BAR, DUSK_BOTTOM, GOLD, NIGHT_TOP, Rgb, WHITE};

use crate::broadcast::layout::{CANVAS_HEIGHT, CANVAS_WIDTH, H, NAME_BUDGET, W};

/// One sampled turn as seen by the play renderer.
pub struct PlayFrame<'a> {
    /// Ordinal of this frame within the play segment (drives pulsing).
    pub ordinal: u64,
    /// 1-based turn number shown in the footer badge.
    pub turn_index: u32,
    /// Raw game frame; `None` leaves the reserved region as background.
    pub game_frame: Option<&'a RgbImage>,
    /// Cumulative score as of this turn, never interpolated.
    pub score: (f64, f64),
}

pub fn render(b: &Broadcast, view: &PlayFrame) -> RgbImage {
    let mut s = Surface::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    s.gradient_fill(NIGHT_TOP, DUSK_BOTTOM);
    let frame = view.ordinal;

    let header_pulse = anim::pulse(frame, 0.1, 5.0) as i32;
    s.fill_rect(layout::header_bar(header_pulse), BAR);
    s.draw_text(b.fonts, W / 2, 45, "THE LEAGUE", 42.0, Weight::Bold, GOLD);

    scoreboard(
        &mut s,
        b,
        layout::score_panel_left(),
        W / 4,
        &b.team1.name,
        b.team1_color,
        view.score.0,
    );
    scoreboard(
        &mut s,
        b,
        layout::score_panel_right(),
        W * 3 / 4,
        &b.team2.name,
        b.team2_color,
        view.score.1,
    );

    let vs_pulse = anim::pulse(frame, 0.15, 3.0) as i32;
    let badge = layout::vs_badge(vs_pulse);
    s.fill_ellipse(badge, BADGE);
    s.stroke_ellipse(badge, GOLD, 2);
    s.draw_text(b.fonts, W / 2, 155, "VS", 20.0, Weight::Regular, GOLD);

    if let Some(game_frame) = view.game_frame {
        let placed = s.paste_fit(game_frame, layout::game_region());
        s.glow_rect(placed.inflate(5), GOLD, 4, 1, 1);
    }

    s.fill_rect(layout::footer_bar(), BAR);
    let turn_badge = layout::turn_badge();
    s.fill_rect(turn_badge, BADGE);
    s.stroke_rect(turn_badge, GOLD, 2);
    let label = format!("TURN {}", view.turn_index);
    s.draw_text(b.fonts, W / 2, H - 45, &label, 28.0, Weight::Regular, WHITE);

    s.into_image()
}

fn scoreboard(
    s: &mut Surface,
    b: &Broadcast,
    panel: crate::render::Rect,
    cx: i32,
    name: &str,
    color: Rgb,
    score: f64,
) {
    s.glow_rect(panel, color, 2, 1, 1);
    s.fill_rect(panel, color);
    let short: String = name.chars().take(NAME_BUDGET).collect();
    s.draw_text(b.fonts, cx, 135, &short, 20.0, Weight::Regular, WHITE);
    s.draw_text(b.fonts, cx, 170, &format!("{score:.0}"), 28.0, Weight::Regular, WHITE);
}
