//! Outcome phase: celebration for a winner, a neutral card for a draw.

use image::RgbImage;

use crate::broadcast::{Broadcast, anim, layout};
use crate::league::MatchOutcome;
use crate::render::{Rect, Surface, Weight};
use crate::theme::{ASH, GOLD, MIST, NIGHT_BOTTOM, NIGHT_TOP, STONE, WHITE};

use crate::broadcast::layout::{CANVAS_HEIGHT, CANVAS_WIDTH, H, W};

/// Render outcome frame `frame` of `total`.
pub fn render(b: &Broadcast, outcome: &MatchOutcome, frame: u64, total: u64) -> RgbImage {
    let progress = frame as f64 / total as f64;
    let mut s = Surface::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    s.gradient_fill(NIGHT_TOP, NIGHT_BOTTOM);

    // The draw path is a separate branch, not a recolored winner sequence:
    // no particles, no winner panel, neutral caption.
    match &outcome.winner {
        Some(winner) => {
            let winner_color = b.color_of(winner);

            for j in 0..30 {
                let (x, y, r) = anim::confetti_particle(frame, j, CANVAS_WIDTH, CANVAS_HEIGHT);
                let color = if j % 2 == 0 { winner_color } else { GOLD };
                s.fill_ellipse(Rect::new(x - r, y - r, x + r, y + r), color);
            }

            if anim::gate(progress, 0.1) {
                let y = anim::slide(-50.0, 200.0, anim::ramp(progress, 0.1, 3.0)) as i32;
                let scale = 1.0 + anim::pulse(frame, 0.2, 0.05);
                s.draw_text(b.fonts, W / 2, y, "WINNER!", (52.0 * scale) as f32, Weight::Bold, GOLD);
            }

            if anim::gate(progress, 0.3) {
                let grown = anim::ramp(progress, 0.3, 2.5);
                let width = (grown * f64::from(W - 120)) as i32;
                let panel = layout::winner_panel(width);
                if width > 0 {
                    s.glow_rect(panel, winner_color, 5, 3, 2);
                    s.fill_rect(panel, winner_color);
                    s.stroke_rect(panel, GOLD, 4);
                }
                if grown > 0.5 {
                    s.draw_text(b.fonts, W / 2, 400, &winner.name, 36.0, Weight::Bold, WHITE);
                    s.draw_text(b.fonts, W / 2, 450, "CHAMPION", 28.0, Weight::Regular, GOLD);
                }
            }
        }
        None => {
            if anim::gate(progress, 0.1) {
                let y = anim::slide(-50.0, 200.0, anim::ramp(progress, 0.1, 3.0)) as i32;
                s.draw_text(b.fonts, W / 2, y, "DRAW!", 52.0, Weight::Bold, MIST);
            }
        }
    }

    if anim::gate(progress, 0.6) {
        s.draw_text(b.fonts, W / 2, 600, "FINAL SCORE", 28.0, Weight::Regular, STONE);
        final_panel(
            &mut s,
            b,
            layout::final_panel_left(),
            W / 4 + 20,
            &b.team1.id,
            b.team1_color,
            outcome.final_score.0,
        );
        final_panel(
            &mut s,
            b,
            layout::final_panel_right(),
            W * 3 / 4 - 20,
            &b.team2.id,
            b.team2_color,
            outcome.final_score.1,
        );
    }

    if anim::gate(progress, 0.8) {
        s.draw_text(b.fonts, W / 2, H - 100, "THE LEAGUE", 28.0, Weight::Regular, ASH);
    }

    s.into_image()
}

fn final_panel(
    s: &mut Surface,
    b: &Broadcast,
    panel: Rect,
    cx: i32,
    team_id: &str,
    color: crate::theme::Rgb,
    score: f64,
) {
    s.fill_rect(panel, color);
    s.stroke_rect(panel, WHITE, 2);
    s.draw_text(b.fonts, cx, 700, &team_id.to_uppercase(), 28.0, Weight::Regular, WHITE);
    s.draw_text(b.fonts, cx, 740, &format!("{score:.0}"), 36.0, Weight::Bold, WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::Team;
    use crate::render::FontBook;

    fn teams() -> (Team, Team) {
        (
            Team {
                id: "la".into(),
                name: "Los Angeles".into(),
                color: "#FF0000".into(),
                skill_level: None,
            },
            Team {
                id: "nyc".into(),
                name: "New York".into(),
                color: "#0000FF".into(),
                skill_level: None,
            },
        )
    }

    #[test]
    fn winner_and_draw_branches_differ() {
        let (t1, t2) = teams();
        let fonts = FontBook::builtin();
        let b = Broadcast::new(&t1, &t2, "Connect Four", &fonts).unwrap();

        let won = MatchOutcome {
            winner: Some(t1.clone()),
            final_score: (3.0, 1.0),
        };
        let draw = MatchOutcome {
            winner: None,
            final_score: (2.0, 2.0),
        };
        let f_won = render(&b, &won, 48, 96);
        let f_draw = render(&b, &draw, 48, 96);
        assert_ne!(f_won.as_raw(), f_draw.as_raw());
    }

    #[test]
    fn draw_branch_suppresses_the_winner_panel() {
        let (t1, t2) = teams();
        let fonts = FontBook::builtin();
        let b = Broadcast::new(&t1, &t2, "Connect Four", &fonts).unwrap();
        let draw = MatchOutcome {
            winner: None,
            final_score: (0.0, 0.0),
        };
        // Past every gate, the winner panel row stays pure background.
        let img = render(&b, &draw, 95, 96);
        let px = img.get_pixel(W as u32 / 2, 380);
        let bg = NIGHT_TOP.lerp(NIGHT_BOTTOM, 380.0 / f64::from(H));
        assert_eq!(px.0, [bg.0, bg.1, bg.2]);
    }

    #[test]
    fn winner_panel_reveals_name_after_half_growth() {
        let (t1, t2) = teams();
        let fonts = FontBook::builtin();
        let b = Broadcast::new(&t1, &t2, "Connect Four", &fonts).unwrap();
        let won = MatchOutcome {
            winner: Some(t1.clone()),
            final_score: (3.0, 1.0),
        };
        // progress 0.9 -> growth ramp saturated; panel center is team color
        // under the name text row.
        let img = render(&b, &won, 90, 100);
        let px = img.get_pixel(W as u32 / 2 - 100, 380);
        assert_eq!(px.0, [255, 0, 0]);
    }
}
