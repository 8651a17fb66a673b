//! Intro phase: particles, sliding title, team panels and the pulsing VS.

use image::RgbImage;

use crate::broadcast::{Broadcast, anim, layout};
use crate::render::{Rect, Surface, Weight};
use crate::theme::{GOLD, MIST, NIGHT_BOTTOM, NIGHT_TOP, STONE, WHITE};

use crate::broadcast::layout::{CANVAS_HEIGHT, CANVAS_WIDTH, H, W};

/// Render intro frame `frame` of `total`.
pub fn render(b: &Broadcast, frame: u64, total: u64) -> RgbImage {
    let progress = frame as f64 / total as f64;
    let mut s = Surface::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    s.gradient_fill(NIGHT_TOP, NIGHT_BOTTOM);

    for j in 0..20 {
        let (x, y) = anim::orbit_particle(frame, j, progress, W / 2, H / 2);
        s.fill_ellipse(Rect::new(x - 2, y - 2, x + 2, y + 2), GOLD);
    }

    let title_y = anim::slide(-100.0, 200.0, anim::ramp(progress, 0.0, 2.0)) as i32;
    if anim::gate(progress, 0.1) {
        s.draw_text(b.fonts, W / 2, title_y, "THE LEAGUE", 56.0, Weight::Bold, GOLD);
    }

    if anim::gate(progress, 0.3) {
        let opacity = anim::ramp(progress, 0.3, 500.0 / 255.0);
        s.draw_text_faded(
            b.fonts,
            W / 2,
            title_y + 60,
            "PRESENTS",
            28.0,
            Weight::Regular,
            MIST,
            opacity,
        );
    }

    if anim::gate(progress, 0.4) {
        let t = anim::ramp(progress, 0.4, 3.0);
        let offset = anim::slide(-f64::from(W), 0.0, t) as i32;
        team_panel(&mut s, b, layout::intro_panel_one(), offset, &b.team1.name, b.team1_color);
    }

    if anim::gate(progress, 0.5) {
        let scale = 1.0 + anim::pulse(frame, 0.3, 0.1);
        s.draw_text(b.fonts, W / 2, 600, "VS", (56.0 * scale) as f32, Weight::Bold, GOLD);
    }

    if anim::gate(progress, 0.6) {
        let t = anim::ramp(progress, 0.6, 3.0);
        let offset = anim::slide(f64::from(W), 0.0, t) as i32;
        team_panel(&mut s, b, layout::intro_panel_two(), offset, &b.team2.name, b.team2_color);
    }

    if anim::gate(progress, 0.8) {
        let caption = b.game_name.to_uppercase();
        let opacity = anim::ramp(progress, 0.8, 5.0);
        s.draw_text_faded(b.fonts, W / 2, 950, &caption, 28.0, Weight::Regular, STONE, opacity);
    }

    s.into_image()
}

fn team_panel(
    s: &mut Surface,
    b: &Broadcast,
    resting: Rect,
    offset: i32,
    name: &str,
    color: crate::theme::Rgb,
) {
    let panel = Rect::new(
        resting.x0 + offset,
        resting.y0,
        resting.x1 + offset,
        resting.y1,
    );
    s.glow_rect(panel, color, 3, 2, 2);
    s.fill_rect(panel, color);
    s.stroke_rect(panel, WHITE, 3);
    let (cx, cy) = panel.center();
    s.draw_text(b.fonts, cx, cy, name, 36.0, Weight::Bold, WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::Team;
    use crate::render::FontBook;

    fn card() -> (Team, Team) {
        let t1 = Team {
            id: "la".into(),
            name: "Los Angeles".into(),
            color: "#FFD700".into(),
            skill_level: None,
        };
        let t2 = Team {
            id: "nyc".into(),
            name: "New York".into(),
            color: "#1E90FF".into(),
            skill_level: None,
        };
        (t1, t2)
    }

    #[test]
    fn frames_are_canvas_sized_and_deterministic() {
        let (t1, t2) = card();
        let fonts = FontBook::builtin();
        let b = Broadcast::new(&t1, &t2, "Connect Four", &fonts).unwrap();
        let a = render(&b, 10, 72);
        let b2 = render(&b, 10, 72);
        assert_eq!(a.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
        assert_eq!(a.as_raw(), b2.as_raw());
    }

    #[test]
    fn gated_elements_change_late_frames() {
        let (t1, t2) = card();
        let fonts = FontBook::builtin();
        let b = Broadcast::new(&t1, &t2, "Connect Four", &fonts).unwrap();
        // Before the 0.4 gate the team-1 panel is absent, after it the panel
        // row is filled with the team color.
        let early = render(&b, 7, 72); // progress ~0.097
        let late = render(&b, 71, 72);
        let probe = (W as u32 / 2, 460u32);
        assert_ne!(early.get_pixel(probe.0, probe.1), late.get_pixel(probe.0, probe.1));
    }
}
