//! The match broadcast compositor: three phase renderers (intro, play,
//! outcome) composited over a fixed 720x1280 canvas, assembled into a single
//! ordered frame timeline.

pub mod anim;
pub mod intro;
pub mod layout;
pub mod outcome;
pub mod play;
pub mod timeline;

use crate::foundation::error::LeagueResult;
use crate::league::Team;
use crate::render::FontBook;
use crate::theme::{Rgb, STONE};

/// Immutable per-match metadata shared by every phase renderer.
///
/// Team color tokens are resolved once here; a malformed token stops video
/// production before any frame is rendered.
#[derive(Debug)]
pub struct Broadcast<'a> {
    pub team1: &'a Team,
    pub team2: &'a Team,
    pub team1_color: Rgb,
    pub team2_color: Rgb,
    pub game_name: &'a str,
    pub fonts: &'a FontBook,
}

impl<'a> Broadcast<'a> {
    pub fn new(
        team1: &'a Team,
        team2: &'a Team,
        game_name: &'a str,
        fonts: &'a FontBook,
    ) -> LeagueResult<Self> {
        Ok(Self {
            team1,
            team2,
            team1_color: Rgb::from_hex(&team1.color)?,
            team2_color: Rgb::from_hex(&team2.color)?,
            game_name,
            fonts,
        })
    }

    /// Resolved color for one of the two competing teams; neutral grey for
    /// anything else (a winnerless outcome has no team to ask for).
    pub fn color_of(&self, team: &Team) -> Rgb {
        if team.id == self.team1.id {
            self.team1_color
        } else if team.id == self.team2.id {
            self.team2_color
        } else {
            STONE
        }
    }
}
