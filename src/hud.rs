//! Text overlay for each game state
//!
//! Describes what the host UI should show; layout and fonts are up to the host.

use crate::sim::{Game, GamePhase};

pub const MENU_BLURB: &str = "Catch the purple triangles and avoid the green objects!";
pub const START_BUTTON: &str = "Start";
pub const QUIT_BUTTON: &str = "Quit";
pub const GAME_OVER_BANNER: &str = "Game Over!";
pub const WIN_BANNER: &str = "*You Win!*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub buttons: [&'static str; 2],
    pub blurb: &'static str,
}

/// Everything the overlay needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HudView {
    /// "Lives: n" and "Points: n", shown while Playing and on GameOver
    pub score_lines: Option<[String; 2]>,
    pub menu: Option<Menu>,
    /// Large centred text on GameOver/Win
    pub banner: Option<&'static str>,
}

impl HudView {
    pub fn from_game(game: &Game) -> Self {
        let phase = game.phase();

        let score_lines = matches!(phase, GamePhase::Playing | GamePhase::GameOver).then(|| {
            [
                format!("Lives: {}", game.player.life),
                format!("Points: {}", game.player.points),
            ]
        });

        let menu = (phase == GamePhase::Menu).then_some(Menu {
            buttons: [START_BUTTON, QUIT_BUTTON],
            blurb: MENU_BLURB,
        });

        let banner = match phase {
            GamePhase::GameOver => Some(GAME_OVER_BANNER),
            GamePhase::Win => Some(WIN_BANNER),
            _ => None,
        };

        Self {
            score_lines,
            menu,
            banner,
        }
    }

    /// Flattened text lines, for logs and terminals
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(menu) = &self.menu {
            lines.push(format!("[{}] [{}]", menu.buttons[0], menu.buttons[1]));
            lines.push(menu.blurb.to_string());
        }
        if let Some(score) = &self.score_lines {
            lines.extend(score.iter().cloned());
        }
        if let Some(banner) = self.banner {
            lines.push(banner.to_string());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_view() {
        let game = Game::new(1);
        let hud = HudView::from_game(&game);
        assert!(hud.menu.is_some());
        assert!(hud.score_lines.is_none());
        assert!(hud.banner.is_none());
        assert!(hud.lines().iter().any(|l| l == MENU_BLURB));
    }

    #[test]
    fn playing_view_shows_score() {
        let mut game = Game::new(1);
        game.start();
        game.player.add_point();
        let hud = HudView::from_game(&game);
        assert_eq!(
            hud.score_lines,
            Some(["Lives: 3".to_string(), "Points: 1".to_string()])
        );
        assert!(hud.menu.is_none());
        assert!(hud.banner.is_none());
    }

    #[test]
    fn end_screens() {
        let mut game = Game::new(1);
        game.data.phase = GamePhase::GameOver;
        let hud = HudView::from_game(&game);
        assert_eq!(hud.banner, Some(GAME_OVER_BANNER));
        assert!(hud.score_lines.is_some());

        game.data.phase = GamePhase::Win;
        let hud = HudView::from_game(&game);
        assert_eq!(hud.banner, Some(WIN_BANNER));
        assert!(hud.score_lines.is_none());
    }
}
