//! HUD text

use crate::sim::Hud;

/// Top-left corner of the HUD text block
pub const HUD_ORIGIN: (f32, f32) = (50.0, 750.0);

/// HUD lines, top to bottom
pub fn hud_lines(hud: &Hud) -> [String; 3] {
    [
        format!("Level: {}", hud.level),
        format!("Lives: {}", hud.lives),
        format!("Score: {}", hud.score),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_lines() {
        let hud = Hud {
            level: 1,
            lives: 2,
            score: 1230,
        };
        assert_eq!(hud_lines(&hud), ["Level: 1", "Lives: 2", "Score: 1230"]);
    }
}
