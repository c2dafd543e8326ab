//! Status text, outcome messages and the energy bar

use glam::Vec2;
use serde::Serialize;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::format_seconds;
use crate::sim::{Outcome, OutcomeKind, Session};

/// Energy at or below this shows the low-energy color
pub const LOW_ENERGY: u32 = 20;

/// Energy bar segment geometry (screen pixels)
const BAR_MARGIN: f32 = 10.0;
const BAR_SEGMENT: Vec2 = Vec2::new(5.0, 15.0);
const BAR_STRIDE: f32 = 2.0;

const STATUS_FONT: f32 = 15.0;
const HEADLINE_FONT: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One line of text for the host to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudText {
    pub text: String,
    /// Anchor point; meaning depends on `align`
    pub pos: Vec2,
    pub align: Align,
    pub font_size: f32,
    pub color: [f32; 4],
}

impl HudText {
    fn new(text: String, pos: Vec2, align: Align, font_size: f32) -> Self {
        Self {
            text,
            pos,
            align,
            font_size,
            color: colors::TEXT,
        }
    }
}

/// Headline, detail and prompt shown once a session is over
pub fn outcome_messages(outcome: &Outcome) -> [String; 3] {
    let time = format_seconds(outcome.time_ms);
    let (headline, detail) = match outcome.kind {
        OutcomeKind::Collision => ("Getting rusty?".to_string(), format!("Collision time {time}s")),
        OutcomeKind::Cleared => (
            "Nailed it!".to_string(),
            format!("Can you do it faster than {time}s?"),
        ),
    };
    [headline, detail, "Press 'R' to try again!".to_string()]
}

/// Score, timer and (when over) the outcome block
pub fn status_text(session: &Session) -> Vec<HudText> {
    let width = session.scale.width();
    let height = session.scale.height();

    let mut lines = vec![
        HudText::new(
            format!("Score: {}", session.score()),
            Vec2::new(width - 10.0, 30.0),
            Align::Right,
            STATUS_FONT,
        ),
        HudText::new(
            format!("Timer: {}", session.clock.formatted()),
            Vec2::new(10.0, 30.0),
            Align::Left,
            STATUS_FONT,
        ),
    ];

    if let Some(outcome) = &session.outcome {
        let [headline, detail, prompt] = outcome_messages(outcome);
        let center = Vec2::new(width * 0.5, height * 0.5);
        lines.push(HudText::new(
            headline,
            center - Vec2::new(0.0, 40.0),
            Align::Center,
            HEADLINE_FONT,
        ));
        lines.push(HudText::new(
            detail,
            center - Vec2::new(0.0, 20.0),
            Align::Center,
            STATUS_FONT,
        ));
        lines.push(HudText::new(prompt, center, Align::Center, STATUS_FONT));
    }

    lines
}

pub fn energy_color(energy: u32, max_energy: u32) -> [f32; 4] {
    if energy >= max_energy {
        colors::ENERGY_FULL
    } else if energy <= LOW_ENERGY {
        colors::ENERGY_LOW
    } else {
        colors::ENERGY
    }
}

/// One stacked segment per unit of energy, growing up from the bottom-left
pub fn energy_bar(energy: u32, max_energy: u32, viewport_height: f32) -> Vec<Vertex> {
    let color = energy_color(energy, max_energy);
    (0..energy)
        .flat_map(|i| {
            let top_left = Vec2::new(
                BAR_MARGIN,
                viewport_height - BAR_MARGIN - BAR_STRIDE * i as f32,
            );
            shapes::rect(top_left, BAR_SEGMENT, color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Viewport;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_collision_messages() {
        let outcome = Outcome {
            kind: OutcomeKind::Collision,
            time_ms: 4_260.0,
        };
        let [headline, detail, prompt] = outcome_messages(&outcome);
        assert_eq!(headline, "Getting rusty?");
        assert_eq!(detail, "Collision time 4.3s");
        assert_eq!(prompt, "Press 'R' to try again!");
    }

    #[test]
    fn test_cleared_messages() {
        let outcome = Outcome {
            kind: OutcomeKind::Cleared,
            time_ms: 61_000.0,
        };
        let [headline, detail, _] = outcome_messages(&outcome);
        assert_eq!(headline, "Nailed it!");
        assert_eq!(detail, "Can you do it faster than 61.0s?");
    }

    #[test]
    fn test_status_text() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut session = Session::new(
            Viewport::new(1000.0, 720.0).unwrap(),
            &Tuning::default(),
            &mut rng,
        );
        session.clock.timer = 2_500.0;

        let lines = status_text(&session);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "Score: 0");
        assert_eq!(lines[0].pos, Vec2::new(990.0, 30.0));
        assert_eq!(lines[0].align, Align::Right);
        assert_eq!(lines[1].text, "Timer: 2.5");
        assert!(lines.iter().all(|l| l.color == colors::TEXT));

        session.finish(OutcomeKind::Cleared);
        let lines = status_text(&session);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2].text, "Nailed it!");
        assert_eq!(lines[2].pos, Vec2::new(500.0, 320.0));
        assert_eq!(lines[2].font_size, 30.0);
    }

    #[test]
    fn test_energy_color_thresholds() {
        assert_eq!(energy_color(20, 60), colors::ENERGY_LOW);
        assert_eq!(energy_color(21, 60), colors::ENERGY);
        assert_eq!(energy_color(60, 60), colors::ENERGY_FULL);
    }

    #[test]
    fn test_energy_bar_segments() {
        let bar = energy_bar(3, 60, 720.0);
        assert_eq!(bar.len(), 18);
        assert_eq!(bar[0].position, [10.0, 710.0]);
        // Third segment starts 4px higher
        assert_eq!(bar[12].position, [10.0, 706.0]);
        assert!(energy_bar(0, 60, 720.0).is_empty());
    }
}
