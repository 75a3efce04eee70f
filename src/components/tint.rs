//! Colour component.
//!
//! Every drawable box is rendered in its [`Tint`] colour. Tiles get their
//! tint rewritten by the picker through
//! [`TileTints`](crate::systems::picking::TileTints); everything else keeps
//! the tint it was spawned with.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Copy, Debug)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn from_color(color: Color) -> Self {
        Self { color }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::from_color(Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(c: Color) -> (u8, u8, u8, u8) {
        (c.r, c.g, c.b, c.a)
    }

    #[test]
    fn test_default_draws_white() {
        assert_eq!(rgba(Tint::default().color), (255, 255, 255, 255));
    }

    #[test]
    fn test_from_color_keeps_alpha() {
        let t = Tint::from_color(Color::new(0, 255, 255, 128));
        assert_eq!(rgba(t.color), (0, 255, 255, 128));
    }
}
