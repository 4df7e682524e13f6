//! Umrechnung von Fenster-Pixeln in normalisierte Gerätekoordinaten.

use glam::Vec2;

/// Konvertiert Pixel-Koordinaten (Ursprung oben links) in NDC [-1, 1].
/// Die Y-Achse wird gespiegelt, damit oben positiv ist.
pub fn screen_to_ndc(screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
    Vec2::new(
        2.0 * screen_pos.x / screen_size.x - 1.0,
        -(2.0 * screen_pos.y / screen_size.y - 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn center_maps_to_origin() {
        let ndc = screen_to_ndc(Vec2::new(320.0, 320.0), Vec2::new(640.0, 640.0));
        assert_relative_eq!(ndc.x, 0.0);
        assert_relative_eq!(ndc.y, 0.0);
    }

    #[test]
    fn top_left_maps_to_minus_one_plus_one() {
        let ndc = screen_to_ndc(Vec2::ZERO, Vec2::new(800.0, 600.0));
        assert_relative_eq!(ndc.x, -1.0);
        assert_relative_eq!(ndc.y, 1.0);
    }
}
