use bevy::prelude::*;

use crate::error::{ViewerError, ViewerResult};

/// Parse `#rrggbb` / `rrggbb` (and the short forms Bevy accepts) into a colour.
pub fn parse_hex_colour(value: &str) -> ViewerResult<Color> {
    Srgba::hex(value.trim())
        .map(Color::from)
        .map_err(|err| ViewerError::InvalidColor {
            value: value.to_string(),
            reason: err.to_string(),
        })
}

/// Uniformly random opaque colour, used when a page leaves its particle colour unset.
pub fn random_colour(rng: &mut impl rand::Rng) -> Color {
    Color::srgb(rng.r#gen(), rng.r#gen(), rng.r#gen())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parses_long_and_unprefixed_hex() {
        let green = parse_hex_colour("#00ff00").unwrap();
        assert_eq!(green.to_srgba(), Srgba::rgb(0.0, 1.0, 0.0));

        let orange = parse_hex_colour("df6b19").unwrap();
        let srgba = orange.to_srgba();
        assert!((srgba.red - 0xdf as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_hex_colour("#zzzzzz").unwrap_err();
        assert!(matches!(err, ViewerError::InvalidColor { ref value, .. } if value == "#zzzzzz"));
    }

    #[test]
    fn random_colour_is_opaque() {
        let mut rng = StdRng::seed_from_u64(7);
        let colour = random_colour(&mut rng).to_srgba();
        assert_eq!(colour.alpha, 1.0);
        assert!((0.0..=1.0).contains(&colour.red));
    }
}
