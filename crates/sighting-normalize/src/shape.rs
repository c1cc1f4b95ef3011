//! Shape categorization.

use sighting_model::ShapeCategory;

/// Map a raw witness shape to the five-way category.
///
/// The raw value is lowercased and compared for exact equality against the
/// primary labels; any other value, including the empty string and labels
/// with stray whitespace, is [`ShapeCategory::Other`].
pub fn categorize_shape(raw: &str) -> ShapeCategory {
    let lowered = raw.to_lowercase();
    ShapeCategory::PRIMARY
        .into_iter()
        .find(|category| category.as_str() == lowered)
        .unwrap_or(ShapeCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_shapes_match_case_insensitively() {
        assert_eq!(categorize_shape("light"), ShapeCategory::Light);
        assert_eq!(categorize_shape("Circle"), ShapeCategory::Circle);
        assert_eq!(categorize_shape("TRIANGLE"), ShapeCategory::Triangle);
        assert_eq!(categorize_shape("FireBall"), ShapeCategory::Fireball);
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(categorize_shape("disk"), ShapeCategory::Other);
        assert_eq!(categorize_shape("lights"), ShapeCategory::Other);
        assert_eq!(categorize_shape(" light"), ShapeCategory::Other);
        assert_eq!(categorize_shape(""), ShapeCategory::Other);
        assert_eq!(categorize_shape("other"), ShapeCategory::Other);
    }
}
