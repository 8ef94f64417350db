//! # Scorer Module
//!
//! Converts a raw similarity score into the number shown to the user.

/// Round a float to two decimal places.
///
/// Uses the common multiply / round / divide trick.
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Scales a similarity score by `scale` and rounds to two decimal places.
///
/// The similarity is not clamped: a negative cosine similarity yields a negative score.
///
/// # Example
///
/// ```
/// use marker::scorer::scale_score;
///
/// assert_eq!(scale_score(0.7, 5.0), 3.5);
/// assert_eq!(scale_score(0.8, 5.0), 4.0);
/// ```
pub fn scale_score(similarity: f64, scale: f64) -> f64 {
    round2(similarity * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_score_basic() {
        assert_eq!(scale_score(0.7, 5.0), 3.5);
        assert_eq!(scale_score(1.0, 5.0), 5.0);
        assert_eq!(scale_score(0.0, 5.0), 0.0);
    }

    #[test]
    fn test_scale_score_rounds_to_two_places() {
        assert_eq!(scale_score(0.83333, 5.0), 4.17);
        assert_eq!(scale_score(0.6543, 10.0), 6.54);
    }

    #[test]
    fn test_scale_score_keeps_negative_similarity() {
        assert_eq!(scale_score(-0.1, 5.0), -0.5);
    }
}
