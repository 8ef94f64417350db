//! Cosine similarity between two embedding vectors.

use crate::error::MarkerError;

/// Returns the cosine of the angle between `a` and `b`.
///
/// Accumulates in `f64`. A zero-norm vector has no direction, so its similarity to anything is `0.0`.
///
/// # Errors
///
/// Returns [`MarkerError::Similarity`] if either vector is empty or their lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, MarkerError> {
    if a.is_empty() || b.is_empty() {
        return Err(MarkerError::Similarity("empty embedding vector".to_string()));
    }
    if a.len() != b.len() {
        return Err(MarkerError::Similarity(format!(
            "embedding dimensions differ: {} != {}",
            a.len(),
            b.len()
        )));
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok((dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let v = [0.3, 0.4, 0.5];
        assert!((cosine_similarity(&v, &v).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
    }

    #[test]
    fn opposite_vectors_score_minus_one() {
        let s = cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]).unwrap();
        assert!((s + 1.0).abs() < 1e-9);
    }

    #[test]
    fn scale_does_not_matter() {
        let s = cosine_similarity(&[1.0, 1.0], &[10.0, 10.0]).unwrap();
        assert!((s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_vector_scores_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap(), 0.0);
    }

    #[test]
    fn mismatched_or_empty_vectors_are_errors() {
        assert!(matches!(
            cosine_similarity(&[1.0], &[1.0, 2.0]),
            Err(MarkerError::Similarity(_))
        ));
        assert!(matches!(
            cosine_similarity(&[], &[]),
            Err(MarkerError::Similarity(_))
        ));
    }
}
