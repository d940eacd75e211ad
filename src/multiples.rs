// model = "claude-opus-4-5"
// created = "2026-08-05"
// modified = "2026-08-05"
// driver = "Isaac Clayton"

//! Arithmetic progressions of multiples.

use crate::error::Error;

/// Produce the first `length` multiples of `base`.
///
/// The result holds exactly `length` elements, where the element at
/// index `i` is `base * (i + 1)`: the first multiple is `1 * base`, not
/// `0 * base`, so `result[0] == base`.
///
/// ```
/// use sequin::multiples::multiples_of;
/// assert_eq!(multiples_of(7.0, 5).unwrap(), vec![7.0, 14.0, 21.0, 28.0, 35.0]);
/// ```
///
/// Returns [`Error::ZeroLength`] if `length` is zero.
pub fn multiples_of(base: f64, length: usize) -> Result<Vec<f64>, Error> {
    if length == 0 {
        return Err(Error::ZeroLength);
    }

    let mut result = Vec::with_capacity(length);
    for i in 0..length {
        // i is zero-based, multiples are one-based: (i + 1) * base.
        result.push(base * (i + 1) as f64);
    }
    return Ok(result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiples_of_seven() {
        let result = multiples_of(7.0, 5).unwrap();
        assert_eq!(result, vec![7.0, 14.0, 21.0, 28.0, 35.0]);
    }

    #[test]
    fn first_element_is_base() {
        let result = multiples_of(3.5, 4).unwrap();
        assert_eq!(result[0], 3.5);
    }

    #[test]
    fn length_one() {
        let result = multiples_of(42.0, 1).unwrap();
        assert_eq!(result, vec![42.0]);
    }

    #[test]
    fn zero_base_gives_zeros() {
        let result = multiples_of(0.0, 3).unwrap();
        assert_eq!(result, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn negative_base() {
        let result = multiples_of(-2.0, 3).unwrap();
        assert_eq!(result, vec![-2.0, -4.0, -6.0]);
    }

    #[test]
    fn zero_length_is_rejected() {
        assert_eq!(multiples_of(7.0, 0), Err(Error::ZeroLength));
    }

    #[test]
    fn result_length_matches_request() {
        for length in 1..20 {
            assert_eq!(multiples_of(1.5, length).unwrap().len(), length);
        }
    }
}
