//! Random input generation
//!
//! Values are drawn uniformly from `0..max_value`. The generator is passed in so
//! callers can seed it and get reproducible structures.

use super::tree::Bst;
use super::Element;
use crate::errors::VizError;
use rand::Rng;

pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    max_value: Element,
) -> Result<Vec<Element>, VizError> {
    if max_value <= 0 {
        return Err(VizError::InvalidRandomRange { size, max_value });
    }
    Ok((0..size).map(|_| rng.gen_range(0..max_value)).collect())
}

/// Random values in ascending order (binary search input)
pub fn random_sorted<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    max_value: Element,
) -> Result<Vec<Element>, VizError> {
    let mut values = random_values(rng, size, max_value)?;
    values.sort_unstable();
    Ok(values)
}

/// Tree built from `size` random draws; duplicates are dropped so it may hold fewer nodes
pub fn random_tree<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    max_value: Element,
) -> Result<Bst, VizError> {
    let values = random_values(rng, size, max_value)?;
    Ok(Bst::from_values(&values))
}
