//! The model seam.
//!
//! The network itself lives outside this crate (typically in Python). A
//! seat's observation goes in, one weight per catalog action comes out.

use crate::cards::ACTION_SPACE_SIZE;
use crate::nn::EncodedState;

/// Scores every catalog action for an observation.
///
/// Weights need not be normalized, and a short vector is read as zero for
/// the missing actions. Controllers drop whatever the mask rules out.
pub trait PolicyNetwork: Send + Sync {
    fn predict(&self, state: &EncodedState) -> Vec<f32>;
}

/// Equal weight on every action in the catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicy;

impl PolicyNetwork for UniformPolicy {
    fn predict(&self, _state: &EncodedState) -> Vec<f32> {
        vec![1.0 / ACTION_SPACE_SIZE as f32; ACTION_SPACE_SIZE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardSet;

    #[test]
    fn test_uniform_covers_catalog() {
        let weights = UniformPolicy.predict(&EncodedState::from_planes([&CardSet::new(); 3]));
        assert_eq!(weights.len(), ACTION_SPACE_SIZE);
        assert!(weights.iter().all(|&w| w == weights[0] && w > 0.0));
    }
}
