//! Neural network integration.
//!
//! - **Traits**: `PolicyNetwork` is the seam for an external model
//! - **Encoding**: `StateEncoder` and the `LandlordEncoder` observation
//! - **Baseline**: `UniformPolicy` for testing
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rust_landlord::nn::{LandlordEncoder, StateEncoder};
//!
//! let encoded = LandlordEncoder.encode(&game, seat);
//! let probs = network.predict(&encoded);
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{EncodedState, LandlordEncoder, StateEncoder, WidthMismatch, PLANES, STATE_WIDTH};
pub use traits::{PolicyNetwork, UniformPolicy};
