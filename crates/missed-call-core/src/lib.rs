//! Core logic for the MissedCall page: geometry-to-audio mapping and UI state.
//!
//! Nothing in this crate depends on a browser. The web frontend captures geometry,
//! feeds it to [`UiState`] and carries out the returned [`Effect`]s.

pub mod choreography;
pub mod constants;
pub mod effects;
pub mod geometry;
pub mod mapping;
pub mod section;
pub mod state;
pub mod surface;
pub mod tuning;

pub use choreography::*;
pub use constants::*;
pub use effects::*;
pub use geometry::*;
pub use mapping::*;
pub use section::*;
pub use state::*;
pub use surface::*;
pub use tuning::*;
