//! Tool-specific normalization of raw exports. Every mapping pass assumes
//! the column contract these adapters establish, so a file always passes
//! through its adapter before any registry is built against it.

pub mod oneclick;
pub mod tally;
