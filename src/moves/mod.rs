//! Relocated-block detection for filtered diff streams.
//!
//! Scans the deletions and additions of a filtered stream for blocks of code
//! that were moved rather than rewritten, and tags the matched line pairs.
//! The matching is a greedy, first-fit heuristic: once a deletion block is
//! examined, the first addition block meeting the similarity bar wins, even
//! if a better match exists later in the stream. This is a known limitation
//! kept for output stability, not a globally optimal assignment.

mod detector;


// Re-export public API
pub use detector::{detect_moves, MoveMarks, MoveMatch};
