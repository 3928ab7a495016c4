//! Fuzzy title matching: normalization, token-set scoring, and best-match
//! extraction.
//!
//! The same painting title is spelled, punctuated, and cased differently
//! across the source tables, so joins run on approximate equality instead of
//! exact keys. Scores live on a 0-100 scale and the merge threshold compares
//! against them inclusively.

pub mod extract;
pub mod normalize;
pub mod score;

pub use extract::{Match, best_match, extract};
pub use normalize::normalize_title;
pub use score::{ratio, token_set_ratio};
