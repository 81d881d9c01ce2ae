//! Class-name table for the fruit classifier.
//!
//! The order is positional: entry `i` names the class scored at index `i` of
//! the model's output vector. The server validates at startup that the loaded
//! model produces exactly this many scores.

pub const CLASS_NAMES: [&str; 6] = [
    "Fresh Apple",
    "Fresh Banana",
    "Fresh Orange",
    "Rotten Apple",
    "Rotten Banana",
    "Rotten Orange",
];

/// Look up the human-readable label for an output index.
pub fn label(index: usize) -> Option<&'static str> {
    CLASS_NAMES.get(index).copied()
}
