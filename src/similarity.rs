//! Graph distances derived from the size of a maximum common subgraph.
//!
//! Sizes are whatever the caller measures (vertex counts for an MCIS, edge counts for an MCES)
//! and may be any primitive integer type.
use num_traits::{PrimInt, ToPrimitive};

fn as_f64<T: ToPrimitive>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Bunke and Shearer: `1 - |mcs| / max(|g1|, |g2|)`. Zero when both graphs are empty.
pub fn bunke_shearer<T: PrimInt>(g1: T, g2: T, mcs: T) -> f64 {
    let largest = g1.max(g2);
    if largest.is_zero() {
        return 0.0;
    }
    1.0 - as_f64(mcs) / as_f64(largest)
}

/// Wallis et al.: `1 - |mcs| / (|g1| + |g2| - |mcs|)`, the graph union normalisation.
/// Zero when the union is empty.
pub fn wallis<T: PrimInt>(g1: T, g2: T, mcs: T) -> f64 {
    let union = as_f64(g1) + as_f64(g2) - as_f64(mcs);
    if union <= 0.0 {
        return 0.0;
    }
    1.0 - as_f64(mcs) / union
}

/// Fernández and Valiente: `|g1| + |g2| - 2|mcs|`, an unnormalised edit-style distance.
/// Saturates instead of overflowing.
pub fn fernandez_valiente<T: PrimInt>(g1: T, g2: T, mcs: T) -> T {
    g1.saturating_add(g2).saturating_sub(mcs).saturating_sub(mcs)
}
