//! Per-item quantity calculation driven by trip length
//!
//! Each item name is matched against two ordered keyword tables: one giving
//! the quantity needed per week, one capping the total. The first keyword (in
//! table order) contained in the lowercased name wins, so "T-shirts" resolves
//! to `t-shirt` rather than `shirt`.

/// Base quantity when no keyword matches
pub const DEFAULT_BASE_QUANTITY: u32 = 1;

/// Cap when no keyword matches
pub const DEFAULT_MAX_QUANTITY: u32 = 2;

/// Keyword → quantity per seven days, in match priority order
pub const BASE_QUANTITIES: [(&str, u32); 15] = [
    ("t-shirt", 7),
    ("shirt", 7),
    ("underwear", 7),
    ("socks", 7),
    ("pants", 4),
    ("shorts", 4),
    ("sweater", 2),
    ("jacket", 1),
    ("coat", 1),
    ("boots", 1),
    ("shoes", 1),
    ("sandals", 1),
    ("scarf", 1),
    ("hat", 1),
    ("gloves", 1),
];

/// Keyword → maximum quantity, in match priority order
pub const MAX_QUANTITIES: [(&str, u32); 7] = [
    ("t-shirt", 10),
    ("shirt", 10),
    ("underwear", 10),
    ("socks", 10),
    ("pants", 6),
    ("shorts", 6),
    ("sweater", 3),
];

fn first_match(table: &[(&str, u32)], lowered: &str) -> Option<u32> {
    table
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|&(_, value)| value)
}

/// Quantity to pack of `item` for a trip of `days` inclusive days.
///
/// Result is `ceil(base * days / 7)` clamped to `[1, max]`.
#[must_use]
pub fn quantity(item: &str, days: u32) -> u32 {
    let lowered = item.to_lowercase();
    let base = first_match(&BASE_QUANTITIES, &lowered).unwrap_or(DEFAULT_BASE_QUANTITY);
    let max = first_match(&MAX_QUANTITIES, &lowered).unwrap_or(DEFAULT_MAX_QUANTITY);

    let raw = (u64::from(base) * u64::from(days)).div_ceil(7);
    let raw = u32::try_from(raw).unwrap_or(u32::MAX);
    let result = raw.clamp(1, max);

    tracing::trace!(item, days, base, max, result, "quantity computed");
    result
}
