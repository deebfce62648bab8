//! English plural forms for counted units.

/// `"1 day"`, `"3 days"`.
pub fn count_of(n: i64, singular: &str, plural: &str) -> String {
    let noun = if n == 1 { singular } else { plural };
    format!("{n} {noun}")
}
