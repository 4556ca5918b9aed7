//! Character-transition strategies.
//!
//! A strategy decides which glyphs a rolling position passes through when
//! its character changes. Strategies are polymorphic — the widget holds a
//! `Box<dyn CharStrategy>` and anything implementing the trait is accepted.

use crate::order::{CharPool, EMPTY_CHAR};

/// Decides the glyph path for one character transition.
pub trait CharStrategy: Send + Sync {
    /// Concrete type name of this strategy.
    ///
    /// Resolved per implementation through the default body, so it stays
    /// correct when called through `dyn CharStrategy`.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Glyph path from `from` to `to` within `pool`, inclusive of both ends.
    ///
    /// Characters outside the pool produce the direct two-step path. The
    /// [`EMPTY_CHAR`] placeholder never appears as an intermediate step,
    /// only as an endpoint.
    fn find_path(&self, from: char, to: char, pool: &CharPool) -> Vec<char>;
}

/// Removes pass-through placeholder glyphs, keeping them as endpoints.
fn drop_placeholder(mut path: Vec<char>, from: char, to: char) -> Vec<char> {
    path.retain(|&c| c != EMPTY_CHAR || c == from || c == to);
    path
}

/// Rolls the shortest direction through the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalAnimation;

impl CharStrategy for NormalAnimation {
    fn find_path(&self, from: char, to: char, pool: &CharPool) -> Vec<char> {
        let (Some(start), Some(end)) = (pool.index_of(from), pool.index_of(to)) else {
            return vec![from, to];
        };
        let chars: Vec<char> = pool.iter().collect();
        let path = if start <= end {
            chars[start..=end].to_vec()
        } else {
            chars[end..=start].iter().rev().copied().collect()
        };
        drop_placeholder(path, from, to)
    }
}

/// Always rolls forward, wrapping past the end of the pool.
///
/// Matches the carry behaviour of counters: `9 → 0` passes the pool
/// boundary instead of rolling backwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarryBitAnimation;

impl CharStrategy for CarryBitAnimation {
    fn find_path(&self, from: char, to: char, pool: &CharPool) -> Vec<char> {
        let (Some(start), Some(end)) = (pool.index_of(from), pool.index_of(to)) else {
            return vec![from, to];
        };
        let chars: Vec<char> = pool.iter().collect();
        let mut path = Vec::new();
        let mut i = start;
        loop {
            path.push(chars[i]);
            if i == end {
                break;
            }
            i = (i + 1) % chars.len();
        }
        drop_placeholder(path, from, to)
    }
}
