//! Division direction.

/// Which way an inexact quotient goes.
///
/// Outputs paid by a pool round [`Down`](Self::Down); amounts a pool
/// demands round [`Up`](Self::Up).  The remainder always stays with the
/// reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor.
    Down,
}

impl Rounding {
    /// `true` for [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}
