//! A token path paired with the per-hop amounts it produces.

use core::fmt;

use super::{Address, Amount};

/// An evaluated route: `path[i]` is sold for `path[i + 1]`, and
/// `amounts[i]` is the quantity of `path[i]` flowing through that hop.
///
/// `amounts[0]` is what the caller pays; the last entry is what the
/// recipient receives.  Routes are computed fresh per request and never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    path: Vec<Address>,
    amounts: Vec<Amount>,
}

impl Route {
    pub(crate) fn new(path: Vec<Address>, amounts: Vec<Amount>) -> Self {
        debug_assert_eq!(path.len(), amounts.len());
        Self { path, amounts }
    }

    /// The ordered token path.
    #[must_use]
    pub fn path(&self) -> &[Address] {
        &self.path
    }

    /// Per-hop amounts, parallel to [`path`](Self::path).
    #[must_use]
    pub fn amounts(&self) -> &[Amount] {
        &self.amounts
    }

    /// Number of pools traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Amount paid in at the head of the path.
    pub fn amount_in(&self) -> Amount {
        self.amounts.first().copied().unwrap_or_default()
    }

    /// Amount delivered at the tail of the path.
    pub fn amount_out(&self) -> Amount {
        self.amounts.last().copied().unwrap_or_default()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (token, amount)) in self.path.iter().zip(&self.amounts).enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{amount} {token}")?;
        }
        Ok(())
    }
}
