use crate::core::lattice::geometry::LatticeError;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OccupancyParseError {
    #[error("Genome is empty")]
    Empty,
    #[error("Invalid symbol '{symbol}' at position {position}; expected '0' or '1'")]
    InvalidSymbol { symbol: char, position: usize },
}

/// One flag per lattice site: `true` where the site holds an atom.
///
/// The length is fixed when the vector is built and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Occupancy {
    sites: Vec<bool>,
}

impl Occupancy {
    pub fn new(sites: Vec<bool>) -> Self {
        Self { sites }
    }

    pub fn empty(len: usize) -> Self {
        Self::new(vec![false; len])
    }

    pub fn filled(len: usize) -> Self {
        Self::new(vec![true; len])
    }

    /// Builds an occupancy of `len` sites with atoms at `atoms`.
    ///
    /// Fails on the first index that does not fit.
    pub fn from_atoms(len: usize, atoms: &[usize]) -> Result<Self, LatticeError> {
        let mut sites = vec![false; len];
        for &index in atoms {
            let site = sites
                .get_mut(index)
                .ok_or(LatticeError::IndexOutOfRange { index, len })?;
            *site = true;
        }
        Ok(Self::new(sites))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.sites.get(index).copied()
    }

    /// Callers index with lattice-checked indices; out of range panics.
    #[inline]
    pub fn is_occupied(&self, index: usize) -> bool {
        self.sites[index]
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.sites
    }

    /// Occupied site indices, ascending.
    pub fn atoms(&self) -> Vec<usize> {
        self.sites.iter().positions(|&occupied| occupied).collect()
    }

    pub fn atom_count(&self) -> usize {
        self.sites.iter().filter(|&&occupied| occupied).count()
    }
}

impl From<Vec<bool>> for Occupancy {
    fn from(sites: Vec<bool>) -> Self {
        Self::new(sites)
    }
}

impl FromStr for Occupancy {
    type Err = OccupancyParseError;

    /// Parses `0`/`1` symbols, either whitespace separated (`"1 0 1 1"`) or as a compact run
    /// (`"1011"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sites = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(position, symbol)| match symbol {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(OccupancyParseError::InvalidSymbol { symbol, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if sites.is_empty() {
            return Err(OccupancyParseError::Empty);
        }
        Ok(Self::new(sites))
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .sites
            .iter()
            .map(|&occupied| if occupied { '1' } else { '0' })
            .join(" ");
        f.write_str(&text)
    }
}
