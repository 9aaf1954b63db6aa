//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Type-safe seat index for the three-player table. Rotation always runs
//! in fixed seat order: 0 → 1 → 2 → 0.
//!
//! ## SeatMap
//!
//! One value per seat, indexed by `Seat`. The game roster is a
//! `SeatMap<Player>`, so neighbours are looked up by index rather than held
//! as references.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat at the table, `0..3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    /// Number of seats at the table.
    pub const COUNT: usize = 3;

    /// Create a seat.
    ///
    /// Panics if `id` is not a valid seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < Self::COUNT, "Seat index out of range");
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that acts after this one.
    ///
    /// ```
    /// use rust_landlord::core::Seat;
    ///
    /// assert_eq!(Seat::new(0).next(), Seat::new(1));
    /// assert_eq!(Seat::new(2).next(), Seat::new(0));
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT as u8)
    }

    /// The seat that acted before this one.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self((self.0 + Self::COUNT as u8 - 1) % Self::COUNT as u8)
    }

    /// Iterate over all seats in rotation order.
    pub fn all() -> impl Iterator<Item = Seat> {
        (0..Self::COUNT as u8).map(Seat)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_landlord::core::{Seat, SeatMap};
///
/// let mut steps: SeatMap<u32> = SeatMap::with_value(0);
/// steps[Seat::new(1)] += 1;
/// assert_eq!(steps[Seat::new(1)], 1);
/// assert_eq!(steps[Seat::new(2)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: Seat::all().map(factory).collect(),
        }
    }

    /// Create a SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a SeatMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate over (Seat, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
