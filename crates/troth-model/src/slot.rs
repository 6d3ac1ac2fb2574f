// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use troth_core::utils::index::{TypedIndex, TypedIndexTag};

/// A partner cell that may be vacant.
///
/// Instead of using `Option<TypedIndex<T>>`, this type uses a sentinel
/// encoding to avoid the additional discriminant that `Option` typically
/// introduces for integer types. The partner maps of a matching are read on
/// every proposal, so keeping each cell to a single machine word improves
/// cache locality and reduces memory traffic.
///
/// Encoding:
/// - Values below `usize::MAX` represent a concrete partner index.
/// - `usize::MAX` is reserved to indicate vacancy (no partner).
///
/// This convention assumes agent indices never reach `usize::MAX`, which
/// holds for any instance that fits in memory.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot<T>(usize, std::marker::PhantomData<T>);

impl<T> Slot<T> {
    const VACANT_SENTINEL: usize = usize::MAX;

    /// Creates a vacant `Slot`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::{index::StudentIndexTag, slot::Slot};
    ///
    /// let cell: Slot<StudentIndexTag> = Slot::vacant();
    /// assert!(cell.is_vacant());
    /// ```
    #[inline]
    pub const fn vacant() -> Self {
        Slot(Self::VACANT_SENTINEL, std::marker::PhantomData)
    }

    /// Creates a `Slot` occupied by the given partner index.
    ///
    /// # Panics
    ///
    /// This function will panic if the index equals the vacancy sentinel
    /// (`usize::MAX`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::{index::{StudentIndex, StudentIndexTag}, slot::Slot};
    ///
    /// let cell: Slot<StudentIndexTag> = Slot::occupied(StudentIndex::new(4));
    /// assert!(cell.is_occupied());
    /// assert_eq!(cell.raw(), 4);
    /// ```
    pub fn occupied(index: TypedIndex<T>) -> Self {
        assert!(
            index.get() != Self::VACANT_SENTINEL,
            "called `Slot::occupied` with the vacancy sentinel index {}",
            index.get()
        );

        Slot(index.get(), std::marker::PhantomData)
    }

    /// Creates a `Slot` from an `Option<TypedIndex<T>>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::{index::{HospitalIndex, HospitalIndexTag}, slot::Slot};
    ///
    /// let cell: Slot<HospitalIndexTag> = Slot::from_option(Some(HospitalIndex::new(2)));
    /// assert!(cell.is_occupied());
    ///
    /// let cell: Slot<HospitalIndexTag> = Slot::from_option(None);
    /// assert!(cell.is_vacant());
    /// ```
    #[inline]
    pub fn from_option(value: Option<TypedIndex<T>>) -> Self {
        match value {
            Some(index) => Self::occupied(index),
            None => Self::vacant(),
        }
    }

    /// Checks if the `Slot` is vacant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::{index::StudentIndexTag, slot::Slot};
    ///
    /// let cell: Slot<StudentIndexTag> = Slot::vacant();
    /// assert!(cell.is_vacant());
    /// ```
    #[inline]
    pub const fn is_vacant(&self) -> bool {
        self.0 == Self::VACANT_SENTINEL
    }

    /// Checks if the `Slot` holds a partner.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::{index::{StudentIndex, StudentIndexTag}, slot::Slot};
    ///
    /// let cell: Slot<StudentIndexTag> = Slot::occupied(StudentIndex::new(0));
    /// assert!(cell.is_occupied());
    /// ```
    #[inline]
    pub const fn is_occupied(&self) -> bool {
        !self.is_vacant()
    }

    /// Converts the `Slot` into an `Option<TypedIndex<T>>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::{index::{StudentIndex, StudentIndexTag}, slot::Slot};
    ///
    /// let cell: Slot<StudentIndexTag> = Slot::occupied(StudentIndex::new(3));
    /// assert_eq!(cell.get(), Some(StudentIndex::new(3)));
    ///
    /// let cell: Slot<StudentIndexTag> = Slot::vacant();
    /// assert_eq!(cell.get(), None);
    /// ```
    #[inline]
    pub fn get(&self) -> Option<TypedIndex<T>> {
        if self.is_vacant() {
            None
        } else {
            Some(TypedIndex::new(self.0))
        }
    }

    /// Returns the raw value, including the sentinel if vacant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use troth_model::{index::{StudentIndex, StudentIndexTag}, slot::Slot};
    ///
    /// let cell: Slot<StudentIndexTag> = Slot::occupied(StudentIndex::new(7));
    /// assert_eq!(cell.raw(), 7);
    /// ```
    #[inline]
    pub const fn raw(&self) -> usize {
        self.0
    }
}

impl<T> std::fmt::Debug for Slot<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_vacant() {
            write!(f, "Slot(Vacant)")
        } else {
            write!(f, "Slot({}({}))", T::NAME, self.0)
        }
    }
}

impl<T> std::fmt::Display for Slot<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_vacant() {
            write!(f, "Slot(Vacant)")
        } else {
            write!(f, "Slot({}({}))", T::NAME, self.0)
        }
    }
}

impl<T> From<Option<TypedIndex<T>>> for Slot<T> {
    #[inline]
    fn from(value: Option<TypedIndex<T>>) -> Self {
        Slot::from_option(value)
    }
}

impl<T> From<Slot<T>> for Option<TypedIndex<T>> {
    #[inline]
    fn from(val: Slot<T>) -> Self {
        val.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{StudentIndex, StudentIndexTag};

    type StudentSlot = Slot<StudentIndexTag>;

    #[test]
    fn test_vacant_and_occupied() {
        let vacant = StudentSlot::vacant();
        assert!(vacant.is_vacant());
        assert!(!vacant.is_occupied());
        assert_eq!(vacant.get(), None);

        let taken = StudentSlot::occupied(StudentIndex::new(5));
        assert!(taken.is_occupied());
        assert_eq!(taken.get(), Some(StudentIndex::new(5)));
        assert_eq!(taken.raw(), 5);
    }

    #[test]
    fn test_option_roundtrip() {
        let some = StudentSlot::from_option(Some(StudentIndex::new(2)));
        assert_eq!(Option::<StudentIndex>::from(some), Some(StudentIndex::new(2)));

        let none = StudentSlot::from_option(None);
        assert_eq!(Option::<StudentIndex>::from(none), None);
    }

    #[test]
    fn test_single_machine_word() {
        assert_eq!(
            std::mem::size_of::<StudentSlot>(),
            std::mem::size_of::<usize>()
        );
    }

    #[test]
    fn test_debug_and_display() {
        let vacant = StudentSlot::vacant();
        assert_eq!(format!("{}", vacant), "Slot(Vacant)");

        let taken = StudentSlot::occupied(StudentIndex::new(1));
        assert_eq!(format!("{}", taken), "Slot(StudentIndex(1))");
        assert_eq!(format!("{:?}", taken), "Slot(StudentIndex(1))");
    }

    #[test]
    #[should_panic(expected = "called `Slot::occupied` with the vacancy sentinel index")]
    fn test_occupied_rejects_sentinel() {
        let _ = StudentSlot::occupied(StudentIndex::new(usize::MAX));
    }
}
