use serde::{Deserialize, Serialize};

/// Read-only view over a value whose owner decides when it may change.
///
/// `ProtectedCell` derefs to `T` but deliberately has no `DerefMut`, so holding
/// `&mut ProtectedCell<T>` is not enough to poke at fields. Mutation goes
/// through [`ProtectedCell::replace`], which makes every write to the live
/// scoreboard easy to find.
///
/// ```rust
/// # use dice_oracle::utils::ProtectedCell;
/// let mut cell = ProtectedCell::new(vec![1u8, 2]);
/// assert_eq!(cell.len(), 2);
///
/// // cell.push(3); // does not compile
///
/// let old = ProtectedCell::replace(&mut cell, vec![6]);
/// assert_eq!(old, vec![1, 2]);
/// assert_eq!(*cell, vec![6]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ProtectedCell<T> {
    value: T,
}

impl<T> ProtectedCell<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Swaps in `value`, handing back what was there.
    pub fn replace(cell: &mut Self, value: T) -> T {
        std::mem::replace(&mut cell.value, value)
    }
}

impl<T> std::ops::Deref for ProtectedCell<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
