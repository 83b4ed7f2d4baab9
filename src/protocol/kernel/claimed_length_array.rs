use thiserror::Error;

use super::side_effect::IsEmpty;

/// A fixed-capacity array together with the number of items that are in use.
///
/// Circuits consume arrays of a fixed width. Items at positions
/// `length..N` are padding and are never looked at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimedLengthArray<T, const N: usize> {
    array: [T; N],
    length: usize,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ClaimedLengthArrayError {
    #[error("{num_items} items do not fit in an array of capacity {capacity}")]
    TooManyItems { num_items: usize, capacity: usize },
    #[error("non-empty item at index {index} is placed after an empty item")]
    NonEmptyAfterEmpty { index: usize },
}

/// Count the non-empty items at the front of `items`.
///
/// All non-empty items must precede all empty items.
pub fn count_accumulated_items<T: IsEmpty>(items: &[T]) -> Result<usize, ClaimedLengthArrayError> {
    let mut num_items = 0;
    for (index, item) in items.iter().enumerate() {
        if item.is_empty() {
            continue;
        }
        if num_items != index {
            return Err(ClaimedLengthArrayError::NonEmptyAfterEmpty { index });
        }
        num_items += 1;
    }

    Ok(num_items)
}

impl<T: Copy + Default, const N: usize> ClaimedLengthArray<T, N> {
    pub fn empty() -> Self {
        Self {
            array: [T::default(); N],
            length: 0,
        }
    }

    /// Copy `items` into the front of a padded array.
    pub fn from_slice(items: &[T]) -> Result<Self, ClaimedLengthArrayError> {
        if items.len() > N {
            return Err(ClaimedLengthArrayError::TooManyItems {
                num_items: items.len(),
                capacity: N,
            });
        }

        let mut array = [T::default(); N];
        array[..items.len()].copy_from_slice(items);

        Ok(Self {
            array,
            length: items.len(),
        })
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The items in use.
    pub fn active(&self) -> &[T] {
        &self.array[..self.length]
    }

    /// The item at `index`, if `index` is within the active range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.active().get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.active().iter()
    }

    /// The full backing array, padding included.
    pub fn as_array(&self) -> &[T; N] {
        &self.array
    }
}

impl<T: Copy + Default + IsEmpty, const N: usize> ClaimedLengthArray<T, N> {
    /// Wrap an array whose padding is made of empty items. The length is
    /// inferred from the position of the first empty item.
    pub fn from_padded(array: [T; N]) -> Result<Self, ClaimedLengthArrayError> {
        let length = count_accumulated_items(&array)?;
        Ok(Self { array, length })
    }
}

impl<T: Copy + Default, const N: usize> Default for ClaimedLengthArray<T, N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Copy + Default, const N: usize> TryFrom<&[T]> for ClaimedLengthArray<T, N> {
    type Error = ClaimedLengthArrayError;

    fn try_from(items: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(items)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a ClaimedLengthArray<T, N>
where
    T: Copy + Default,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
