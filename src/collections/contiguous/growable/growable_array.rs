use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::Buffer;
use super::error::{NotFound, OutOfRange};
use crate::util::result::ResultExtension;

const INITIAL_CAP: usize = 1;
const GROWTH_FACTOR: usize = 2;

/// A variable length contiguous collection over a manually managed [`Buffer<T>`].
///
/// The capacity starts at exactly 1 and doubles whenever the length would exceed it, by allocating
/// a replacement buffer, copying every live slot across positionally and discarding the old buffer
/// whole. The capacity never shrinks.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the GrowableArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `remove_value` | `O(n)` |
///
/// \* Amortized over any sequence of pushes; a push which has to grow the buffer takes `O(n)`.
pub struct GrowableArray<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> GrowableArray<T> {
    /// Creates an empty GrowableArray with capacity exactly 1.
    ///
    /// # Examples
    /// ```
    /// # use dsa_exercises::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<u8> = GrowableArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 1);
    /// ```
    pub fn new() -> GrowableArray<T> {
        GrowableArray {
            buf: Buffer::new(INITIAL_CAP),
            len: 0,
        }
    }

    /// Returns the length of the GrowableArray (the number of slots in use).
    ///
    /// # Examples
    /// ```
    /// # use dsa_exercises::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<_> = (1_u8..=3).collect();
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the GrowableArray contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use dsa_exercises::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<u8> = GrowableArray::new();
    /// assert!(arr.is_empty());
    /// arr.push(1);
    /// assert!(!arr.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity (the physical slot count of the underlying buffer). Always a
    /// power of two, and always at least [`len`](GrowableArray::len).
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns a reference to the element at the provided index.
    ///
    /// # Errors
    /// Fails with [`OutOfRange`] if `index >= len`. An empty GrowableArray has no valid index, so
    /// `get(0)` fails too.
    ///
    /// # Examples
    /// ```
    /// # use dsa_exercises::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<_> = (10_u8..13).collect();
    /// assert_eq!(arr.get(1), Ok(&11));
    /// assert!(arr.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        self.check_index(index)?;

        // SAFETY: index < len, so the slot is initialized.
        Ok(unsafe { self.buf[index].assume_init_ref() })
    }

    /// Returns a mutable reference to the element at the provided index.
    ///
    /// # Errors
    /// Fails with [`OutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.check_index(index)?;

        // SAFETY: index < len, so the slot is initialized.
        Ok(unsafe { self.buf[index].assume_init_mut() })
    }

    /// Appends the provided value to the end of the GrowableArray, doubling the capacity first if
    /// the buffer is full.
    ///
    /// # Examples
    /// ```
    /// # use dsa_exercises::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::new();
    /// for i in 0..=5 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: The capacity has just been adjusted to support the addition of the new item, and
        // slots >= len hold nothing that needs dropping.
        unsafe { self.buf.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Inserts the provided value at the given index, shifting the elements at `index..len` one
    /// slot toward the end. `index == len` is valid and appends.
    ///
    /// # Errors
    /// Fails with [`OutOfRange`] if `index > len`, before any mutation takes place.
    ///
    /// # Examples
    /// ```
    /// # use dsa_exercises::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = (0_u8..3).collect();
    /// arr.insert(1, 100)?;
    /// arr.insert(4, 200)?;
    /// assert_eq!(&*arr, &[0, 100, 1, 2, 200]);
    /// # Ok::<_, dsa_exercises::collections::contiguous::growable::error::OutOfRange>(())
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        if index > self.len {
            return Err(OutOfRange { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        // Carry each displaced element forward one slot; nothing is overwritten before it moves.
        let mut prev = MaybeUninit::new(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.buf[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at the provided index, shifting the elements at
    /// `index + 1..len` one slot toward the start to close the gap. The vacated final slot is left
    /// uninitialized. The capacity is not reduced.
    ///
    /// # Errors
    /// Fails with [`OutOfRange`] if `index >= len`, before any mutation takes place.
    ///
    /// # Examples
    /// ```
    /// # use dsa_exercises::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = "Hello world!".chars().collect();
    /// assert_eq!(arr.remove(1), Ok('e'));
    /// assert_eq!(arr.remove(4), Ok(' '));
    /// assert_eq!(arr, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, OutOfRange> {
        self.check_index(index)?;

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index, leaving the last live slot uninit.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.buf[i], next);
        }

        self.len -= 1;
        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than len and therefore initialized.
        Ok(unsafe { next.assume_init() })
    }

    /// Removes and returns the last element, equivalent to `remove(len - 1)`.
    ///
    /// # Errors
    /// Fails with [`OutOfRange`] if the GrowableArray is empty.
    ///
    /// # Examples
    /// ```
    /// # use dsa_exercises::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = (0_u8..3).collect();
    /// assert_eq!(arr.pop(), Ok(2));
    /// assert_eq!(arr.pop(), Ok(1));
    /// assert_eq!(arr.pop(), Ok(0));
    /// assert!(arr.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<T, OutOfRange> {
        match self.len.checked_sub(1) {
            Some(last) => self.remove(last),
            None => Err(OutOfRange { index: 0, len: 0 }),
        }
    }

    /// Removes the first element equal to `target`, scanning from index 0. The scan stops at the
    /// first match, so later duplicates are untouched.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if no element equals `target`.
    ///
    /// # Examples
    /// ```
    /// # use dsa_exercises::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = [5, 3, 5].into_iter().collect();
    /// assert!(arr.remove_value(&5).is_ok());
    /// assert_eq!(&*arr, &[3, 5]);
    /// assert!(arr.remove_value(&9).is_err());
    /// ```
    pub fn remove_value(&mut self, target: &T) -> Result<(), NotFound>
    where
        T: PartialEq,
    {
        let index = self.iter().position(|item| item == target).ok_or(NotFound)?;

        // The scan covered only the live range, so the index is in bounds.
        self.remove(index).throw();
        Ok(())
    }
}

impl<T> GrowableArray<T> {
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap().checked_mul(GROWTH_FACTOR).expect("Capacity overflow!");
        let new_buf = Buffer::new(new_cap);

        // SAFETY: Both buffers are distinct allocations sized for at least len slots, and the
        // first len slots of the old buffer are initialized. The old buffer is replaced wholesale
        // below without dropping its slots, so the values are moved, not duplicated.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.ptr.as_ptr(), new_buf.ptr.as_ptr(), self.len);
        }

        // The old Buffer deallocates here; its contents now live in new_buf.
        self.buf = new_buf;
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), OutOfRange> {
        if index < self.len {
            Ok(())
        } else {
            Err(OutOfRange { index, len: self.len })
        }
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place. The Buffer deallocates itself afterwards.
        for slot in &mut self.buf[..self.len] {
            // SAFETY: Slots below len are initialized and are dropped exactly once, because the
            // whole GrowableArray is going away.
            unsafe { slot.assume_init_drop(); }
        }
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut arr = GrowableArray::new();
        arr.extend(value);
        arr
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Reinterpret *mut MaybeUninit<T> as *const T for the initialized range < len.
        unsafe {
            slice::from_raw_parts(self.buf.ptr.as_ptr().cast(), self.len)
        }
    }
}

impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Reinterpret *mut MaybeUninit<T> as *mut T for the initialized range < len.
        unsafe {
            slice::from_raw_parts_mut(self.buf.ptr.as_ptr().cast(), self.len)
        }
    }
}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for GrowableArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for GrowableArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: GrowableArrays, when used safely rely on unique pointers and are therefore safe for Send
// when T: Send.
unsafe impl<T: Send> Send for GrowableArray<T> {}
// SAFETY: GrowableArray's safe API obeys all rules of the borrow checker, so no interior
// mutability occurs. This means that GrowableArray<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for GrowableArray<T> {}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: Debug> Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
