use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

const MAX_SIZE: usize = isize::MAX as usize;

/// A fixed-capacity block of possibly uninitialized slots. This is the raw storage behind
/// [`GrowableArray`](super::GrowableArray), which tracks how many leading slots are initialized.
///
/// A Buffer never grows in place: the owner allocates a replacement, copies the live slots across
/// and drops the old Buffer, so no partially copied state is ever observable. Dropping a Buffer
/// only deallocates; slots are `MaybeUninit<T>` and are never dropped here.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Allocates a new Buffer with exactly `cap` uninitialized slots.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn new(cap: usize) -> Buffer<T> {
        let layout = Self::make_layout(cap);

        Buffer {
            ptr: Self::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    /// Returns the physical slot count of the Buffer.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `cap` slots
    /// of type `T`.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        if cap.saturating_mul(size_of::<T>()) > MAX_SIZE {
            panic!("Capacity overflow!")
        }
        Layout::array::<MaybeUninit<T>>(cap).expect("Capacity overflow!")
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout, which covers both zero capacity and zero-sized `T`.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);

        // The slots are MaybeUninit and are the owner's problem; only the allocation goes.
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for Buffer<T> {
    type Target = [MaybeUninit<T>];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(cap) and is therefore valid and properly
        // aligned for (cap * size_of::<T>()) bytes with a length no greater than isize::MAX.
        // MaybeUninit slots are valid regardless of their contents.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.cap)
        }
    }
}

impl<T> DerefMut for Buffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The held data uses Layout::array(cap) and is therefore valid and properly
        // aligned for (cap * size_of::<T>()) bytes with a length no greater than isize::MAX.
        // MaybeUninit slots are valid regardless of their contents.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap)
        }
    }
}

// SAFETY: Buffers, when used safely rely on unique pointers and are therefore safe for Send when
// T: Send.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: Buffer's API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Buffer<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Buffer<T> {}
