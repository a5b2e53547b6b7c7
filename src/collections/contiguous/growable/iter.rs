use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem;
use std::ptr;

use super::{Buffer, GrowableArray};

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // SAFETY: self is forgotten immediately afterwards, so ownership of the Buffer moves into
        // the iterator without a double free.
        let buf = unsafe { ptr::read(&self.buf) };
        let end = self.len;
        mem::forget(self);

        IntoIter {
            buf,
            start: 0,
            end,
        }
    }
}

/// An owned iterator over the elements of a [`GrowableArray`]. See
/// [`GrowableArray::into_iter`](IntoIterator::into_iter).
///
/// Elements not consumed by the time the iterator is dropped are dropped with it, along with the
/// underlying buffer.
pub struct IntoIter<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: Slots in start..end are initialized and not yet yielded. Incrementing start
            // effectively moves the value out of the buffer.
            let value = unsafe { self.buf[self.start].assume_init_read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: Slots in start..end are initialized and not yet yielded. Decrementing end
            // first means this slot is never read again.
            let value = unsafe { self.buf[self.end].assume_init_read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[self.start..self.end] {
            // SAFETY: Slots in start..end are initialized and were never yielded, so this is the
            // only drop they receive. The Buffer deallocates itself afterwards.
            unsafe { slot.assume_init_drop(); }
        }
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &(self.end - self.start))
            .finish()
    }
}
