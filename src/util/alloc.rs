use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// A unit type for checking that containers handle elements with no size.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A shared drop counter. Clones hand out to a container all bump the same count when dropped,
/// so a test can read back how many elements the container released.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    /// Creates a counter starting at `value`.
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Every clone counts against the same total, so any two are interchangeable. This also allows a
// CountedDrop to serve as the target of search-by-value operations.
impl PartialEq for CountedDrop {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
