//! Read-only views over contiguous storage.

use std::{
    fmt,
    ops::{Index, Range},
};

mod cmp;

mod iter;
pub use iter::Iter;

/// A non-owning, read-only view of a contiguous sequence of elements.
///
/// A view borrows from its source container and holds only the address and
/// length of the viewed run; copying a view copies the borrow, not the data.
/// References handed out by accessors live as long as the source borrow
/// `'a`, not just as long as the view itself.
///
/// Views can be constructed from fixed-size arrays, vectors, and slices via
/// [`From`], or from raw storage via [`View::from_raw_parts`] and
/// [`View::from_ptr_range`]. See the [crate docs](crate) for the checked
/// versus panicking access contract.
#[derive(Debug)]
pub struct View<'a, T> {
    data: &'a [T],
}

static_assertions::assert_eq_size!(View<'static, u8>, [usize; 2]);
static_assertions::assert_impl_all!(View<'static, u8>: Copy, Send, Sync);

impl<'a, T> Clone for View<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for View<'a, T> {}

impl<'a, T> View<'a, T> {
    /// Returns a raw pointer to the first element of the view.
    ///
    /// The pointer may dangle if the view is empty, and must not be read
    /// past `as_ptr() + len()` elements.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns the viewed elements as a slice outliving the view itself.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the element at `index`, or an [`OutOfRangeError`] if
    /// `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&'a T, OutOfRangeError> {
        self.get(index).ok_or(OutOfRangeError {
            index,
            len: self.data.len(),
        })
    }

    /// Returns the first element of the view, or `None` if it is empty.
    pub fn first(&self) -> Option<&'a T> {
        self.data.first()
    }

    /// Creates a view over the half-open pointer range `[start, end)`.
    ///
    /// The length is computed from the pointer distance in O(1).
    ///
    /// # Safety
    ///
    /// Both pointers must derive from the same allocation, with `start <=
    /// end`, `start` non-null and aligned, and the range addressing
    /// initialized elements that remain live and unmodified for `'a`.
    #[allow(unsafe_code)]
    pub unsafe fn from_ptr_range(range: Range<*const T>) -> Self {
        let len = range.end.offset_from(range.start) as usize;
        Self::from_raw_parts(range.start, len)
    }

    /// Creates a view over `len` elements starting at `data`.
    ///
    /// # Safety
    ///
    /// `data` must be non-null, aligned, and address `len` contiguous
    /// initialized elements that remain live and unmodified for `'a`.
    #[allow(unsafe_code)]
    pub unsafe fn from_raw_parts(data: *const T, len: usize) -> Self {
        Self {
            data: std::slice::from_raw_parts(data, len),
        }
    }

    /// Returns the element at `index`, or `None` if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.data.get(index)
    }

    /// Returns `true` if the view contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an iterator over the elements of the view in order.
    ///
    /// The iterator is double-ended, so `iter().rev()` gives reverse order.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(*self)
    }

    /// Returns the last element of the view, or `None` if it is empty.
    pub fn last(&self) -> Option<&'a T> {
        self.data.last()
    }

    /// Returns the number of elements in the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Creates a view over an existing slice.
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    /// Copies the view into an owning fixed-size array of length `N`.
    ///
    /// `N` is not validated against the view's length: for each index `i` in
    /// `0..N`, the result holds the element at `i` if `i < self.len()`, and
    /// `T::default()` otherwise. Requesting `N` beyond the view's length
    /// therefore pads with defaults rather than failing; this mirrors the
    /// behavior of the design this crate derives from.
    pub fn to_array<const N: usize>(&self) -> [T; N]
    where
        T: Clone + Default,
    {
        std::array::from_fn(|i| self.get(i).cloned().unwrap_or_default())
    }

    /// Copies the view into an owning vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        Vec::from_iter(self.iter().cloned())
    }
}

impl<'a, T> Default for View<'a, T> {
    fn default() -> Self {
        Self { data: &[] }
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for View<'a, T> {
    fn from(data: &'a [T; N]) -> Self {
        Self { data }
    }
}

impl<'a, T> From<&'a [T]> for View<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self { data }
    }
}

impl<'a, T> From<&'a Vec<T>> for View<'a, T> {
    fn from(data: &'a Vec<T>) -> Self {
        Self { data }
    }
}

impl<'a, T> Index<usize> for View<'a, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("index out of bounds")
    }
}

/// The error returned by [`View::at`] for an out-of-range index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OutOfRangeError {
    index: usize,
    len: usize,
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let OutOfRangeError { index, len } = self;
        write!(f, "index {index} out of range for view of length {len}")
    }
}

impl std::error::Error for OutOfRangeError {}
