//! Lists: either empty, or one element in front of another list.

use {
    crate::{
        enumerate::Enumerate,
        product::Product,
        sum::Sum,
    },
    core::{
        fmt,
        hash::{Hash, Hasher},
    },
    std::sync::Arc,
};

/// A persistent singly-linked list:
/// prepending shares the existing list as the new tail
/// instead of copying or mutating it.
pub struct List<T>(Option<Arc<Cell<T>>>);

struct Cell<T> {
    head: T,
    tail: List<T>,
}

/// Iterator over a [`List`], front to back.
#[derive(Debug)]
pub struct Iter<'l, T>(Option<&'l Cell<T>>);

impl<T> List<T> {
    /// The empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(None)
    }

    /// A list with `head` in front of `tail`.
    #[inline]
    #[must_use]
    pub fn cons(head: T, tail: Self) -> Self {
        Self(Some(Arc::new(Cell { head, tail })))
    }

    /// The first element, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.as_deref().map(|cell| &cell.head)
    }

    /// Everything after the first element, if any.
    #[inline]
    #[must_use]
    pub fn rest(&self) -> Option<&Self> {
        self.0.as_deref().map(|cell| &cell.tail)
    }

    /// Whether this is the empty list.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The number of elements (linear time).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Borrow each element, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.0.as_deref())
    }

    /// Copy the elements, front to back, into a vector.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for List<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    #[inline]
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop
        // would overflow the stack on long lists.
        let mut next = self.0.take();
        while let Some(cell) = next {
            next = match Arc::try_unwrap(cell) {
                Ok(mut cell) => cell.tail.0.take(),
                Err(_) => None,
            };
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(Self::new(), |tail, head| Self::cons(head, tail))
    }
}

impl<'l, T> IntoIterator for &'l List<T> {
    type Item = &'l T;
    type IntoIter = Iter<'l, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'l, T> Iterator for Iter<'l, T> {
    type Item = &'l T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.0?;
        self.0 = cell.tail.0.as_deref();
        Some(&cell.head)
    }
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl<T: fmt::Debug> fmt::Debug for Cell<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.head, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        for element in self {
            element.hash(state);
        }
        self.len().hash(state);
    }
}

impl<T> From<List<T>> for Vec<T>
where
    T: Clone,
{
    #[inline]
    fn from(list: List<T>) -> Self {
        list.to_vec()
    }
}

/// Lists of values from `elements`.
/// The empty list has size 1, and prepending an element
/// adds 1 plus the size of that element:
/// a list of `k` elements has size `1 + k + (sum of element sizes)`.
///
/// `elements` may itself refer (recursively) to the enumeration being defined,
/// e.g. a [`Recursive`](crate::sum::Recursive) handle to a type containing lists of itself.
#[inline]
#[must_use]
pub fn list_of<E>(elements: E) -> Arc<Sum<List<E::Item>>>
where
    E: Enumerate + 'static,
    E::Item: 'static,
{
    Sum::recursive(move |this| {
        Sum::empty()
            .with(Product::new((), |()| List::new()))
            .with(Product::new((elements, this), |(head, tail)| {
                List::cons(head, tail)
            }))
    })
}
