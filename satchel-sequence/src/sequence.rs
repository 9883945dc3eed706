use std::rc::Rc;

use crate::error;

/// An ordered sequence of values.
///
/// A sequence is materialized up front but traversed lazily; traversal
/// never mutates it. The representation distinguishes the empty sequence,
/// the singleton and the general case so the common small shapes carry no
/// allocation.
///
/// `Absent` is not a sequence at all but the absent value: a stand-in for
/// an input that was never supplied. Traversing it is an error, detected
/// before any elements are visited.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence<T> {
    /// No value was supplied at all.
    Absent,
    /// The empty sequence.
    Empty,
    /// A sequence of exactly one value.
    One(T),
    /// A sequence of two or more values.
    Many(Rc<[T]>),
}

impl<T> Sequence<T> {
    /// Construct an empty sequence.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Construct the absent value.
    pub fn absent() -> Self {
        Self::Absent
    }

    /// Construct a singleton sequence.
    ///
    /// This is a named constructor rather than a `From<T>` impl: a
    /// blanket `From<T>` next to `From<Vec<T>>` would make
    /// `Sequence::from(vec![...])` ambiguous between an element type of
    /// `T` and of `Vec<T>` at every call site.
    pub fn single(item: T) -> Self {
        Self::One(item)
    }

    /// Check whether this is the absent value.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Check whether the sequence is empty.
    ///
    /// The absent value holds no items, so it also reports empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the length of the sequence.
    pub fn len(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    /// Get the item at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&T> {
        match self {
            Self::Absent => None,
            Self::Empty => None,
            Self::One(item) => {
                if index == 0 {
                    Some(item)
                } else {
                    None
                }
            }
            Self::Many(items) => items.get(index),
        }
    }

    /// Take the single item out of a singleton sequence.
    pub fn one(self) -> error::Result<T> {
        match self {
            Self::Absent => Err(error::Error::InvalidArgument),
            Self::One(item) => Ok(item),
            Self::Empty | Self::Many(_) => Err(error::Error::NotSingleton),
        }
    }

    /// Take the optional item out of an empty or singleton sequence.
    pub fn option(self) -> error::Result<Option<T>> {
        match self {
            Self::Absent => Err(error::Error::InvalidArgument),
            Self::Empty => Ok(None),
            Self::One(item) => Ok(Some(item)),
            Self::Many(_) => Err(error::Error::NotSingleton),
        }
    }

    /// Access an iterator over the items in the sequence.
    ///
    /// This is fallible, as the absent value is not iterable.
    pub fn items(&self) -> error::Result<Iter<'_, T>> {
        match self {
            Self::Absent => Err(error::Error::InvalidArgument),
            Self::Empty => Ok(Iter::Empty),
            Self::One(item) => Ok(Iter::One(std::iter::once(item))),
            Self::Many(items) => Ok(Iter::Many(items.iter())),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(mut items: Vec<T>) -> Self {
        match items.len() {
            0 => Self::Empty,
            1 => Self::One(items.remove(0)),
            _ => Self::Many(items.into()),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

/// Iterator over the items of a present sequence.
pub enum Iter<'a, T> {
    Empty,
    One(std::iter::Once<&'a T>),
    Many(std::slice::Iter<'a, T>),
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Iter::Empty => None,
            Iter::One(inner) => inner.next(),
            Iter::Many(inner) => inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Iter::Empty => (0, Some(0)),
            Iter::One(inner) => inner.size_hint(),
            Iter::Many(inner) => inner.size_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_from_vec_normalizes() {
        assert_eq!(Sequence::from(Vec::<i64>::new()), Sequence::Empty);
        assert_eq!(Sequence::from(vec![1]), Sequence::One(1));
        assert_eq!(Sequence::from(vec![1, 2]), Sequence::Many(vec![1, 2].into()));
    }

    #[test]
    fn test_from_vec_infers_element_type() {
        // no element-type annotation anywhere: Vec<i32> must pin the
        // sequence to Sequence<i32>, not Sequence<Vec<i32>>
        let sequence = Sequence::from(vec![1, 2]);
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.get(0), Some(&1));
    }

    #[test]
    fn test_collect() {
        let sequence = (1..=3).collect::<Sequence<_>>();
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.get(2), Some(&3));
    }

    #[test]
    fn test_one() {
        let sequence = Sequence::single(5);
        assert_eq!(sequence.one(), Ok(5));
    }

    #[test]
    fn test_one_of_empty_is_error() {
        let sequence = Sequence::<i64>::empty();
        assert_eq!(sequence.one(), Err(Error::NotSingleton));
    }

    #[test]
    fn test_option() {
        assert_eq!(Sequence::<i64>::empty().option(), Ok(None));
        assert_eq!(Sequence::single(7).option(), Ok(Some(7)));
        assert_eq!(
            Sequence::from(vec![1, 2]).option(),
            Err(Error::NotSingleton)
        );
    }

    #[test]
    fn test_absent_is_not_iterable() {
        let sequence = Sequence::<i64>::absent();
        assert!(matches!(sequence.items(), Err(Error::InvalidArgument)));
    }

    #[test]
    fn test_items_in_order() {
        let sequence = Sequence::from(vec!["a", "b", "c"]);
        let items = sequence.items().unwrap().copied().collect::<Vec<_>>();
        assert_eq!(items, vec!["a", "b", "c"]);
    }
}
