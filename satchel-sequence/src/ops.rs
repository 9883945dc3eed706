use crate::error;
use crate::sequence::Sequence;

impl<T: Clone> Sequence<T> {
    /// Deduplicate the sequence with a caller-supplied equivalence
    /// predicate.
    ///
    /// Each element is tested against every element already retained, with
    /// the candidate as the first argument; it is retained only if no test
    /// returns `true`. The first-encountered representative of each
    /// equivalence class wins and encounter order is preserved.
    ///
    /// The predicate is not required to be symmetric or transitive, so no
    /// hash or sort based shortcut is possible. This is quadratic in the
    /// worst case.
    ///
    /// Fails with [`Error::InvalidArgument`](error::Error::InvalidArgument)
    /// on the absent value, before any traversal.
    pub fn distinct_by<P>(&self, predicate: P) -> error::Result<Sequence<T>>
    where
        P: Fn(&T, &T) -> bool,
    {
        let items = self.items()?;
        let mut distinct: Vec<T> = Vec::new();
        'outer: for item in items {
            for seen in &distinct {
                if predicate(item, seen) {
                    continue 'outer;
                }
            }
            distinct.push(item.clone());
        }
        Ok(distinct.into())
    }

    /// Fold the sequence into a single output value, seeding from the
    /// first element.
    ///
    /// The empty sequence produces `U::default()`, the zero value of the
    /// output type. Otherwise the running value is seeded with
    /// `converter(first)` and every remaining element is folded in with
    /// `accumulator`; for a singleton the accumulator is never invoked.
    ///
    /// Every element contributes to the result: the running value is
    /// reassigned on each step. A truncated variant that stops folding
    /// after the second element would make the result independent of the
    /// rest of the sequence; that is a defect, not a contract, and it is
    /// not what this operation does.
    ///
    /// Fails with [`Error::InvalidArgument`](error::Error::InvalidArgument)
    /// on the absent value, before any traversal.
    pub fn fold_sum<U, A, C>(&self, accumulator: A, converter: C) -> error::Result<U>
    where
        U: Default,
        A: Fn(U, &T) -> U,
        C: Fn(&T) -> U,
    {
        let mut items = self.items()?;
        let first = match items.next() {
            Some(first) => first,
            None => return Ok(U::default()),
        };
        let mut output = converter(first);
        for item in items {
            output = accumulator(output, item);
        }
        Ok(output)
    }
}
