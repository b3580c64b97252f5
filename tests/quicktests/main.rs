//! Property tests exercising the public API of `OrderedTree` against `BTreeSet`.

use quickcheck::{Arbitrary, Gen};

mod ordered;

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<E> {
    /// Insert the element into the data structure
    Insert(E),
    /// Delete the element from the data structure
    Delete(E),
}

impl<E> Arbitrary for Op<E>
where
    E: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(E::arbitrary(g))
        } else {
            Op::Delete(E::arbitrary(g))
        }
    }
}
