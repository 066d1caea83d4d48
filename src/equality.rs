//! Predicates deciding whether two states are "the same" for dedup purposes.
//!
//! The container never compares values on its own: whatever predicate it was
//! built with is the whole definition of "no real change". The default is
//! [`structural`], i.e. `PartialEq`. For a composite type that only means a
//! field-by-field comparison if the type's `PartialEq` is derived that way;
//! a hand-written `PartialEq` that compares ids only will dedup states that
//! differ in other fields.

use std::rc::Rc;
use std::sync::Arc;

/// Boxed two-argument equality predicate.
pub type Equality<T> = Box<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// `PartialEq`-based equality.
pub fn structural<T: PartialEq + 'static>() -> Equality<T> {
    Box::new(|a: &T, b: &T| a == b)
}

/// No two states are ever equal, so every assignment is recorded.
pub fn never<T: 'static>() -> Equality<T> {
    Box::new(|_: &T, _: &T| false)
}

/// Reference identity for shared handles: two `Arc`s are equal only when
/// they point at the same allocation.
pub fn arc_identity<U: ?Sized + 'static>() -> Equality<Arc<U>> {
    Box::new(|a: &Arc<U>, b: &Arc<U>| Arc::ptr_eq(a, b))
}

/// `Rc` counterpart of [`arc_identity`].
pub fn rc_identity<U: ?Sized + 'static>() -> Equality<Rc<U>> {
    Box::new(|a: &Rc<U>, b: &Rc<U>| Rc::ptr_eq(a, b))
}
