use std::fmt::{Debug, Formatter};
use std::ops::Deref;

/// Either a borrowed routee picked from the current set, or one the routing
/// logic produced on the spot (e.g. [`NoRoutee`](crate::routing::routee::no_routee::NoRoutee)).
pub enum MaybeRef<'a, T> {
    Ref(&'a T),
    Own(T),
}

impl<'a, T> MaybeRef<'a, T> {
    pub fn is_own(&self) -> bool {
        matches!(self, MaybeRef::Own(_))
    }
}

impl<'a, T> MaybeRef<'a, T> where T: Clone {
    pub fn into_owned(self) -> T {
        match self {
            MaybeRef::Ref(value) => value.clone(),
            MaybeRef::Own(value) => value,
        }
    }
}

impl<'a, T> Deref for MaybeRef<'a, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match self {
            MaybeRef::Ref(value) => value,
            MaybeRef::Own(value) => value,
        }
    }
}

impl<'a, T> Debug for MaybeRef<'a, T> where T: Debug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MaybeRef::Ref(value) => f.debug_struct("MaybeRef").field("ref", value).finish(),
            MaybeRef::Own(value) => f.debug_struct("MaybeRef").field("own", value).finish(),
        }
    }
}
