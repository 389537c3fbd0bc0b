//! Strongly typed, zero-cost identifier wrappers and the allocator that
//! hands them out.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` so tests
//! can build literal IDs, but production code obtains them from an
//! [`IdAllocator`] owned by the building or dispatcher.  There is no
//! process-wide counter: two simulations in one process never share IDs.

use std::fmt;
use std::marker::PhantomData;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl Sequential for $name {
            #[inline]
            fn from_seq(n: u64) -> Self {
                $name(n as $inner)
            }
        }
    };
}

/// IDs that can be minted from a monotonically increasing sequence number.
pub trait Sequential: Copy {
    fn from_seq(n: u64) -> Self;
}

typed_id! {
    /// Identity of an elevator car.  Assigned once at building construction.
    pub struct CarId(u32);
}

typed_id! {
    /// Identity of a travel request.  Assigned at submission, in arrival order.
    pub struct RequestId(u64);
}

// ── IdAllocator ───────────────────────────────────────────────────────────────

/// Hands out consecutive IDs starting at 0.
///
/// One allocator per ID space per simulation instance.
#[derive(Debug, Clone)]
pub struct IdAllocator<T> {
    next:   u64,
    marker: PhantomData<T>,
}

impl<T: Sequential> IdAllocator<T> {
    pub fn new() -> Self {
        Self { next: 0, marker: PhantomData }
    }

    /// Return the next unused ID.
    pub fn allocate(&mut self) -> T {
        let id = T::from_seq(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    pub fn issued(&self) -> u64 {
        self.next
    }
}

impl<T: Sequential> Default for IdAllocator<T> {
    fn default() -> Self {
        Self::new()
    }
}
