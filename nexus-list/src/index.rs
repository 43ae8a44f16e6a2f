//! Slot index trait used for node links.
//!
//! Links between nodes are plain storage indices. An absent link (the
//! `prev` of the head sentinel, the `next` of the tail sentinel, a
//! detached cursor) is encoded with a reserved `NONE` value instead of
//! `Option<Idx>`, which keeps a node at two words of link overhead.

/// A copyable slot index with a reserved "none" value.
///
/// # Example
///
/// ```
/// use nexus_list::Index;
///
/// let idx: usize = 5;
/// assert!(idx.is_some());
/// assert!(usize::NONE.is_none());
/// ```
pub trait Index: Copy + Eq + core::fmt::Debug {
    /// Reserved value meaning "no slot".
    const NONE: Self;

    /// Returns `true` if this is the reserved value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this names a slot.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Widens to `usize`.
    fn as_usize(self) -> usize;

    /// Narrows from `usize`. Callers guarantee the value fits.
    fn from_usize(val: usize) -> Self;
}

macro_rules! impl_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    debug_assert!(val < <$ty>::MAX as usize, "index overflows {}", stringify!($ty));
                    val as Self
                }
            }
        )*
    };
}

impl_index_for_unsigned!(u16, u32, u64, usize);
