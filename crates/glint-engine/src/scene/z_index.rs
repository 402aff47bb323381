/// Z-ordering key for draw items. Higher values paint on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    /// Layer `d` steps above this one.
    #[inline]
    pub const fn above(self, d: i32) -> Self {
        Self(self.0.saturating_add(d))
    }
}
