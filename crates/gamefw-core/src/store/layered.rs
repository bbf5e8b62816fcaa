use super::ZIndex;

/// Values that may report a draw layer.
///
/// The default reports none; such values sit on [`ZIndex::BASE`].
pub trait Layered {
    fn z(&self) -> Option<ZIndex> {
        None
    }
}

impl<T: Layered + ?Sized> Layered for Box<T> {
    fn z(&self) -> Option<ZIndex> {
        (**self).z()
    }
}

impl<T: Layered + ?Sized> Layered for &T {
    fn z(&self) -> Option<ZIndex> {
        (**self).z()
    }
}

impl Layered for ZIndex {
    fn z(&self) -> Option<ZIndex> {
        Some(*self)
    }
}

impl<T: Layered> Layered for Option<T> {
    fn z(&self) -> Option<ZIndex> {
        self.as_ref().and_then(Layered::z)
    }
}
