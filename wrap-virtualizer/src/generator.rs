use crate::Size;

/// The host-side collaborator that owns visual containers.
///
/// The panel never creates containers itself: it decides which indexes need one and asks the
/// generator for them, and it hands containers back once their items leave the realized range.
/// Containers are opaque handles; the panel only stores and compares what `index_of` reports.
///
/// Implementations must keep `index_of` in sync with the items source. A container whose item was
/// removed or replaced should report `None` until it is recycled or removed.
pub trait ContainerGenerator {
    type Container;

    /// Returns a container bound to the item at `index`, reusing a recycled one when possible.
    ///
    /// Returning `None` means no container can be produced at all; the layout pass fails with
    /// [`crate::LayoutError::ContainerUnavailable`].
    fn generate_or_recycle(&mut self, index: usize) -> Option<Self::Container>;

    /// Takes back a container for later reuse.
    fn recycle(&mut self, container: Self::Container);

    /// Discards a container for good.
    fn remove(&mut self, container: Self::Container);

    /// The item index `container` currently represents, or `None` when it is stale.
    fn index_of(&self, container: &Self::Container) -> Option<usize>;

    /// Measures `container` against `available` and returns its desired size.
    fn measure(&mut self, container: &Self::Container, available: Size) -> Size;
}
