use crate::Px;

/// Disabled state of the prev/next controls.
///
/// With infinite looping both flags stay `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Controls {
    pub no_more_prev: bool,
    pub no_more_next: bool,
}

/// A lightweight, serializable snapshot of the carousel position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    /// Padded index (see [`crate::Carousel::return_index`] for the logical one).
    pub index: usize,
    pub offset: Px,
    pub controls: Controls,
}
