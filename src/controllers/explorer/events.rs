use crate::core::actions::zoom_viewport::zoom_viewport::ZoomDirection;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

impl PointerButton {
    /// Primary zooms in, secondary zooms out, anything else does nothing.
    #[must_use]
    pub fn zoom_direction(self) -> Option<ZoomDirection> {
        match self {
            Self::Primary => Some(ZoomDirection::In),
            Self::Secondary => Some(ZoomDirection::Out),
            Self::Other => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    Quit,
    /// `x` is the column and `y` the row of the clicked pixel.
    PointerClick {
        x: i32,
        y: i32,
        button: PointerButton,
    },
}
