/// Placement of the cursor glow element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPlacement {
    pub left: f64,
    pub top: f64,
    pub visible: bool,
}

/// Tracks the pointer and centres the glow on it.
#[derive(Debug)]
pub struct GlowTracker {
    offset: f64,
    placement: GlowPlacement,
}

impl GlowTracker {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            placement: GlowPlacement {
                left: 0.0,
                top: 0.0,
                visible: false,
            },
        }
    }

    pub fn on_move(&mut self, client_x: f64, client_y: f64) -> GlowPlacement {
        self.placement = GlowPlacement {
            left: client_x - self.offset,
            top: client_y - self.offset,
            visible: true,
        };
        self.placement
    }

    /// Pointer left the document; keep the last position but hide.
    pub fn on_leave(&mut self) -> GlowPlacement {
        self.placement.visible = false;
        self.placement
    }

    pub fn placement(&self) -> GlowPlacement {
        self.placement
    }
}
