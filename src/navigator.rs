//! Scroll-driven navigation highlighting.

/// A navigable page section and its live vertical extent.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, pos: f64) -> bool {
        pos >= self.top && pos <= self.top + self.height
    }
}

/// Page offset used for the lookup: the reading line sits `offset` px below
/// the top of the viewport.
pub fn scroll_position(scroll_y: f64, offset: f64) -> f64 {
    scroll_y + offset
}

/// Region containing `scroll_y + offset`.
///
/// Every region is examined in declaration order and a later match replaces
/// an earlier one, so where extents overlap the last declared region wins.
pub fn active_region<'a>(regions: &'a [Region], scroll_y: f64, offset: f64) -> Option<&'a Region> {
    let pos = scroll_position(scroll_y, offset);
    let mut active = None;
    for region in regions {
        if region.contains(pos) {
            active = Some(region);
        }
    }
    active
}

/// `#about` -> `about`. Anything that is not an in-page fragment yields `None`.
pub fn link_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Remembers which navigation entry is marked active.
#[derive(Debug)]
pub struct ScrollNavigator {
    offset: f64,
    active: Option<String>,
}

impl ScrollNavigator {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            active: None,
        }
    }

    /// Recompute on a scroll event. Returns the id to mark active, or `None`
    /// when no region matched, in which case the current marking stays.
    pub fn on_scroll(&mut self, regions: &[Region], scroll_y: f64) -> Option<&str> {
        let hit = active_region(regions, scroll_y, self.offset)?;
        self.active = Some(hit.id.clone());
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
