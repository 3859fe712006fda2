//! Horizontal scroll synchronization between the header and the body overlay.
//!
//! Two native scroll containers can be scrolled by the user: the header strip above the
//! middle columns, and the overlay that sits over the middle band of the body. The row
//! content itself is never natively scrolled; it is translated by `-scroll_left`.
//!
//! [`ScrollSync`] is the single writer of both containers' offsets. A user event on one
//! container updates the shared offset and mirrors it to the other container exactly
//! once. When that write later comes back as a scroll event from the other container it
//! is recognised as an echo and dropped, so the two never feed back into each other.

use enum_map::EnumMap;

/// Which native scroll container an event came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, enum_map::Enum)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ScrollOrigin {
    Header,
    Overlay,
}

impl ScrollOrigin {
    /// The container that has to follow this one.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Self::Header => Self::Overlay,
            Self::Overlay => Self::Header,
        }
    }
}

/// Outcome of one reconciliation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    /// The shared offset after the event.
    pub scroll_left: f32,

    /// Where the user scrolled.
    pub origin: ScrollOrigin,

    /// `true` if the other container's offset was written.
    pub mirrored: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
struct NativeOffset {
    offset: f32,

    /// Set when the controller wrote `offset` itself and the container has not
    /// reported it back yet.
    pending_echo: bool,
}

/// Single source of truth for the horizontal offset of the middle columns.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ScrollSync {
    scroll_left: f32,
    max_scroll_left: f32,
    native: EnumMap<ScrollOrigin, NativeOffset>,
}

impl Default for ScrollSync {
    fn default() -> Self {
        Self {
            scroll_left: 0.0,
            max_scroll_left: f32::INFINITY,
            native: EnumMap::default(),
        }
    }
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared offset every row's middle band is translated by.
    #[inline]
    pub fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    /// The offset last written to or read from the given container.
    #[inline]
    pub fn native_offset(&self, origin: ScrollOrigin) -> f32 {
        self.native[origin].offset
    }

    /// Upper bound of both containers' scroll range.
    #[inline]
    pub fn max_scroll_left(&self) -> f32 {
        self.max_scroll_left
    }

    /// Both containers and the shared value agree.
    pub fn is_converged(&self) -> bool {
        self.native
            .values()
            .all(|native| native.offset == self.scroll_left)
    }

    /// The user scrolled the header to `offset`.
    pub fn set_from_header(&mut self, offset: f32) -> ScrollUpdate {
        self.set_from(ScrollOrigin::Header, offset)
    }

    /// The user scrolled the overlay to `offset`.
    pub fn set_from_overlay(&mut self, offset: f32) -> ScrollUpdate {
        self.set_from(ScrollOrigin::Overlay, offset)
    }

    /// A container reported a scroll position.
    ///
    /// Returns `None` if it only reports the offset this controller last wrote to it,
    /// or if nothing moved.
    pub fn on_native_scroll(&mut self, origin: ScrollOrigin, offset: f32) -> Option<ScrollUpdate> {
        let offset = self.clamp(offset);
        let native = &mut self.native[origin];

        if native.pending_echo && native.offset == offset {
            native.pending_echo = false;
            log::trace!("Ignoring echoed {origin:?} scroll to {offset}");
            return None;
        }
        if !native.pending_echo && native.offset == offset && offset == self.scroll_left {
            return None;
        }

        Some(self.set_from(origin, offset))
    }

    /// Update the scroll range shared by both containers.
    ///
    /// Shrinking the range pulls everything back inside it, like a native container
    /// whose content got narrower.
    pub fn set_max_scroll_left(&mut self, max_scroll_left: f32) {
        let max_scroll_left = if max_scroll_left.is_nan() {
            0.0
        } else {
            max_scroll_left.max(0.0)
        };
        if max_scroll_left == self.max_scroll_left {
            return;
        }
        self.max_scroll_left = max_scroll_left;

        if self.scroll_left > max_scroll_left {
            self.scroll_left = max_scroll_left;
        }
        for native in self.native.values_mut() {
            if native.offset > max_scroll_left {
                native.offset = max_scroll_left;
            }
        }
    }

    /// Forget the offsets, e.g. when the table is reset.
    pub fn reset(&mut self) {
        *self = Self {
            max_scroll_left: self.max_scroll_left,
            ..Self::default()
        };
    }

    fn set_from(&mut self, origin: ScrollOrigin, offset: f32) -> ScrollUpdate {
        let offset = self.clamp(offset);

        self.native[origin] = NativeOffset {
            offset,
            pending_echo: false,
        };
        self.scroll_left = offset;

        let other = &mut self.native[origin.other()];
        let mirrored = other.offset != offset;
        if mirrored {
            *other = NativeOffset {
                offset,
                pending_echo: true,
            };
        }

        log::trace!("{origin:?} scrolled to {offset}, mirrored: {mirrored}");

        ScrollUpdate {
            scroll_left: offset,
            origin,
            mirrored,
        }
    }

    fn clamp(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_converged(sync: &ScrollSync, expected: f32) {
        assert_eq!(sync.scroll_left(), expected);
        assert_eq!(sync.native_offset(ScrollOrigin::Header), expected);
        assert_eq!(sync.native_offset(ScrollOrigin::Overlay), expected);
        assert!(sync.is_converged());
    }

    #[test]
    fn header_scroll_mirrors_to_overlay() {
        let mut sync = ScrollSync::new();
        let update = sync.set_from_header(500.0);
        assert_eq!(
            update,
            ScrollUpdate {
                scroll_left: 500.0,
                origin: ScrollOrigin::Header,
                mirrored: true,
            }
        );
        assert_converged(&sync, 500.0);
    }

    #[test]
    fn alternating_sources_always_converge() {
        let mut sync = ScrollSync::new();
        sync.set_max_scroll_left(4840.0);

        let events = [
            (ScrollOrigin::Header, 10.0),
            (ScrollOrigin::Overlay, 250.0),
            (ScrollOrigin::Header, 249.5),
            (ScrollOrigin::Overlay, 0.0),
            (ScrollOrigin::Header, 9000.0),
            (ScrollOrigin::Overlay, 4000.0),
            (ScrollOrigin::Overlay, 4001.0),
        ];
        for (origin, offset) in events {
            sync.on_native_scroll(origin, offset);
            assert_converged(&sync, offset.min(4840.0));
        }
    }

    #[test]
    fn echo_of_a_mirrored_write_is_ignored() {
        let mut sync = ScrollSync::new();
        sync.on_native_scroll(ScrollOrigin::Overlay, 120.0).unwrap();

        // The header was written programmatically and now reports it back.
        assert_eq!(sync.on_native_scroll(ScrollOrigin::Header, 120.0), None);
        assert_converged(&sync, 120.0);

        // A second identical report is not an echo any more, but nothing moved.
        assert_eq!(sync.on_native_scroll(ScrollOrigin::Header, 120.0), None);
    }

    #[test]
    fn same_frame_events_last_one_wins() {
        let mut sync = ScrollSync::new();
        sync.on_native_scroll(ScrollOrigin::Header, 300.0).unwrap();
        let update = sync.on_native_scroll(ScrollOrigin::Overlay, 40.0).unwrap();
        assert_eq!(update.origin, ScrollOrigin::Overlay);
        assert!(update.mirrored);
        assert_converged(&sync, 40.0);
    }

    #[test]
    fn round_trip_header_to_overlay() {
        let mut sync = ScrollSync::new();
        sync.set_max_scroll_left(1000.0);
        for v in [0.0, 1.0, 333.25, 1000.0] {
            sync.set_from_header(v);
            assert_eq!(sync.native_offset(ScrollOrigin::Overlay), v);
        }
    }

    #[test]
    fn scroll_before_layout_converges_once_range_known() {
        let mut sync = ScrollSync::new();
        sync.set_from_overlay(800.0);
        assert_converged(&sync, 800.0);

        sync.set_max_scroll_left(600.0);
        assert_converged(&sync, 600.0);

        sync.set_max_scroll_left(-5.0);
        assert_converged(&sync, 0.0);
    }

    #[test]
    fn no_mirror_when_other_already_matches() {
        let mut sync = ScrollSync::new();
        sync.set_from_header(50.0);
        sync.on_native_scroll(ScrollOrigin::Overlay, 50.0);
        let update = sync.set_from_header(50.0);
        assert!(!update.mirrored);
    }

    #[test]
    fn reset_keeps_range() {
        let mut sync = ScrollSync::new();
        sync.set_max_scroll_left(100.0);
        sync.set_from_header(70.0);
        sync.reset();
        assert_converged(&sync, 0.0);
        assert_eq!(sync.max_scroll_left(), 100.0);
    }
}
