//! Container measurement and the widths derived from it.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::column::GroupWidths;

/// Tracks the measured container width and derives the width of the scrolling region.
///
/// Every derived width is floored at zero, so an unmeasured (zero width) container or
/// one narrower than the frozen groups never produces a negative size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct LayoutMeasurer {
    widths: GroupWidths,
    container_width: f32,
}

impl LayoutMeasurer {
    pub fn new(widths: GroupWidths) -> Self {
        Self {
            widths,
            container_width: 0.0,
        }
    }

    /// Record a new container width. Returns `true` if it differs from the previous one.
    ///
    /// Negative and non-finite widths are treated as zero.
    pub fn measure(&mut self, container_width: f32) -> bool {
        let container_width = if container_width.is_finite() {
            container_width.max(0.0)
        } else {
            0.0
        };
        if container_width == self.container_width {
            return false;
        }
        log::debug!(
            "Table container resized from {} to {container_width}",
            self.container_width
        );
        self.container_width = container_width;
        true
    }

    /// Replace the group widths, e.g. when the column set handed to the widget changed.
    pub fn set_group_widths(&mut self, widths: GroupWidths) -> bool {
        if widths == self.widths {
            return false;
        }
        self.widths = widths;
        true
    }

    #[inline]
    pub fn group_widths(&self) -> GroupWidths {
        self.widths
    }

    #[inline]
    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// `max(0, container - left - right)`.
    pub fn available_middle_width(&self) -> f32 {
        (self.container_width - self.widths.left - self.widths.right).max(0.0)
    }

    /// Width of the header's scrolling region: never wider than the space
    /// available, never wider than the middle columns themselves.
    pub fn header_scroll_width(&self) -> f32 {
        self.widths.middle.min(self.available_middle_width())
    }

    /// Width of the overlay that captures horizontal scrolling over the body.
    #[inline]
    pub fn overlay_width(&self) -> f32 {
        self.available_middle_width()
    }

    /// Largest horizontal offset either scrolling container can reach.
    pub fn max_scroll_left(&self) -> f32 {
        (self.widths.middle - self.available_middle_width()).max(0.0)
    }

    /// Where the right frozen group starts, relative to the table's left edge.
    pub fn right_band_x(&self) -> f32 {
        self.widths.left + self.available_middle_width()
    }
}

// ----------------------------------------------------------------------------

#[derive(Default)]
struct HubInner {
    width: f32,
    next_id: u64,
    observers: Vec<(u64, Rc<Cell<f32>>)>,
}

/// A single-threaded source of container resize events for hosts that push them.
///
/// Each [`ResizeObservation`] handed out stays registered until it is dropped.
#[derive(Clone, Default)]
pub struct ResizeHub {
    inner: Rc<RefCell<HubInner>>,
}

impl ResizeHub {
    pub fn new(width: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                width,
                ..Default::default()
            })),
        }
    }

    /// The container changed size: deliver the new width to every observer.
    pub fn resize(&self, width: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.width = width;
        for (_, slot) in &inner.observers {
            slot.set(width);
        }
    }

    /// Current container width.
    pub fn width(&self) -> f32 {
        self.inner.borrow().width
    }

    /// Register an observer. It starts out holding the current width.
    pub fn observe(&self) -> ResizeObservation {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let slot = Rc::new(Cell::new(inner.width));
        inner.observers.push((id, Rc::clone(&slot)));
        ResizeObservation {
            hub: Rc::downgrade(&self.inner),
            id,
            slot,
        }
    }

    /// Number of live observations.
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }
}

impl std::fmt::Debug for ResizeHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ResizeHub")
            .field("width", &inner.width)
            .field("observers", &inner.observers.len())
            .finish()
    }
}

/// A registration with a [`ResizeHub`]. Deregisters itself on drop.
#[derive(Debug)]
pub struct ResizeObservation {
    hub: Weak<RefCell<HubInner>>,
    id: u64,
    slot: Rc<Cell<f32>>,
}

impl ResizeObservation {
    /// Latest width delivered by the hub.
    #[inline]
    pub fn width(&self) -> f32 {
        self.slot.get()
    }
}

impl Drop for ResizeObservation {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().observers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths() -> GroupWidths {
        GroupWidths {
            left: 300.0,
            middle: 5520.0,
            right: 220.0,
        }
    }

    #[test]
    fn available_width_is_never_negative() {
        let mut measurer = LayoutMeasurer::new(widths());
        for container in [0.0, 1.0, 100.0, 519.0, 520.0, 521.0, 1200.0, 10_000.0] {
            measurer.measure(container);
            assert!(measurer.available_middle_width() >= 0.0);
            assert!(measurer.header_scroll_width() >= 0.0);
            assert!(measurer.max_scroll_left() >= 0.0);
        }

        measurer.measure(1200.0);
        assert_eq!(measurer.available_middle_width(), 680.0);
        assert_eq!(measurer.header_scroll_width(), 680.0);
        assert_eq!(measurer.max_scroll_left(), 5520.0 - 680.0);
        assert_eq!(measurer.right_band_x(), 980.0);
    }

    #[test]
    fn unmeasured_container_is_zero() {
        let mut measurer = LayoutMeasurer::new(widths());
        assert_eq!(measurer.available_middle_width(), 0.0);
        assert_eq!(measurer.max_scroll_left(), 5520.0);

        measurer.measure(800.0);
        assert!(measurer.measure(f32::NAN));
        assert_eq!(measurer.container_width(), 0.0);
        assert!(!measurer.measure(-50.0));
        assert_eq!(measurer.right_band_x(), 300.0);
    }

    #[test]
    fn header_never_exceeds_middle_content() {
        let mut measurer = LayoutMeasurer::new(GroupWidths {
            left: 100.0,
            middle: 200.0,
            right: 100.0,
        });
        measurer.measure(1000.0);
        assert_eq!(measurer.available_middle_width(), 800.0);
        assert_eq!(measurer.header_scroll_width(), 200.0);
        assert_eq!(measurer.max_scroll_left(), 0.0);
    }

    #[test]
    fn remeasuring_same_width_is_a_no_op() {
        let mut measurer = LayoutMeasurer::new(widths());
        assert!(measurer.measure(1200.0));
        let before = measurer;
        assert!(!measurer.measure(1200.0));
        assert_eq!(measurer, before);
    }

    #[test]
    fn observations_release_on_drop() {
        let hub = ResizeHub::new(640.0);
        for _ in 0..10 {
            let first = hub.observe();
            let second = hub.observe();
            assert_eq!(hub.observer_count(), 2);
            assert_eq!(first.width(), 640.0);

            hub.resize(900.0);
            assert_eq!(first.width(), 900.0);
            assert_eq!(second.width(), 900.0);

            drop(first);
            assert_eq!(hub.observer_count(), 1);
            hub.resize(640.0);
            assert_eq!(second.width(), 640.0);
        }
        assert_eq!(hub.observer_count(), 0);
    }

    #[test]
    fn observation_outliving_hub() {
        let hub = ResizeHub::new(10.0);
        let observation = hub.observe();
        drop(hub);
        assert_eq!(observation.width(), 10.0);
        drop(observation);
    }
}
