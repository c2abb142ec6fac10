// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-press detection: one shared pointer-down listener for all open overlays.
//!
//! ## Overview
//!
//! An open menu or popover closes when the user presses somewhere that is
//! neither its trigger nor its floating content. Rather than attaching one
//! global listener per overlay, the toolkit keeps a single
//! [`OutsideRegistry`] and a single global pointer-down listener:
//!
//! - An overlay registers its [`Boundary`] when it opens and unregisters it
//!   when it closes. Closed overlays cost nothing.
//! - The global listener only needs to be attached while the registry is
//!   non-empty. [`OutsideRegistry::register`] and
//!   [`OutsideRegistry::unregister`] report the [`ListenerChange`] to apply.
//! - On pointer down, [`OutsideRegistry::pointer_down`] returns every overlay
//!   whose boundary does not contain the press target. Each check is
//!   independent, so nested menus work without any ordering rules.
//! - Entries whose owner was dropped stop counting at once. The registry
//!   remembers whether it last reported [`ListenerChange::Attach`], so the
//!   matching `Detach` comes back from the next call that notices, typically
//!   [`pointer_down`](OutsideRegistry::pointer_down) or
//!   [`prune`](OutsideRegistry::prune). Attaches and detaches always alternate.
//!
//! The registry is generic over the target type. Use [`RectBoundary`] with
//! a [`Point`] when you have measured rects, or [`NodeBoundary`] with a
//! root→target path (for example from `understory_responder`) when you route
//! through a widget tree.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_overlay::outside::{ListenerChange, OutsideRegistry, RectBoundary};
//!
//! let mut registry: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
//! let trigger = Rect::new(10.0, 10.0, 60.0, 30.0);
//! let menu = Rect::new(10.0, 38.0, 110.0, 138.0);
//!
//! assert_eq!(registry.register(1, RectBoundary::new([trigger, menu])), Some(ListenerChange::Attach));
//! assert!(registry.pointer_down(&Point::new(50.0, 50.0)).outside.is_empty());
//! assert_eq!(registry.pointer_down(&Point::new(300.0, 300.0)).outside, vec![1]);
//! assert_eq!(registry.unregister(&1), Some(ListenerChange::Detach));
//! ```

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// Region that counts as "inside" an overlay.
pub trait Boundary<T: ?Sized> {
    /// Returns true if `target` is inside this boundary.
    fn contains(&self, target: &T) -> bool;
}

/// A boundary made of world-space rects, typically the trigger and the floating element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RectBoundary {
    rects: Vec<Rect>,
}

impl RectBoundary {
    /// A boundary covering `rects`.
    pub fn new(rects: impl IntoIterator<Item = Rect>) -> Self {
        Self {
            rects: rects.into_iter().collect(),
        }
    }

    /// Add a rect, for example a nested submenu that should not close its parent.
    pub fn push(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// The rects of this boundary.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}

/// Edges count as inside, unlike [`Rect::contains`].
impl Boundary<Point> for RectBoundary {
    fn contains(&self, target: &Point) -> bool {
        let Point { x, y } = *target;
        self.rects.iter().any(|r| {
            let r = r.abs();
            r.x0 <= x && x <= r.x1 && r.y0 <= y && y <= r.y1
        })
    }
}

/// A boundary made of widget-tree nodes.
///
/// The target is a root→target path; it is inside when any node on the path
/// is a boundary node, so presses on descendants of the trigger or the
/// floating content count as inside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeBoundary<K> {
    nodes: Vec<K>,
}

impl<K> NodeBoundary<K> {
    /// A boundary rooted at `nodes`.
    pub fn new(nodes: impl IntoIterator<Item = K>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }

    /// Add a boundary node.
    pub fn push(&mut self, node: K) {
        self.nodes.push(node);
    }
}

impl<K: PartialEq> Boundary<[K]> for NodeBoundary<K> {
    fn contains(&self, path: &[K]) -> bool {
        path.iter().any(|k| self.nodes.contains(k))
    }
}

/// What to do with the global pointer-down listener after a registry change.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ListenerChange {
    /// The first live entry was added: attach the listener.
    Attach,
    /// The last live entry was removed: detach the listener.
    Detach,
}

/// Result of [`OutsideRegistry::pointer_down`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutsidePress<Id> {
    /// Ids whose boundary does not contain the press, most recently registered first.
    pub outside: Vec<Id>,
    /// `Detach` if pruning dropped the last live entry.
    pub listener: Option<ListenerChange>,
}

/// Ties a registry entry to the lifetime of its owner.
///
/// Entries registered with [`OutsideRegistry::register_owned`] stop counting
/// as soon as the `Lifeline` is dropped, even if the owner never
/// unregistered.
#[derive(Debug, Default)]
pub struct Lifeline(Rc<()>);

impl Lifeline {
    /// A fresh lifeline.
    pub fn new() -> Self {
        Self::default()
    }

    fn downgrade(&self) -> Weak<()> {
        Rc::downgrade(&self.0)
    }
}

#[derive(Clone, Debug)]
struct Entry<Id, B> {
    id: Id,
    boundary: B,
    owner: Option<Weak<()>>,
}

impl<Id, B> Entry<Id, B> {
    fn is_alive(&self) -> bool {
        self.owner.as_ref().is_none_or(|w| w.strong_count() > 0)
    }
}

/// Registry of open overlays' boundaries behind one global pointer-down listener.
///
/// Entries are kept in registration order; [`pointer_down`](Self::pointer_down)
/// reports the most recently registered first.
#[derive(Clone, Debug)]
pub struct OutsideRegistry<Id, B> {
    entries: Vec<Entry<Id, B>>,
    // Last reported listener state.
    attached: bool,
}

impl<Id, B> Default for OutsideRegistry<Id, B> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            attached: false,
        }
    }
}

impl<Id: Copy + Eq, B> OutsideRegistry<Id, B> {
    /// An empty registry. The global listener starts detached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the global listener should be attached: true iff any live entry exists.
    ///
    /// This can turn false without a call when an owner is dropped; the
    /// matching [`ListenerChange::Detach`] is reported by the next mutating call.
    pub fn is_listening(&self) -> bool {
        self.entries.iter().any(Entry::is_alive)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_alive()).count()
    }

    /// Whether there are no live entries.
    pub fn is_empty(&self) -> bool {
        !self.is_listening()
    }

    /// Whether `id` has a live entry.
    pub fn contains(&self, id: &Id) -> bool {
        self.entries.iter().any(|e| e.id == *id && e.is_alive())
    }

    /// Register `id` with `boundary`.
    ///
    /// Registering an id again replaces its boundary and makes it the most
    /// recent entry.
    pub fn register(&mut self, id: Id, boundary: B) -> Option<ListenerChange> {
        self.insert(Entry {
            id,
            boundary,
            owner: None,
        })
    }

    /// Register `id` for as long as `lifeline` lives.
    pub fn register_owned(
        &mut self,
        id: Id,
        boundary: B,
        lifeline: &Lifeline,
    ) -> Option<ListenerChange> {
        self.insert(Entry {
            id,
            boundary,
            owner: Some(lifeline.downgrade()),
        })
    }

    /// Remove `id`. Unknown ids are ignored.
    pub fn unregister(&mut self, id: &Id) -> Option<ListenerChange> {
        self.entries.retain(|e| e.id != *id);
        self.change()
    }

    /// Replace the boundary of a registered id, for example after repositioning.
    ///
    /// Returns false if `id` is not registered.
    pub fn update(&mut self, id: &Id, boundary: B) -> bool {
        match self.entries.iter_mut().find(|e| e.id == *id) {
            Some(entry) => {
                entry.boundary = boundary;
                true
            }
            None => false,
        }
    }

    /// Drop entries whose owner is gone.
    ///
    /// Returns `Detach` if the listener was attached and no live entry is left.
    pub fn prune(&mut self) -> Option<ListenerChange> {
        self.entries.retain(Entry::is_alive);
        self.change()
    }

    /// Live entries whose boundary does not contain `target`.
    ///
    /// The registry is not modified beyond pruning dead entries; each
    /// returned overlay is expected to close and unregister itself.
    pub fn pointer_down<T: ?Sized>(&mut self, target: &T) -> OutsidePress<Id>
    where
        B: Boundary<T>,
    {
        let listener = self.prune();
        let outside: Vec<Id> = self
            .entries
            .iter()
            .rev()
            .filter(|e| !e.boundary.contains(target))
            .map(|e| e.id)
            .collect();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            open = self.entries.len(),
            outside = outside.len(),
            "outside pointer down"
        );
        OutsidePress { outside, listener }
    }

    fn insert(&mut self, entry: Entry<Id, B>) -> Option<ListenerChange> {
        self.entries.retain(|e| e.id != entry.id);
        self.entries.push(entry);
        self.change()
    }

    fn change(&mut self) -> Option<ListenerChange> {
        let listening = self.is_listening();
        let change = match (self.attached, listening) {
            (false, true) => Some(ListenerChange::Attach),
            (true, false) => Some(ListenerChange::Detach),
            _ => None,
        };
        self.attached = listening;
        #[cfg(feature = "tracing")]
        if let Some(change) = change {
            tracing::debug!(?change, "outside pointer listener");
        }
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn rect_boundary(x: f64) -> RectBoundary {
        RectBoundary::new([Rect::new(x, 0.0, x + 10.0, 10.0)])
    }

    #[test]
    fn attach_and_detach_follow_first_and_last() {
        let mut r: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
        assert!(!r.is_listening());
        assert_eq!(r.register(1, rect_boundary(0.0)), Some(ListenerChange::Attach));
        assert_eq!(r.register(2, rect_boundary(20.0)), None);
        assert!(r.is_listening());
        assert_eq!(r.len(), 2);
        assert_eq!(r.unregister(&1), None);
        assert_eq!(r.unregister(&2), Some(ListenerChange::Detach));
        assert!(r.is_empty());
        // Unknown id is a no-op.
        assert_eq!(r.unregister(&3), None);
    }

    #[test]
    fn reregistering_replaces_boundary() {
        let mut r: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
        r.register(1, rect_boundary(0.0));
        assert_eq!(r.register(1, rect_boundary(100.0)), None);
        assert_eq!(r.len(), 1);
        assert_eq!(r.pointer_down(&Point::new(5.0, 5.0)).outside, vec![1]);
        assert!(r.pointer_down(&Point::new(105.0, 5.0)).outside.is_empty());
    }

    #[test]
    fn each_entry_is_checked_independently() {
        let mut r: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
        // Outer menu, then a nested submenu whose boundary also covers the outer panel.
        r.register(1, rect_boundary(0.0));
        let mut inner = rect_boundary(20.0);
        inner.push(Rect::new(0.0, 0.0, 10.0, 10.0));
        r.register(2, inner);

        // Inside the submenu: the outer menu closes, the submenu stays.
        assert_eq!(r.pointer_down(&Point::new(25.0, 5.0)).outside, vec![1]);
        // Inside the outer panel: both stay.
        assert!(r.pointer_down(&Point::new(5.0, 5.0)).outside.is_empty());
        // Elsewhere: both close, most recent first.
        assert_eq!(r.pointer_down(&Point::new(50.0, 50.0)).outside, vec![2, 1]);
    }

    #[test]
    fn update_replaces_boundary_in_place() {
        let mut r: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
        assert!(!r.update(&1, rect_boundary(0.0)));
        r.register(1, rect_boundary(0.0));
        assert!(r.update(&1, rect_boundary(50.0)));
        assert!(r.pointer_down(&Point::new(55.0, 5.0)).outside.is_empty());
    }

    #[test]
    fn dropped_owner_stops_counting() {
        let mut r: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
        let lifeline = Lifeline::new();
        assert_eq!(
            r.register_owned(1, rect_boundary(0.0), &lifeline),
            Some(ListenerChange::Attach)
        );
        assert!(r.contains(&1));
        drop(lifeline);
        assert!(!r.is_listening());
        assert!(!r.contains(&1));
        let press = r.pointer_down(&Point::new(50.0, 50.0));
        assert!(press.outside.is_empty());
        assert_eq!(press.listener, Some(ListenerChange::Detach));
        assert_eq!(r.prune(), None);
    }

    #[test]
    fn listener_changes_stay_balanced_across_dropped_owners() {
        let mut r: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
        let mut attached = 0_i32;
        let mut count = |change: Option<ListenerChange>| {
            match change {
                Some(ListenerChange::Attach) => attached += 1,
                Some(ListenerChange::Detach) => attached -= 1,
                None => {}
            }
            attached
        };

        // Dropped, then noticed by a press before the next open.
        let first = Lifeline::new();
        count(r.register_owned(1, rect_boundary(0.0), &first));
        drop(first);
        count(r.pointer_down(&Point::new(5.0, 5.0)).listener);
        let second = Lifeline::new();
        assert_eq!(count(r.register_owned(2, rect_boundary(0.0), &second)), 1);

        // Dropped, then replaced directly: the listener just stays attached.
        drop(second);
        let third = Lifeline::new();
        assert_eq!(count(r.register_owned(3, rect_boundary(0.0), &third)), 1);

        count(r.unregister(&3));
        assert_eq!(count(r.prune()), 0);
        assert!(r.is_empty());
    }

    #[test]
    fn unregistering_a_dead_entry_detaches() {
        let mut r: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
        let lifeline = Lifeline::new();
        r.register_owned(1, rect_boundary(0.0), &lifeline);
        drop(lifeline);
        assert_eq!(r.unregister(&1), Some(ListenerChange::Detach));
        assert_eq!(r.unregister(&1), None);
    }

    #[test]
    fn rect_edges_count_as_inside() {
        let mut r: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
        r.register(1, RectBoundary::new([Rect::new(0.0, 0.0, 10.0, 10.0)]));
        assert!(r.pointer_down(&Point::new(10.0, 5.0)).outside.is_empty());
        assert!(r.pointer_down(&Point::new(5.0, 10.0)).outside.is_empty());
        assert!(r.pointer_down(&Point::new(0.0, 0.0)).outside.is_empty());
        assert_eq!(r.pointer_down(&Point::new(10.5, 5.0)).outside, vec![1]);
    }

    #[test]
    fn prune_removes_dead_entries() {
        let mut r: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();
        let a = Lifeline::new();
        let b = Lifeline::new();
        r.register_owned(1, rect_boundary(0.0), &a);
        r.register_owned(2, rect_boundary(20.0), &b);
        drop(a);
        assert_eq!(r.len(), 1);
        // One live entry remains, so the listener stays.
        assert_eq!(r.prune(), None);
        assert_eq!(r.unregister(&2), Some(ListenerChange::Detach));
    }

    #[test]
    fn node_boundary_matches_descendants() {
        let mut r: OutsideRegistry<&str, NodeBoundary<u32>> = OutsideRegistry::new();
        r.register("menu", NodeBoundary::new([2, 7]));
        // Press on a child of the trigger (node 2).
        assert!(r.pointer_down(&[1_u32, 2, 3][..]).outside.is_empty());
        // Press on a child of the floating content (node 7).
        assert!(r.pointer_down(&[1_u32, 6, 7, 8][..]).outside.is_empty());
        // Press on an unrelated branch.
        assert_eq!(r.pointer_down(&[1_u32, 4][..]).outside, vec!["menu"]);
    }
}
