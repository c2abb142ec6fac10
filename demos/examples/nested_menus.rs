// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested menus sharing one outside-press listener.
//!
//! Open a menu and a submenu, then press in different places and close
//! whichever menus the press landed outside of.
//!
//! Run:
//! - `cargo run -p understory_overlay_demos --example nested_menus`

use core::time::Duration;

use kurbo::{Point, Rect, Size};
use understory_overlay::outside::{ListenerChange, OutsideRegistry, RectBoundary};
use understory_overlay::overlay::{Overlay, OverlayKind};
use understory_overlay::visibility::VisibilityEvent;
use understory_placement::Placement;

const MENU: u32 = 1;
const SUBMENU: u32 = 2;

fn main() {
    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    let now = Duration::ZERO;
    let mut registry: OutsideRegistry<u32, RectBoundary> = OutsideRegistry::new();

    let menu_trigger = Rect::from_origin_size((20.0, 20.0), (80.0, 24.0));
    let menu_size = Size::new(160.0, 120.0);
    let mut menu = Overlay::with_kind(MENU, OverlayKind::Menu);
    let menu_rect = menu
        .reposition(menu_trigger, menu_size, viewport)
        .rect(menu_size);

    // The submenu opens to the right of its row inside the menu.
    let row = Rect::from_origin_size((menu_rect.x0, menu_rect.y0 + 40.0), (160.0, 24.0));
    let sub_size = Size::new(140.0, 80.0);
    let mut sub = Overlay::new(
        SUBMENU,
        menu.config().with_placement(Placement::Right).with_gap(0.0),
    );
    let sub_rect = sub.reposition(row, sub_size, viewport).rect(sub_size);

    let update = menu.dispatch(VisibilityEvent::Toggle, now, &mut registry, || {
        RectBoundary::new([menu_trigger, menu_rect])
    });
    assert_eq!(update.listener, Some(ListenerChange::Attach));
    sub.dispatch(VisibilityEvent::Toggle, now, &mut registry, || {
        RectBoundary::new([row, sub_rect])
    });
    // Presses inside the submenu must not close the parent menu.
    let mut parent = RectBoundary::new([menu_trigger, menu_rect]);
    parent.push(sub_rect);
    menu.update_boundary(&mut registry, parent);
    println!("menu at {menu_rect:?}, submenu at {sub_rect:?}");

    let press = |registry: &mut OutsideRegistry<u32, RectBoundary>,
                 menu: &mut Overlay<u32>,
                 sub: &mut Overlay<u32>,
                 at: Point| {
        let hit = registry.pointer_down(&at);
        println!("press at {at:?}: closing {:?}", hit.outside);
        for id in hit.outside {
            let target = if id == MENU { &mut *menu } else { &mut *sub };
            let update = target.dispatch(
                VisibilityEvent::OutsidePointerDown,
                now,
                registry,
                RectBoundary::default,
            );
            if let Some(change) = update.listener {
                println!("  listener: {change:?}");
            }
        }
    };

    // Inside the submenu: nothing closes.
    press(&mut registry, &mut menu, &mut sub, sub_rect.center());
    assert!(menu.is_visible() && sub.is_visible());

    // Inside the parent but not the submenu: only the submenu closes.
    let in_parent = Point::new(menu_rect.x0 + 5.0, menu_rect.y1 - 5.0);
    press(&mut registry, &mut menu, &mut sub, in_parent);
    assert!(menu.is_visible() && !sub.is_visible());

    // Far away: the menu closes and the listener detaches.
    press(&mut registry, &mut menu, &mut sub, Point::new(700.0, 500.0));
    assert!(!menu.is_visible());
    assert!(!registry.is_listening());
}
