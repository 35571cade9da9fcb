//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the highest-priority region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! registry.register(
//!     InteractiveRegion::clickable("mention_item", bounds, Action::ClickMentionItem(3))
//!         .with_priority(MENU_ITEM_PRIORITY),
//! );
//! ```

use crate::app::ClickRegion;
use crate::events::Action;

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    /// The open dropdown sits above everything else
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    #[cfg(test)]
    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Create a region that's both clickable and scrollable
    pub fn interactive(
        id: &'static str,
        bounds: ClickRegion,
        on_click: Action,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(on_click),
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.top_action(x, y, |r| r.on_click.as_ref())
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.top_action(x, y, |r| r.on_scroll_up.as_ref())
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.top_action(x, y, |r| r.on_scroll_down.as_ref())
    }

    /// Action of the highest-priority region containing the point that has a
    /// handler for this kind of event. Later registrations win ties.
    fn top_action<F>(&self, x: u16, y: u16, handler: F) -> Action
    where
        F: Fn(&InteractiveRegion) -> Option<&Action>,
    {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .filter_map(|r| handler(r).map(|action| (r.priority, action)))
            .max_by_key(|(priority, _)| *priority)
            .map(|(_, action)| action.clone())
            .unwrap_or(Action::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10));
        assert!(region.contains(29, 19));
        assert!(!region.contains(30, 20));
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(
            InteractiveRegion::clickable(
                "backdrop",
                ClickRegion::new(0, 0, 100, 100),
                Action::CloseMentionMenu,
            )
            .with_priority(5),
        );
        registry.register(
            InteractiveRegion::clickable(
                "mention_item",
                ClickRegion::new(20, 20, 40, 1),
                Action::ClickMentionItem(2),
            )
            .with_priority(20),
        );

        assert_eq!(registry.handle_click(30, 20), Action::ClickMentionItem(2));
        assert_eq!(registry.handle_click(5, 5), Action::CloseMentionMenu);
        assert_eq!(registry.handle_click(200, 200), Action::None);
    }

    #[test]
    fn test_scroll_only_hits_scrollable_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::scrollable(
            "mention_menu",
            ClickRegion::new(0, 0, 10, 10),
            Action::ScrollMentionMenu(-1),
            Action::ScrollMentionMenu(1),
        ));

        assert_eq!(registry.handle_scroll_down(1, 1), Action::ScrollMentionMenu(1));
        assert_eq!(registry.handle_scroll_up(1, 1), Action::ScrollMentionMenu(-1));
        assert_eq!(registry.handle_click(1, 1), Action::None);

        registry.clear();
        assert_eq!(registry.handle_scroll_down(1, 1), Action::None);
    }
}
