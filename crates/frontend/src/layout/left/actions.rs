//! Click handling for the sidebar, kept apart from the view so it can be
//! exercised without a DOM.

use super::menu::RowAction;
use leptos::prelude::*;

pub const PROFILE_ROUTE: &str = "/profile";
pub const PROFILE_PAGE: &str = "profile";
pub const LOGOUT_PROMPT: &str = "Are you sure you want to logout?";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Switch the page shown inside the current layout.
    Page(String),
    /// Leave for another route of the application.
    Route(String),
}

impl NavTarget {
    /// The profile route when the host can change routes, otherwise the
    /// profile page key.
    pub fn profile(can_route: bool) -> Self {
        if can_route {
            NavTarget::Route(PROFILE_ROUTE.to_string())
        } else {
            NavTarget::Page(PROFILE_PAGE.to_string())
        }
    }
}

/// Navigation capability handed to the sidebar by its host.
#[derive(Clone, Copy)]
pub struct Navigator {
    on_page_change: Callback<String>,
    on_navigate: Option<Callback<String>>,
}

impl Navigator {
    pub fn new(on_page_change: Callback<String>) -> Self {
        Self {
            on_page_change,
            on_navigate: None,
        }
    }

    pub fn with_routes(mut self, on_navigate: Callback<String>) -> Self {
        self.on_navigate = Some(on_navigate);
        self
    }

    fn go(&self, target: NavTarget) {
        match (target, self.on_navigate) {
            (NavTarget::Route(route), Some(navigate)) => navigate.run(route),
            (NavTarget::Route(route), None) => {
                log::warn!("navigator: no router to open '{route}'");
            }
            (NavTarget::Page(page), _) => self.on_page_change.run(page),
        }
    }

    pub fn open_page(&self, page: &str) {
        self.go(NavTarget::Page(page.to_string()));
    }

    pub fn open_profile(&self) {
        self.go(NavTarget::profile(self.on_navigate.is_some()));
    }
}

/// Run a row click: groups toggle, leaves navigate.
pub fn apply_row_action(
    action: RowAction,
    toggle: impl FnOnce(&'static str),
    navigate: impl FnOnce(&'static str),
) {
    match action {
        RowAction::Toggle(id) => toggle(id),
        RowAction::Navigate(id) => navigate(id),
    }
}

/// Yes/no question put to the user before a destructive action.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// The browser's `window.confirm`. Declines when there is no window.
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Ask before logging out. Returns whether `on_logout` ran.
pub fn confirm_logout(confirm: &impl Confirm, on_logout: impl FnOnce()) -> bool {
    if !confirm.confirm(LOGOUT_PROMPT) {
        log::debug!("sidebar: logout cancelled");
        return false;
    }
    on_logout();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::left::expansion::ExpansionState;
    use crate::layout::left::menu::{find_item, DEFAULT_EXPANDED, MENU_CATALOG};
    use std::cell::{Cell, RefCell};
    use std::sync::{Arc, Mutex};

    fn click(item_id: &str, expanded: &RefCell<ExpansionState>, navigated: &RefCell<Vec<String>>) {
        let item = find_item(MENU_CATALOG, item_id).unwrap();
        apply_row_action(
            item.row_action(),
            |id| {
                expanded.borrow_mut().toggle(id);
            },
            |id| navigated.borrow_mut().push(id.to_string()),
        );
    }

    #[test]
    fn test_group_click_only_toggles() {
        let expanded = RefCell::new(ExpansionState::with_default(MENU_CATALOG, DEFAULT_EXPANDED));
        let navigated = RefCell::new(Vec::new());

        click("ecommerce", &expanded, &navigated);
        assert!(navigated.borrow().is_empty());
        assert!(expanded.borrow().contains("ecommerce"));

        click("ecommerce", &expanded, &navigated);
        assert!(navigated.borrow().is_empty());
        assert!(!expanded.borrow().contains("ecommerce"));
    }

    #[test]
    fn test_leaf_click_navigates_once() {
        let expanded = RefCell::new(ExpansionState::with_default(MENU_CATALOG, DEFAULT_EXPANDED));
        let before = expanded.borrow().clone();
        let navigated = RefCell::new(Vec::new());

        click("messages", &expanded, &navigated);
        assert_eq!(*navigated.borrow(), vec!["messages".to_string()]);
        assert_eq!(*expanded.borrow(), before);
    }

    #[test]
    fn test_profile_target() {
        assert_eq!(NavTarget::profile(true), NavTarget::Route("/profile".into()));
        assert_eq!(NavTarget::profile(false), NavTarget::Page("profile".into()));
    }

    #[test]
    fn test_navigator_dispatch() {
        let owner = Owner::new();
        owner.set();

        let pages = Arc::new(Mutex::new(Vec::<String>::new()));
        let routes = Arc::new(Mutex::new(Vec::<String>::new()));
        let on_page_change = {
            let pages = Arc::clone(&pages);
            Callback::new(move |page: String| pages.lock().unwrap().push(page))
        };
        let on_navigate = {
            let routes = Arc::clone(&routes);
            Callback::new(move |route: String| routes.lock().unwrap().push(route))
        };

        let pages_only = Navigator::new(on_page_change);
        pages_only.open_profile();
        pages_only.open_page("overview");
        assert_eq!(*pages.lock().unwrap(), vec!["profile", "overview"]);

        let routed = Navigator::new(on_page_change).with_routes(on_navigate);
        routed.open_profile();
        routed.open_page("audit-logs");
        assert_eq!(*routes.lock().unwrap(), vec!["/profile"]);
        assert_eq!(*pages.lock().unwrap(), vec!["profile", "overview", "audit-logs"]);
    }

    #[test]
    fn test_route_without_router_is_dropped() {
        let owner = Owner::new();
        owner.set();

        let pages = Arc::new(Mutex::new(Vec::<String>::new()));
        let on_page_change = {
            let pages = Arc::clone(&pages);
            Callback::new(move |page: String| pages.lock().unwrap().push(page))
        };

        Navigator::new(on_page_change).go(NavTarget::Route(PROFILE_ROUTE.to_string()));
        assert!(pages.lock().unwrap().is_empty());
    }

    #[test]
    fn test_declined_logout_does_nothing() {
        let calls = Cell::new(0);
        let asked = RefCell::new(String::new());
        let decline = |message: &str| {
            *asked.borrow_mut() = message.to_string();
            false
        };

        assert!(!confirm_logout(&decline, || calls.set(calls.get() + 1)));
        assert_eq!(calls.get(), 0);
        assert_eq!(*asked.borrow(), LOGOUT_PROMPT);
    }

    #[test]
    fn test_accepted_logout_runs_once() {
        let calls = Cell::new(0);
        assert!(confirm_logout(&|_: &str| true, || calls.set(calls.get() + 1)));
        assert_eq!(calls.get(), 1);
    }
}
