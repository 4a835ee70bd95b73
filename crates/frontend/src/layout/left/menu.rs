//! Static sidebar catalog and the role filter over it.

use contracts::enums::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubMenuItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub roles: &'static [Role],
    /// Highlighted regardless of the current page.
    pub active: bool,
    pub badge: Option<&'static str>,
    pub count: Option<&'static str>,
    pub submenu: Option<&'static [SubMenuItem]>,
}

/// What a click on a top-level row does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Toggle(&'static str),
    Navigate(&'static str),
}

impl MenuItem {
    const fn base(id: &'static str, icon: &'static str, label: &'static str, roles: &'static [Role]) -> Self {
        Self {
            id,
            icon,
            label,
            roles,
            active: false,
            badge: None,
            count: None,
            submenu: None,
        }
    }

    pub fn visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_submenu(&self) -> bool {
        self.submenu.is_some()
    }

    pub fn is_active(&self, current_page: Option<&str>) -> bool {
        self.active || current_page == Some(self.id)
    }

    pub fn row_action(&self) -> RowAction {
        if self.has_submenu() {
            RowAction::Toggle(self.id)
        } else {
            RowAction::Navigate(self.id)
        }
    }
}

/// Id expanded when the sidebar first mounts.
pub const DEFAULT_EXPANDED: &str = "analytics";

pub const MENU_CATALOG: &[MenuItem] = &[
    MenuItem {
        active: true,
        ..MenuItem::base("dashboard", "layout-dashboard", "Dashboard", Role::ALL)
    },
    MenuItem {
        submenu: Some(&[
            SubMenuItem { id: "overview", label: "Overview" },
            SubMenuItem { id: "reports", label: "Reports" },
            SubMenuItem { id: "insights", label: "Insights" },
        ]),
        ..MenuItem::base("analytics", "bar-chart", "Analytics", &[Role::Admin, Role::Manager])
    },
    MenuItem {
        count: Some("2.4k"),
        submenu: Some(&[
            SubMenuItem { id: "all-users", label: "All Users" },
            SubMenuItem { id: "roles", label: "Roles & Permissions" },
            SubMenuItem { id: "activity", label: "User Activity" },
        ]),
        ..MenuItem::base("users", "users", "User Management", &[Role::Admin])
    },
    MenuItem {
        submenu: Some(&[
            SubMenuItem { id: "products", label: "Products" },
            SubMenuItem { id: "orders", label: "Orders" },
            SubMenuItem { id: "customers", label: "Customers" },
        ]),
        ..MenuItem::base("ecommerce", "shopping-bag", "E-commerce", &[Role::Admin, Role::Manager])
    },
    MenuItem {
        count: Some("847"),
        ..MenuItem::base(
            "inventory",
            "package",
            "Inventory",
            &[Role::Admin, Role::Manager, Role::User],
        )
    },
    MenuItem::base("transactions", "credit-card", "Transactions", &[Role::Admin, Role::Manager]),
    MenuItem {
        badge: Some("12"),
        ..MenuItem::base(
            "messages",
            "message-square",
            "Messages",
            &[Role::Admin, Role::User, Role::Manager],
        )
    },
    MenuItem::base("calendar", "calendar", "Calendar", Role::ALL),
    MenuItem::base("reports", "file-text", "Reports", &[Role::Admin, Role::Manager]),
    MenuItem {
        submenu: Some(&[
            SubMenuItem { id: "two-factor", label: "Two-Factor Auth" },
            SubMenuItem { id: "audit-logs", label: "Audit Logs" },
            SubMenuItem { id: "permissions", label: "Permissions" },
        ]),
        ..MenuItem::base("security", "shield", "Security", &[Role::Admin])
    },
    MenuItem::base("settings", "settings", "Settings", &[Role::Admin, Role::Manager]),
];

pub fn find_item(catalog: &'static [MenuItem], id: &str) -> Option<&'static MenuItem> {
    catalog.iter().find(|item| item.id == id)
}

/// Items of `catalog` visible to `role`, in catalog order.
pub fn build_menu(catalog: &'static [MenuItem], role: Role) -> Vec<&'static MenuItem> {
    catalog.iter().filter(|item| item.visible_to(role)).collect()
}

/// Same as [`build_menu`] but starting from the role string of the session.
///
/// An unrecognised role sees nothing.
pub fn menu_for_raw_role(catalog: &'static [MenuItem], raw: Option<&str>) -> Vec<&'static MenuItem> {
    match Role::normalize(raw) {
        Ok(role) => build_menu(catalog, role),
        Err(err) => {
            log::warn!("sidebar: {err}, rendering an empty menu");
            Vec::new()
        }
    }
}
