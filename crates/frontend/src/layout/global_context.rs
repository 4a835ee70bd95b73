use leptos::prelude::*;

/// Page shown when nothing has been picked yet.
pub const HOME_PAGE: &str = "dashboard";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Page key selected from the sidebar. `None` until the first click.
    pub current_page: RwSignal<Option<String>>,
    pub sidebar_collapsed: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_page: RwSignal::new(None),
            sidebar_collapsed: RwSignal::new(false),
        }
    }

    pub fn open_page(&self, key: &str) {
        log::debug!("open_page: key='{}'", key);
        self.current_page.set(Some(key.to_string()));
    }

    /// Key of the page to render, falling back to [`HOME_PAGE`].
    pub fn page_or_home(&self) -> String {
        self.current_page
            .get()
            .unwrap_or_else(|| HOME_PAGE.to_string())
    }

    pub fn reset_page(&self) {
        self.current_page.set(None);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|v| *v = !*v);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_selection() {
        let owner = Owner::new();
        owner.set();

        let ctx = AppGlobalContext::new();
        assert_eq!(ctx.page_or_home(), "dashboard");

        ctx.open_page("inventory");
        assert_eq!(ctx.current_page.get_untracked().as_deref(), Some("inventory"));
        assert_eq!(ctx.page_or_home(), "inventory");

        ctx.reset_page();
        assert_eq!(ctx.current_page.get_untracked(), None);
    }

    #[test]
    fn test_toggle_sidebar() {
        let owner = Owner::new();
        owner.set();

        let ctx = AppGlobalContext::new();
        ctx.toggle_sidebar();
        assert!(ctx.sidebar_collapsed.get_untracked());
        ctx.toggle_sidebar();
        assert!(!ctx.sidebar_collapsed.get_untracked());
    }
}
