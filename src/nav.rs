//! Route table shared by the navbar, mobile overlay, and footer quick links,
//! plus the open/closed state of the mobile navigation overlay.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", icon: "extra-home", label: "Home" },
    NavItem { path: "/projects", icon: "extra-diagram", label: "Projects" },
    NavItem { path: "/skills", icon: "extra-code", label: "Skills" },
    NavItem { path: "/experience", icon: "extra-briefcase", label: "Experience" },
    NavItem { path: "/contact", icon: "extra-email", label: "Contact" },
];

/// Mobile menu state. Selecting any nav link closes the menu so the shell is
/// always collapsed before the next page renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_paths_are_unique() {
        let mut paths: Vec<&str> = NAV_ITEMS.iter().map(|i| i.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_nav_covers_all_pages() {
        assert_eq!(NAV_ITEMS.len(), 5);
        assert_eq!(NAV_ITEMS[0].path, "/");
        assert!(NAV_ITEMS.iter().all(|i| i.path.starts_with('/')));
    }

    #[test]
    fn test_nav_items_carry_icons() {
        for item in NAV_ITEMS {
            assert!(
                item.icon.starts_with("extra-") || item.icon.starts_with("devicon-"),
                "{} has no icon class",
                item.label
            );
        }
    }

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_while_open_stays_closed() {
        let mut menu = MenuState::default();
        menu.toggle();
        // a nav link selection closes the menu before navigation
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
