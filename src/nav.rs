//! In-page navigation targets and scroll arithmetic.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub id: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        name: "Projects",
        id: "projects",
    },
    NavItem {
        name: "Experience",
        id: "experience",
    },
    NavItem {
        name: "Skills",
        id: "skills",
    },
    NavItem {
        name: "Education",
        id: "education",
    },
    NavItem {
        name: "Contact",
        id: "contact",
    },
];

/// Document offset to scroll to so a section lands just below the fixed
/// navbar. `element_top` is viewport-relative, as a bounding rect reports it.
pub fn scroll_target(element_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    (element_top + scroll_y - nav_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target_offsets_navbar() {
        assert_eq!(scroll_target(400.0, 0.0, 80.0), 320.0);
        assert_eq!(scroll_target(-200.0, 1000.0, 80.0), 720.0);
    }

    #[test]
    fn test_scroll_target_never_negative() {
        assert_eq!(scroll_target(10.0, 0.0, 80.0), 0.0);
        assert_eq!(scroll_target(-50.0, 20.0, 0.0), 0.0);
    }

    #[test]
    fn test_nav_items_link_to_sections() {
        let hrefs = NAV_ITEMS.map(|item| item.href());
        assert_eq!(
            hrefs,
            ["#projects", "#experience", "#skills", "#education", "#contact"].map(String::from)
        );
    }
}
