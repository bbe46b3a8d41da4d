//! Open/closed flag for the navigation bar's mobile menu.
//!
//! DESIGN
//! ======
//! The flag is independent of the viewport: widening past the breakpoint hides
//! the menu without clearing it, so narrowing again brings the menu back.

#[cfg(test)]
#[path = "nav_menu_test.rs"]
mod nav_menu_test;

/// Media query for the medium-screen breakpoint.
pub const ABOVE_MEDIUM_QUERY: &str = "(min-width: 1060px)";

/// Which right-hand side the navigation bar renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLayout {
    /// Inline links plus the sign-up button.
    Desktop,
    /// Sign-up button plus the hamburger; `menu_open` shows the side modal.
    Mobile { menu_open: bool },
}

/// Local state of one mounted navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenuState {
    pub toggled: bool,
}

impl NavMenuState {
    /// Flip the flag. Shared by the hamburger and the close button.
    pub fn toggle(&mut self) {
        self.toggled = !self.toggled;
    }

    /// Accessible name of the hamburger, which both opens and closes the menu.
    pub fn menu_button_label(self) -> &'static str {
        if self.toggled {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    pub fn layout(self, is_above_medium: bool) -> NavLayout {
        if is_above_medium {
            NavLayout::Desktop
        } else {
            NavLayout::Mobile { menu_open: self.toggled }
        }
    }

    pub fn is_modal_visible(self, is_above_medium: bool) -> bool {
        self.layout(is_above_medium) == NavLayout::Mobile { menu_open: true }
    }
}
