//! Navigation menu state and keyboard shortcuts.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Mobile navigation menu. Closed by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Page-level keyboard actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    ToggleTheme,
    CloseMenu,
}

/// Map a `KeyboardEvent.key` value to a shortcut.
///
/// `T` is ignored while typing into an input or textarea; `Escape` always
/// closes the menu.
#[must_use]
pub fn shortcut_for(key: &str, target_is_editable: bool) -> Option<Shortcut> {
    match key {
        "t" | "T" if !target_is_editable => Some(Shortcut::ToggleTheme),
        "Escape" => Some(Shortcut::CloseMenu),
        _ => None,
    }
}

/// Whether an element with this tag name swallows typed characters.
#[must_use]
pub fn is_editable_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}
