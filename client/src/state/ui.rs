//! Local UI chrome state (tabs and collapsible info panels).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the comment and map state so the page
//! chrome can evolve independently of backend data.
//!
//! A tab and every content region sharing its title are selected together,
//! so the selection is stored once as an index. That makes "exactly one tab
//! selected" hold by construction.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A navigation tab. Content regions are tied to a tab through its `title`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tab {
    pub title: &'static str,
    pub label: &'static str,
    /// Special tabs use the full-width gallery layout.
    pub special: bool,
}

pub const ABOUT_TAB: &str = "about";
pub const PROJECTS_TAB: &str = "projects";
pub const GALLERY_TAB: &str = "gallery";
pub const COMMENTS_TAB: &str = "comments";

/// Tabs in page order. The first one is selected on load.
pub const PORTFOLIO_TABS: [Tab; 4] = [
    Tab { title: ABOUT_TAB, label: "About Me", special: false },
    Tab { title: PROJECTS_TAB, label: "Projects", special: false },
    Tab { title: GALLERY_TAB, label: "Gallery", special: true },
    Tab { title: COMMENTS_TAB, label: "Comments", special: false },
];

/// Tab selection plus visibility of the shared text/picture layout wrappers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabsState {
    tabs: Vec<Tab>,
    selected: usize,
    /// `false` while a special tab is selected.
    pub layout_wrappers_visible: bool,
}

impl TabsState {
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    #[must_use]
    pub fn selected(&self) -> Tab {
        self.tabs[self.selected]
    }

    /// Whether the tab (and its content regions) titled `title` are selected.
    #[must_use]
    pub fn is_selected(&self, title: &str) -> bool {
        self.selected().title == title
    }

    /// Select the tab titled `title`.
    ///
    /// Returns `false` without changing anything when the tab is already
    /// selected or no tab has that title.
    pub fn activate(&mut self, title: &str) -> bool {
        let Some(index) = self.tabs.iter().position(|tab| tab.title == title) else {
            return false;
        };
        if index == self.selected {
            return false;
        }
        if self.selected().special {
            self.layout_wrappers_visible = true;
        }
        if self.tabs[index].special {
            self.layout_wrappers_visible = false;
        }
        self.selected = index;
        true
    }
}

impl Default for TabsState {
    fn default() -> Self {
        Self { tabs: PORTFOLIO_TABS.to_vec(), selected: 0, layout_wrappers_visible: true }
    }
}

/// One collapsible info group: a clickable header and its content block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoPanel {
    pub heading: &'static str,
    pub body: &'static str,
    /// Header highlight.
    pub active: bool,
    /// Rendered content height in px; `None` is collapsed.
    pub max_height: Option<u32>,
}

impl InfoPanel {
    #[must_use]
    pub const fn collapsed(heading: &'static str, body: &'static str) -> Self {
        Self { heading, body, active: false, max_height: None }
    }

    /// Flip the header highlight and expand to `natural_height` or collapse.
    pub fn toggle(&mut self, natural_height: u32) {
        self.active = !self.active;
        self.max_height = match self.max_height {
            Some(_) => None,
            None => Some(natural_height),
        };
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.max_height.is_some()
    }
}

/// All info groups shown on the About tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelsState {
    pub panels: Vec<InfoPanel>,
}

impl PanelsState {
    /// Toggle the panel at `index`. Returns `false` for an unknown index.
    pub fn toggle(&mut self, index: usize, natural_height: u32) -> bool {
        let Some(panel) = self.panels.get_mut(index) else {
            return false;
        };
        panel.toggle(natural_height);
        true
    }
}

impl Default for PanelsState {
    fn default() -> Self {
        Self {
            panels: vec![
                InfoPanel::collapsed(
                    "Education",
                    "Computer science undergraduate with a focus on systems and distributed computing.",
                ),
                InfoPanel::collapsed(
                    "Experience",
                    "Software engineering internships building web services, data pipelines and tooling.",
                ),
                InfoPanel::collapsed(
                    "Interests",
                    "Photography, hiking, board games and contributing to open-source projects.",
                ),
            ],
        }
    }
}
