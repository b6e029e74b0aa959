//! Collaborators for leaving the stories surface: opening links and moving
//! through the screen stack.
use std::cell::RefCell;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::validate_url_for_open;

// ============================================================================
// Screens and Directions
// ============================================================================

/// Destinations the navigator can report as current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    Home,
    /// Search overlay shown on top of home.
    SearchDialog,
    Settings,
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenId::Home => "home",
            ScreenId::SearchDialog => "search_dialog",
            ScreenId::Settings => "settings",
        };
        f.write_str(name)
    }
}

/// Which surface a browser load originated from. Stories links always load
/// from home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserDirection {
    FromHome,
}

// ============================================================================
// Collaborator Contracts
// ============================================================================

/// Opens URLs in a browsing context. Fire-and-forget: failures are the
/// opener's concern.
pub trait BrowserOpener {
    fn open_to_browser_and_load(&self, url: &str, new_tab: bool, from: BrowserDirection);
}

/// Query and pop the current screen.
pub trait Navigator {
    /// Current destination, or `None` when navigation state is unavailable.
    fn current_screen(&self) -> Option<ScreenId>;

    fn pop_current_screen(&self);
}

impl<T: BrowserOpener + ?Sized> BrowserOpener for &T {
    fn open_to_browser_and_load(&self, url: &str, new_tab: bool, from: BrowserDirection) {
        (**self).open_to_browser_and_load(url, new_tab, from)
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn current_screen(&self) -> Option<ScreenId> {
        (**self).current_screen()
    }

    fn pop_current_screen(&self) {
        (**self).pop_current_screen()
    }
}

// ============================================================================
// NavStack
// ============================================================================

/// In-memory back stack. The last entry is the current screen.
#[derive(Debug, Default)]
pub struct NavStack {
    screens: RefCell<Vec<ScreenId>>,
}

impl NavStack {
    /// Stack holding `screens`, bottom first.
    pub fn new(screens: Vec<ScreenId>) -> Self {
        Self {
            screens: RefCell::new(screens),
        }
    }

    /// Navigate to `screen`, making it the current one.
    pub fn push(&self, screen: ScreenId) {
        self.screens.borrow_mut().push(screen);
    }

    /// Copy of the stack, bottom first.
    pub fn screens(&self) -> Vec<ScreenId> {
        self.screens.borrow().clone()
    }
}

impl Navigator for NavStack {
    fn current_screen(&self) -> Option<ScreenId> {
        self.screens.borrow().last().copied()
    }

    fn pop_current_screen(&self) {
        match self.screens.borrow_mut().pop() {
            Some(screen) => tracing::debug!(screen = %screen, "Popped screen"),
            None => tracing::debug!("Pop requested on empty navigation stack"),
        }
    }
}

// ============================================================================
// SystemBrowser
// ============================================================================

/// Opens links in the operating system's default browser.
///
/// SEC: URLs are validated before reaching `open::that()` unless validation
/// is switched off, so a crafted link cannot smuggle a non-web scheme to the
/// OS handler.
#[derive(Debug, Clone)]
pub struct SystemBrowser {
    validate: bool,
    dry_run: bool,
}

impl SystemBrowser {
    /// Browser that launches links, validating them first when `validate` is set.
    pub fn new(validate: bool) -> Self {
        Self {
            validate,
            dry_run: false,
        }
    }

    /// Log what would be opened without launching anything.
    pub fn dry_run(validate: bool) -> Self {
        Self {
            validate,
            dry_run: true,
        }
    }
}

impl BrowserOpener for SystemBrowser {
    fn open_to_browser_and_load(&self, url: &str, new_tab: bool, from: BrowserDirection) {
        if self.validate {
            if let Err(e) = validate_url_for_open(url) {
                tracing::warn!(url = %url, error = %e, "Refusing to open link");
                return;
            }
        }

        if self.dry_run {
            tracing::info!(url = %url, new_tab, from = ?from, "Dry run: would open link");
            return;
        }

        // The OS browser decides tab placement; new_tab is informational here.
        tracing::debug!(url = %url, new_tab, from = ?from, "Opening link in system browser");
        if let Err(e) = open::that(url) {
            tracing::warn!(url = %url, error = %e, "Failed to open browser");
        }
    }
}
