//! In-app pages and their URL fragments (`#/location`, `#/ai`, ...).

/// A top-level page of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Location,
    Analysis,
    Alerts,
    Precautions,
    Assistant,
}

impl Page {
    /// Pages linked from the navbar, in display order.
    pub const NAV: [Page; 5] = [
        Page::Home,
        Page::Location,
        Page::Alerts,
        Page::Precautions,
        Page::Assistant,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Location => "/location",
            Page::Analysis => "/analysis",
            Page::Alerts => "/alert",
            Page::Precautions => "/precautions",
            Page::Assistant => "/ai",
        }
    }

    /// Navbar label.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Location => "Location",
            Page::Analysis => "Analysis",
            Page::Alerts => "Alert",
            Page::Precautions => "Precautions",
            Page::Assistant => "AI",
        }
    }

    /// Page for a path or `#`-fragment. Unknown paths land on Home.
    pub fn from_path(path: &str) -> Page {
        let path = path.trim_start_matches('#');
        let path = path.trim_end_matches('/');
        match path {
            "" => Page::Home,
            "/location" => Page::Location,
            "/analysis" => Page::Analysis,
            "/alert" => Page::Alerts,
            "/precautions" => Page::Precautions,
            "/ai" => Page::Assistant,
            other => {
                log::warn!("[DWLR] route: unknown path '{}', showing home", other);
                Page::Home
            }
        }
    }

    /// Page named by the current `location.hash`.
    pub fn current() -> Page {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| Page::from_path(&hash))
            .unwrap_or_default()
    }

    /// Write this page into `location.hash`.
    pub fn push(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(self.path()) {
                log::warn!("[DWLR] route: could not set hash: {:?}", e);
            }
        }
    }
}
