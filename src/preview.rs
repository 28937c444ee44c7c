//! The live-preview surface the lessons render into.
//!
//! Playground-style lessons want a "live view" pane that shows whatever the
//! last display request produced. This module models that seam explicitly:
//! a [`PreviewPane`] exclusively owns at most one surface, and every
//! `set_live_view` call replaces the previous surface wholesale. Rendering
//! goes to the terminal, standing in for a GUI preview.

use colored::Colorize;
use url::Url;

/// Which presentation strategy a surface implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Full-screen browser view of an object's collection page.
    Browser,
    /// Inline rendering of title, image and credit line.
    Inline,
    /// Route map between two named locations.
    Map,
}

/// A surface the preview pane can display.
pub trait LiveView {
    fn kind(&self) -> SurfaceKind;
    fn render(&self) -> String;
}

/// Browser surface: renders a parsed URL full-screen.
pub struct BrowserView {
    url: Url,
}

impl BrowserView {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl LiveView for BrowserView {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Browser
    }

    fn render(&self) -> String {
        format!(
            "{}\n  {}",
            "[ browser ]".bold(),
            self.url.as_str().underline()
        )
    }
}

/// Inline surface: the view-description record for a public-domain object.
pub struct MuseumObjectView {
    title: String,
    image_url: String,
    credit_line: String,
}

impl MuseumObjectView {
    pub fn new(
        title: impl Into<String>,
        image_url: impl Into<String>,
        credit_line: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
            credit_line: credit_line.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn credit_line(&self) -> &str {
        &self.credit_line
    }
}

impl LiveView for MuseumObjectView {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Inline
    }

    fn render(&self) -> String {
        let image_line = if self.image_url.is_empty() {
            "Display image here".dimmed().to_string()
        } else {
            format!("[image] {}", self.image_url)
        };
        format!(
            "{}\n  {}\n  {}",
            self.title.blue().bold(),
            image_line,
            self.credit_line.italic()
        )
    }
}

/// Map surface: a route between two named locations. Routing itself is a
/// stub; the surface only records the endpoints.
pub struct MapView {
    from: String,
    to: String,
}

impl MapView {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from_location(&self) -> &str {
        &self.from
    }

    pub fn to_location(&self) -> &str {
        &self.to
    }
}

impl LiveView for MapView {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Map
    }

    fn render(&self) -> String {
        format!(
            "{}\n  {} to {}",
            "[ map ]".bold(),
            self.from.green(),
            self.to.green()
        )
    }
}

/// The exclusively-owned preview target. Each display request replaces the
/// current surface; surfaces are never merged.
#[derive(Default)]
pub struct PreviewPane {
    surface: Option<Box<dyn LiveView>>,
}

impl PreviewPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is currently displayed with `view`.
    pub fn set_live_view(&mut self, view: Box<dyn LiveView>) {
        self.surface = Some(view);
    }

    pub fn current(&self) -> Option<&dyn LiveView> {
        self.surface.as_deref()
    }

    /// Kind of the surface currently displayed, if any.
    pub fn kind(&self) -> Option<SurfaceKind> {
        self.surface.as_deref().map(|surface| surface.kind())
    }

    /// Print the current surface to the terminal.
    pub fn show(&self) {
        if let Some(surface) = &self.surface {
            println!("{}", surface.render());
        }
    }
}
