//! The museum object model and its display dispatch.
//!
//! The hierarchy is a closed set of variants rather than an open class
//! tree: a [`MuseumObject`] is restricted, public-domain, or on display,
//! and nothing else. Being the public-domain variant *is* the license
//! grant, so there is no boolean flag that could disagree with the type.

use std::fmt;
use std::hash::{Hash, Hasher};

use url::Url;

use crate::error::ViewerError;
use crate::preview::{BrowserView, MapView, MuseumObjectView, PreviewPane};

/// Fields every museum object carries, whatever its variant.
#[derive(Debug, Clone)]
pub struct ObjectRecord {
    object_id: u64,
    title: String,
    object_url: String,
    credit_line: String,
}

impl ObjectRecord {
    pub fn new(
        object_id: u64,
        title: impl Into<String>,
        object_url: impl Into<String>,
        credit_line: impl Into<String>,
    ) -> Self {
        Self {
            object_id,
            title: title.into(),
            object_url: object_url.into(),
            credit_line: credit_line.into(),
        }
    }
}

/// A public-domain artwork: its small image may be rendered inline without
/// licensing restrictions.
#[derive(Debug, Clone)]
pub struct PublicDomainObject {
    record: ObjectRecord,
    primary_image_small: String,
}

impl PublicDomainObject {
    pub fn new(record: ObjectRecord, primary_image_small: impl Into<String>) -> Self {
        Self {
            record,
            primary_image_small: primary_image_small.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn credit_line(&self) -> &str {
        &self.record.credit_line
    }

    pub fn primary_image_small(&self) -> &str {
        &self.primary_image_small
    }
}

impl From<&PublicDomainObject> for MuseumObjectView {
    fn from(object: &PublicDomainObject) -> Self {
        MuseumObjectView::new(
            object.title(),
            object.primary_image_small(),
            object.credit_line(),
        )
    }
}

/// An artwork currently hanging in a gallery.
#[derive(Debug, Clone)]
pub struct OnDisplayObject {
    record: ObjectRecord,
    gallery_number: String,
}

impl OnDisplayObject {
    pub fn new(record: ObjectRecord, gallery_number: impl Into<String>) -> Self {
        Self {
            record,
            gallery_number: gallery_number.into(),
        }
    }
}

/// Capability a variant opts into when visitors can walk to it.
pub trait OnDisplay {
    fn gallery_number(&self) -> &str;

    /// Put a route map on the pane. Without a gallery number there is
    /// nowhere to route to, so the call does nothing.
    fn show_map(&self, pane: &mut PreviewPane, from: &str, to: &str);
}

impl OnDisplay for OnDisplayObject {
    fn gallery_number(&self) -> &str {
        &self.gallery_number
    }

    fn show_map(&self, pane: &mut PreviewPane, from: &str, to: &str) {
        if self.gallery_number.is_empty() {
            return;
        }
        pane.set_live_view(Box::new(MapView::new(from, to)));
    }
}

/// A displayable artwork. The set of variants is closed; there is no
/// directly-instantiable "base" case.
#[derive(Debug, Clone)]
pub enum MuseumObject {
    /// Not in the public domain: only its collection page may be shown.
    Restricted(ObjectRecord),
    PublicDomain(PublicDomainObject),
    OnDisplay(OnDisplayObject),
}

impl MuseumObject {
    pub fn restricted(
        object_id: u64,
        title: impl Into<String>,
        object_url: impl Into<String>,
        credit_line: impl Into<String>,
    ) -> Self {
        Self::Restricted(ObjectRecord::new(object_id, title, object_url, credit_line))
    }

    pub fn public_domain(
        object_id: u64,
        title: impl Into<String>,
        object_url: impl Into<String>,
        primary_image_small: impl Into<String>,
        credit_line: impl Into<String>,
    ) -> Self {
        Self::PublicDomain(PublicDomainObject::new(
            ObjectRecord::new(object_id, title, object_url, credit_line),
            primary_image_small,
        ))
    }

    pub fn on_display(
        object_id: u64,
        title: impl Into<String>,
        object_url: impl Into<String>,
        credit_line: impl Into<String>,
        gallery_number: impl Into<String>,
    ) -> Self {
        Self::OnDisplay(OnDisplayObject::new(
            ObjectRecord::new(object_id, title, object_url, credit_line),
            gallery_number,
        ))
    }

    fn record(&self) -> &ObjectRecord {
        match self {
            Self::Restricted(record) => record,
            Self::PublicDomain(object) => &object.record,
            Self::OnDisplay(object) => &object.record,
        }
    }

    pub fn object_id(&self) -> u64 {
        self.record().object_id
    }

    pub fn title(&self) -> &str {
        &self.record().title
    }

    pub fn object_url(&self) -> &str {
        &self.record().object_url
    }

    pub fn credit_line(&self) -> &str {
        &self.record().credit_line
    }

    /// Derived from the variant; there is no stored flag to contradict it.
    pub fn is_public_domain(&self) -> bool {
        matches!(self, Self::PublicDomain(_))
    }

    /// The object URL as a parsed handle, or why it could not be parsed.
    pub fn object_url_parsed(&self) -> Result<Url, ViewerError> {
        let raw = self.object_url();
        Url::parse(raw).map_err(|source| ViewerError::InvalidUrl {
            url: raw.to_string(),
            source,
        })
    }

    /// Show this object on the pane.
    ///
    /// Public-domain objects always take the inline path, built straight
    /// from the object; no URL parsing is involved. Everything else opens
    /// the collection page in the browser surface, and a URL that fails to
    /// parse makes the whole call a silent no-op.
    pub fn show_image(&self, pane: &mut PreviewPane) {
        match self {
            Self::PublicDomain(object) => {
                pane.set_live_view(Box::new(MuseumObjectView::from(object)));
            }
            Self::Restricted(_) | Self::OnDisplay(_) => {
                let url = match self.object_url_parsed() {
                    Ok(url) => url,
                    Err(_) => return,
                };
                pane.set_live_view(Box::new(BrowserView::new(url)));
            }
        }
    }
}

// Identity is the object id alone. Two records for the same artwork compare
// equal even when their other fields differ.
impl PartialEq for MuseumObject {
    fn eq(&self, other: &Self) -> bool {
        self.object_id() == other.object_id()
    }
}

impl Eq for MuseumObject {}

impl Hash for MuseumObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.object_id().hash(state);
    }
}

impl fmt::Display for MuseumObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.credit_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::SurfaceKind;

    fn wheat_field_pd() -> MuseumObject {
        MuseumObject::public_domain(
            436535,
            "Wheat Field with Cypresses",
            "https://www.metmuseum.org/art/collection/search/436535",
            "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg",
            "Purchase, The Annenberg Foundation Gift, 1993",
        )
    }

    fn cypress_and_poppies() -> MuseumObject {
        MuseumObject::restricted(
            13061,
            "Cypress and Poppies",
            "https://www.metmuseum.org/art/collection/search/13061",
            "Gift of Iola Stetson Haverstick, 1982",
        )
    }

    #[test]
    fn equality_is_by_object_id_across_variants() {
        let restricted = MuseumObject::restricted(436535, "Another title", "not-a-url", "n/a");
        assert_eq!(wheat_field_pd(), restricted);
    }

    #[test]
    fn differing_ids_are_unequal_even_with_matching_fields() {
        let a = MuseumObject::restricted(1, "Same", "https://example.org/", "Same credit");
        let b = MuseumObject::restricted(2, "Same", "https://example.org/", "Same credit");
        assert_ne!(a, b);
    }

    #[test]
    fn hash_agrees_with_equality() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(wheat_field_pd());
        let same_artwork = MuseumObject::on_display(
            436535,
            "Wheat Field with Cypresses",
            "https://www.metmuseum.org/art/collection/search/436535",
            "Purchase, The Annenberg Foundation Gift, 1993",
            "199",
        );
        assert!(seen.contains(&same_artwork));
    }

    #[test]
    fn description_is_title_colon_credit_line() {
        assert_eq!(
            cypress_and_poppies().to_string(),
            "Cypress and Poppies: Gift of Iola Stetson Haverstick, 1982"
        );
    }

    #[test]
    fn public_domain_objects_always_show_inline() {
        let mut pane = PreviewPane::new();
        // Even a hopeless object URL is irrelevant on this path.
        let object = MuseumObject::public_domain(9, "Untitled", "", "img.jpg", "Anonymous");
        object.show_image(&mut pane);
        assert_eq!(pane.kind(), Some(SurfaceKind::Inline));
    }

    #[test]
    fn restricted_objects_open_the_browser_surface() {
        let mut pane = PreviewPane::new();
        cypress_and_poppies().show_image(&mut pane);
        assert_eq!(pane.kind(), Some(SurfaceKind::Browser));
    }

    #[test]
    fn unparsable_url_makes_show_image_a_silent_no_op() {
        let mut pane = PreviewPane::new();
        let object = MuseumObject::restricted(7, "Broken", "", "n/a");
        object.show_image(&mut pane);
        assert!(pane.current().is_none());
    }

    #[test]
    fn object_url_parsed_reports_the_failure_show_image_swallows() {
        let object = MuseumObject::restricted(7, "Broken", "", "n/a");
        assert!(matches!(
            object.object_url_parsed(),
            Err(ViewerError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn on_display_objects_use_the_browser_path_for_images() {
        let mut pane = PreviewPane::new();
        let object = MuseumObject::on_display(
            436535,
            "Wheat Field with Cypresses",
            "https://www.metmuseum.org/art/collection/search/436535",
            "Purchase, The Annenberg Foundation Gift, 1993",
            "199",
        );
        object.show_image(&mut pane);
        assert_eq!(pane.kind(), Some(SurfaceKind::Browser));
    }

    #[test]
    fn show_map_routes_to_the_gallery() {
        let mut pane = PreviewPane::new();
        let object = OnDisplayObject::new(
            ObjectRecord::new(436535, "Wheat Field with Cypresses", "", ""),
            "199",
        );
        object.show_map(&mut pane, "Great Hall", "Gallery 199");
        assert_eq!(pane.kind(), Some(SurfaceKind::Map));
    }

    #[test]
    fn show_map_without_a_gallery_number_does_nothing() {
        let mut pane = PreviewPane::new();
        let object = OnDisplayObject::new(ObjectRecord::new(1, "Crated", "", ""), "");
        object.show_map(&mut pane, "Great Hall", "storage");
        assert!(pane.current().is_none());
    }
}
