//! Lesson 2: Structs and Classes — complete.
//!
//! A single value type that branches on its public-domain flag, plus
//! copy-on-write mutation: changing a copy's title leaves the original
//! untouched. Lesson 3 replaces the flag with distinct variants.
//! Run with: cargo run --bin complete_02_structs_and_classes

use colored::Colorize;
use museum_viewer::preview::{BrowserView, MuseumObjectView, PreviewPane};
use url::Url;

#[derive(Clone)]
struct MuseumObject {
    object_id: u64,
    title: String,
    object_url: String,
    primary_image_small: String,
    credit_line: String,
    is_public_domain: bool,
}

impl MuseumObject {
    fn new(
        object_id: u64,
        title: &str,
        object_url: &str,
        primary_image_small: &str,
        credit_line: &str,
        is_public_domain: bool,
    ) -> Self {
        Self {
            object_id,
            title: title.to_string(),
            object_url: object_url.to_string(),
            primary_image_small: primary_image_small.to_string(),
            credit_line: credit_line.to_string(),
            is_public_domain,
        }
    }

    fn show_image(&self, pane: &mut PreviewPane) {
        if self.is_public_domain {
            pane.set_live_view(Box::new(MuseumObjectView::new(
                &self.title,
                &self.primary_image_small,
                &self.credit_line,
            )));
        } else {
            let url = match Url::parse(&self.object_url) {
                Ok(url) => url,
                Err(_) => return,
            };
            pane.set_live_view(Box::new(BrowserView::new(url)));
        }
    }

    fn change_title(&mut self, new_title: &str) {
        self.title = new_title.to_string();
    }
}

fn main() {
    let object_pd = MuseumObject::new(
        436535,
        "Wheat Field with Cypresses",
        "https://www.metmuseum.org/art/collection/search/436535",
        "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg",
        "Purchase, The Annenberg Foundation Gift, 1993",
        true,
    );
    let object = MuseumObject::new(
        13061,
        "Cypress and Poppies",
        "https://www.metmuseum.org/art/collection/search/13061",
        "",
        "Gift of Iola Stetson Haverstick, 1982",
        false,
    );

    println!("{}", "=== Value semantics ===".bold());
    let mut object2 = object_pd.clone();
    object2.change_title("Sunflowers");
    println!("copy:     {} ({})", object2.title, object2.object_id);
    println!("original: {} ({})", object_pd.title, object_pd.object_id);

    println!("\n{}", "=== Dispatch on the flag ===".bold());
    let mut pane = PreviewPane::new();
    object.show_image(&mut pane);
    println!("{}:", object.title);
    pane.show();

    object2.show_image(&mut pane);
    println!("{}:", object2.title);
    pane.show();
}

#[cfg(test)]
mod tests {
    use super::*;
    use museum_viewer::preview::SurfaceKind;

    fn wheat_field() -> MuseumObject {
        MuseumObject::new(
            436535,
            "Wheat Field with Cypresses",
            "https://www.metmuseum.org/art/collection/search/436535",
            "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg",
            "Purchase, The Annenberg Foundation Gift, 1993",
            true,
        )
    }

    #[test]
    fn changing_a_copy_leaves_the_original_alone() {
        let original = wheat_field();
        let mut copy = original.clone();
        copy.change_title("Sunflowers");
        assert_eq!(copy.title, "Sunflowers");
        assert_eq!(original.title, "Wheat Field with Cypresses");
    }

    #[test]
    fn the_flag_selects_the_surface() {
        let mut pane = PreviewPane::new();
        wheat_field().show_image(&mut pane);
        assert_eq!(pane.kind(), Some(SurfaceKind::Inline));

        let restricted = MuseumObject::new(
            13061,
            "Cypress and Poppies",
            "https://www.metmuseum.org/art/collection/search/13061",
            "",
            "Gift of Iola Stetson Haverstick, 1982",
            false,
        );
        restricted.show_image(&mut pane);
        assert_eq!(pane.kind(), Some(SurfaceKind::Browser));
    }

    #[test]
    fn a_bad_url_skips_the_browser_surface() {
        let mut pane = PreviewPane::new();
        let broken = MuseumObject::new(1, "Broken", "", "", "", false);
        broken.show_image(&mut pane);
        assert!(pane.current().is_none());
    }
}
