//! Lesson 3: Inheritance and Polymorphism — starter.
//!
//! One type is doing two jobs. The image URL only makes sense for
//! public-domain objects, yet every object carries it.
//! Run with: cargo run --bin starter_03_inheritance_polymorphism

use museum_viewer::preview::{BrowserView, PreviewPane};
use url::Url;

struct MuseumObject {
    object_id: u64,
    title: String,
    object_url: String,
    // TODO: this belongs on a dedicated public-domain variant
    primary_image_small: String,
    credit_line: String,
}

impl MuseumObject {
    fn new(
        object_id: u64,
        title: &str,
        object_url: &str,
        primary_image_small: &str,
        credit_line: &str,
    ) -> Self {
        Self {
            object_id,
            title: title.to_string(),
            object_url: object_url.to_string(),
            primary_image_small: primary_image_small.to_string(),
            credit_line: credit_line.to_string(),
        }
    }

    // TODO: the public-domain variant should replace this wholesale with
    // an inline view built from its own image URL
    fn show_image(&self, pane: &mut PreviewPane) {
        let url = match Url::parse(&self.object_url) {
            Ok(url) => url,
            Err(_) => return,
        };
        pane.set_live_view(Box::new(BrowserView::new(url)));
    }
}

fn main() {
    let object_pd = MuseumObject::new(
        436535,
        "Wheat Field with Cypresses",
        "https://www.metmuseum.org/art/collection/search/436535",
        "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg",
        "Purchase, The Annenberg Foundation Gift, 1993",
    );

    let mut pane = PreviewPane::new();
    // Public domain, image in hand, and we still bounce to the browser.
    object_pd.show_image(&mut pane);
    println!(
        "object {} has an unused image: {}",
        object_pd.object_id, object_pd.primary_image_small
    );
    println!("{}: {}", object_pd.title, object_pd.credit_line);
    pane.show();
}
