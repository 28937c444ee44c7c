//! Lesson 2: Structs and Classes — starter.
//!
//! One value type, one method, two presentation strategies.
//! Run with: cargo run --bin starter_02_structs_and_classes

use museum_viewer::preview::PreviewPane;

// TODO: declare the remaining fields (image URL, credit line, flag)
#[derive(Clone)]
struct MuseumObject {
    object_id: u64,
    title: String,
    object_url: String,
}

impl MuseumObject {
    fn new(object_id: u64, title: &str, object_url: &str) -> Self {
        Self {
            object_id,
            title: title.to_string(),
            object_url: object_url.to_string(),
        }
    }

    fn show_image(&self, _pane: &mut PreviewPane) {
        // TODO: public-domain objects get the inline view,
        // everything else opens the collection page in the browser
    }

    // TODO: add change_title and watch value semantics at work
}

fn main() {
    let object = MuseumObject::new(
        436535,
        "Wheat Field with Cypresses",
        "https://www.metmuseum.org/art/collection/search/436535",
    );

    let mut pane = PreviewPane::new();
    object.show_image(&mut pane);
    println!("object {}: {}", object.object_id, object.title);
    println!("collection page: {}", object.object_url);
    // Nothing renders yet: show_image is still a stub.
    pane.show();
}
