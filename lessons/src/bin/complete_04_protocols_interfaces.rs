//! Lesson 4: Protocols and Interfaces — complete.
//!
//! Identity-based equality, the `Display` description, and the
//! `OnDisplay` capability: only the on-display variant knows its gallery,
//! so only it can put a route on the map surface.
//! Run with: cargo run --bin complete_04_protocols_interfaces

use colored::Colorize;
use museum_viewer::museum::{MuseumObject, OnDisplay};
use museum_viewer::preview::PreviewPane;

fn main() {
    println!("{}", "=== Equality by identity ===".bold());
    let object = MuseumObject::restricted(
        13061,
        "Cypress and Poppies",
        "https://www.metmuseum.org/art/collection/search/13061",
        "Gift of Iola Stetson Haverstick, 1982",
    );
    let object2 = MuseumObject::restricted(
        13061,
        "Cypress and Poppies",
        "https://www.metmuseum.org/art/collection/search/13061",
        "Gift of Iola Stetson Haverstick, 1982",
    );
    println!("same artwork: {}", object == object2);
    println!("{object}");

    println!("\n{}", "=== The OnDisplay capability ===".bold());
    let object_od = MuseumObject::on_display(
        436535,
        "Wheat Field with Cypresses",
        "https://www.metmuseum.org/art/collection/search/436535",
        "Purchase, The Annenberg Foundation Gift, 1993",
        "199",
    );

    let mut pane = PreviewPane::new();
    object_od.show_image(&mut pane);
    pane.show();

    if let MuseumObject::OnDisplay(artwork) = &object_od {
        println!("\nhanging in gallery {}", artwork.gallery_number());
        artwork.show_map(&mut pane, "Great Hall", "Gallery 199");
        pane.show();
    }

    println!("\n{}", "=== Inline path, for contrast ===".bold());
    let object_pd = MuseumObject::public_domain(
        436535,
        "Wheat Field with Cypresses",
        "https://www.metmuseum.org/art/collection/search/436535",
        "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg",
        "Purchase, The Annenberg Foundation Gift, 1993",
    );
    object_pd.show_image(&mut pane);
    pane.show();
}

#[cfg(test)]
mod tests {
    use super::*;
    use museum_viewer::preview::SurfaceKind;

    #[test]
    fn records_with_one_id_are_one_artwork() {
        let a = MuseumObject::restricted(13061, "Cypress and Poppies", "", "credit A");
        let b = MuseumObject::on_display(13061, "A later catalogue entry", "", "credit B", "199");
        assert_eq!(a, b);
    }

    #[test]
    fn the_map_goes_up_only_with_a_gallery_number() {
        let mut pane = PreviewPane::new();
        let object_od = MuseumObject::on_display(436535, "Wheat Field", "", "", "199");
        if let MuseumObject::OnDisplay(artwork) = &object_od {
            artwork.show_map(&mut pane, "Great Hall", "Gallery 199");
        }
        assert_eq!(pane.kind(), Some(SurfaceKind::Map));

        let mut empty_pane = PreviewPane::new();
        let crated = MuseumObject::on_display(1, "Crated", "", "", "");
        if let MuseumObject::OnDisplay(artwork) = &crated {
            artwork.show_map(&mut empty_pane, "Great Hall", "storage");
        }
        assert!(empty_pane.current().is_none());
    }
}
