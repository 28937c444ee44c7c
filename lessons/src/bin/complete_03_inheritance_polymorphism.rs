//! Lesson 3: Inheritance and Polymorphism — complete.
//!
//! The hierarchy is now the library's closed set of variants. The same
//! artwork, constructed as two different variants, takes two different
//! display paths: the public-domain variant replaces the browser behavior
//! entirely instead of extending it.
//! Run with: cargo run --bin complete_03_inheritance_polymorphism

use colored::Colorize;
use museum_viewer::museum::MuseumObject;
use museum_viewer::preview::{PreviewPane, SurfaceKind};

fn surface_name(kind: Option<SurfaceKind>) -> &'static str {
    match kind {
        Some(SurfaceKind::Browser) => "browser",
        Some(SurfaceKind::Inline) => "inline",
        Some(SurfaceKind::Map) => "map",
        None => "nothing",
    }
}

fn main() {
    let object = MuseumObject::restricted(
        436535,
        "Wheat Field with Cypresses",
        "https://www.metmuseum.org/art/collection/search/436535",
        "Purchase, The Annenberg Foundation Gift, 1993",
    );
    let object_pd = MuseumObject::public_domain(
        436535,
        "Wheat Field with Cypresses",
        "https://www.metmuseum.org/art/collection/search/436535",
        "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg",
        "Purchase, The Annenberg Foundation Gift, 1993",
    );

    let mut pane = PreviewPane::new();

    println!("{}", "=== Same artwork, two variants ===".bold());
    for artwork in [&object, &object_pd] {
        artwork.show_image(&mut pane);
        println!(
            "public domain: {} -> {} surface",
            artwork.is_public_domain(),
            surface_name(pane.kind())
        );
    }

    println!("\n{}", "=== Live preview ===".bold());
    // The pane holds whatever was set last: the inline view.
    pane.show();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_two_variants_pick_different_surfaces() {
        let mut pane = PreviewPane::new();

        MuseumObject::restricted(
            436535,
            "Wheat Field with Cypresses",
            "https://www.metmuseum.org/art/collection/search/436535",
            "Purchase, The Annenberg Foundation Gift, 1993",
        )
        .show_image(&mut pane);
        assert_eq!(pane.kind(), Some(SurfaceKind::Browser));

        MuseumObject::public_domain(
            436535,
            "Wheat Field with Cypresses",
            "https://www.metmuseum.org/art/collection/search/436535",
            "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg",
            "Purchase, The Annenberg Foundation Gift, 1993",
        )
        .show_image(&mut pane);
        assert_eq!(pane.kind(), Some(SurfaceKind::Inline));
    }

    #[test]
    fn surface_names_cover_the_empty_pane() {
        assert_eq!(surface_name(None), "nothing");
        assert_eq!(surface_name(Some(SurfaceKind::Map)), "map");
    }
}
