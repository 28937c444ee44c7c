//! Lesson 4: Protocols and Interfaces — starter.
//!
//! Equality and description are in place; the on-display capability is
//! still to be explored.
//! Run with: cargo run --bin starter_04_protocols_interfaces

use museum_viewer::museum::MuseumObject;

fn main() {
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

    // Identity is the object id alone.
    println!("same artwork: {}", object == object2);
    println!("{object}");

    // TODO: put the Wheat Field on display in gallery 199
    // TODO: call show_map through the OnDisplay trait and render the route
    // TODO: show what happens when the gallery number is empty
}
