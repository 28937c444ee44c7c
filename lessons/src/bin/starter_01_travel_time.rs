//! Lesson 1: Basics of OOP — starter.
//!
//! From procedural functions to objects that own their behavior.
//! Run with: cargo run --bin starter_01_travel_time

use museum_viewer::travel::Location;

// Procedural programming function
// TODO: take the speed and distance as inputs instead of guessing
fn compute_travel_time(_from: &Location, _to: &Location) -> f64 {
    // compute point-to-point distance
    // assume some average driving speed?
    42.0
}

// Object-oriented programming: the travel mode owns its speed, and each
// concrete mode is supposed to supply its own distance lookup.
struct TravelMode {
    mode: String,
    average_speed: f64,
}

impl TravelMode {
    fn new(mode: impl Into<String>, average_speed: f64) -> Self {
        Self {
            mode: mode.into(),
            average_speed,
        }
    }

    // Calling this on the bare base type is a programming error, and it
    // fails loudly rather than inventing a distance.
    fn actual_distance(&self, _from: &Location, _to: &Location) -> f64 {
        panic!("Implement actual_distance for {}.", self.mode);
    }

    fn compute_travel_time(&self, from: &Location, to: &Location) -> f64 {
        self.actual_distance(from, to) / self.average_speed
    }
}

fn main() {
    let melbourne = Location::new(-37.840935, 144.946457);
    let ballarat = Location::new(-37.5622, 143.8503);

    println!(
        "Procedural guess: {} hours",
        compute_travel_time(&melbourne, &ballarat)
    );

    let audrey = TravelMode::new("walking", 4.5);
    println!("{} at {} km/h", audrey.mode, audrey.average_speed);
    // Uncommenting either line panics: the base mode has no distance data.
    // audrey.actual_distance(&melbourne, &ballarat);
    // audrey.compute_travel_time(&melbourne, &ballarat);

    // TODO: add a Walking mode with its own actual_distance
    // TODO: instantiate Walking and compute a travel time

    // TODO: add a Driving mode
    // TODO: give Driving an extra compute_travel_time taking traffic and parking

    // TODO: instantiate Driving and compare both computations
}
