//! Lesson 1: Basics of OOP — complete.
//!
//! The must-override contract now lives in a trait: `actual_distance` has
//! no default body, so there is no base object to call it on by mistake.
//! Run with: cargo run --bin complete_01_travel_time

use colored::Colorize;
use museum_viewer::travel::{travel_time, Driving, Location, TravelMode, Walking};

fn main() {
    let melbourne = Location::new(-37.840935, 144.946457);
    let ballarat = Location::new(-37.5622, 143.8503);

    println!("{}", "=== Procedural baseline ===".bold());
    println!(
        "42 km at 6 km/h -> {} hours",
        travel_time(42.0, 6.0)
    );

    println!("\n{}", "=== Walking ===".bold());
    let tim = Walking::new(6.0);
    println!(
        "{} covers {} km",
        tim.mode(),
        tim.actual_distance(&melbourne, &ballarat)
    );
    println!(
        "travel time: {} hours",
        tim.compute_travel_time(&melbourne, &ballarat)
    );

    println!("\n{}", "=== Driving ===".bold());
    let car = Driving::new(50.0);
    let hours = car.compute_travel_time(&melbourne, &ballarat);
    let real_hours = car.compute_travel_time_with(&melbourne, &ballarat, 1.2, 0.5);
    println!("travel time: {hours} hours");
    println!("with traffic 1.2 and parking 0.5: {real_hours} hours");

    println!("\n{}", "=== Dynamic dispatch ===".bold());
    let modes: Vec<Box<dyn TravelMode>> = vec![Box::new(tim), Box::new(car)];
    for mode in &modes {
        println!(
            "{}: {:.2} hours",
            mode.mode(),
            mode.compute_travel_time(&melbourne, &ballarat)
        );
    }

    // The traffic-and-parking variant exists only on Driving. This does
    // not compile, because `dyn TravelMode` has no such method:
    // modes[0].compute_travel_time_with(&melbourne, &ballarat, 1.2, 0.5);
}
