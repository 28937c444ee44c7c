//! # Object-Oriented Programming Lessons
//!
//! A small course on OOP concepts in Rust, built around two toy domains:
//! a museum object viewer and a travel-time calculator.
//!
//! ## Lesson 1: Basics of OOP
//! - Procedural functions vs. objects with behavior
//! - Must-override contracts as required trait methods
//! - Method overloading scoped to one concrete type
//!
//! ## Lesson 2: Structs and Classes
//! - Value semantics and copy-on-write mutation
//! - Branching on a flag inside one method
//!
//! ## Lesson 3: Inheritance and Polymorphism
//! - A closed hierarchy as a tagged enum
//! - An override that replaces the base behavior entirely
//!
//! ## Lesson 4: Protocols and Interfaces
//! - Identity-based equality and `Display`
//! - Opting into a capability trait
//!
//! Each lesson ships as a pair of binaries: `starter_NN_*` (incomplete,
//! TODO-marked, still runnable) and `complete_NN_*` (the finished version).
//! The complete lessons drive the [`preview::PreviewPane`], a terminal
//! stand-in for a live GUI preview surface.

pub mod error;
pub mod museum;
pub mod preview;
pub mod travel;

pub use error::ViewerError;
