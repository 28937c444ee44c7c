//! A toy travel-time calculator.
//!
//! The distances here are stubs, not routing: each mode answers with a
//! fixed figure so the lessons can focus on the dispatch, not the maps.

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The procedural baseline: no object, just inputs.
pub fn travel_time(actual_distance: f64, average_speed: f64) -> f64 {
    actual_distance / average_speed
}

/// A way of getting between two locations.
///
/// `actual_distance` has no default implementation: every concrete mode
/// must supply its own, so there is no base type to call it on by mistake.
pub trait TravelMode {
    fn mode(&self) -> &str;

    fn average_speed(&self) -> f64;

    /// Distance between `from` and `to` using whatever map information is
    /// relevant to this mode.
    fn actual_distance(&self, from: &Location, to: &Location) -> f64;

    fn compute_travel_time(&self, from: &Location, to: &Location) -> f64 {
        self.actual_distance(from, to) / self.average_speed()
    }
}

pub struct Walking {
    average_speed: f64,
}

impl Walking {
    pub fn new(average_speed: f64) -> Self {
        Self { average_speed }
    }
}

impl TravelMode for Walking {
    fn mode(&self) -> &str {
        "walking"
    }

    fn average_speed(&self) -> f64 {
        self.average_speed
    }

    fn actual_distance(&self, _from: &Location, _to: &Location) -> f64 {
        // would use walking paths, low-traffic roads, hills
        42.0
    }
}

pub struct Driving {
    average_speed: f64,
}

impl Driving {
    pub fn new(average_speed: f64) -> Self {
        Self { average_speed }
    }

    /// Travel time adjusted for traffic and the time lost parking.
    ///
    /// Only `Driving` has this signature; a `dyn TravelMode` or any other
    /// mode simply does not offer it, so passing traffic factors to a
    /// walker is a compile error rather than a runtime surprise.
    pub fn compute_travel_time_with(
        &self,
        from: &Location,
        to: &Location,
        traffic: f64,
        parking: f64,
    ) -> f64 {
        self.actual_distance(from, to) / self.average_speed * traffic + parking
    }
}

impl TravelMode for Driving {
    fn mode(&self) -> &str {
        "driving"
    }

    fn average_speed(&self) -> f64 {
        self.average_speed
    }

    fn actual_distance(&self, _from: &Location, _to: &Location) -> f64 {
        // would use road and tollway map information
        57.0
    }
}
