//! Location state — origin country, city/country pair, map coordinates and
//! the asynchronously resolved landmark.
//!
//! Coordinate changes are synchronous; the landmark lookup is not. Several
//! lookups can be in flight at once, so each coordinate change hands out a
//! [`LookupTicket`] tagged with a monotonically increasing sequence number.
//! A result is applied only if its ticket is still the latest — the
//! last-coordinate-wins discipline. A superseded result is discarded on
//! arrival, whatever order the responses come back in.

/// Display text when no landmark was resolved.
pub const NO_LANDMARK: &str = "Nenhum ponto conhecido encontrado";

/// Tag for one in-flight landmark lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookupTicket {
    seq: u64,
    pub lat: f64,
    pub lon: f64,
}

/// Where the duck was sighted.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationState {
    pub origin_country: String,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    /// Resolved landmark for the current coordinates, if any.
    pub landmark: Option<String>,
    seq: u64,
}

impl Default for LocationState {
    fn default() -> Self {
        Self {
            origin_country: "Brasil".to_string(),
            city: "Marília".to_string(),
            country: "Brasil".to_string(),
            lat: -22.2,
            lon: -49.9,
            landmark: None,
            seq: 0,
        }
    }
}

impl LocationState {
    pub fn set_origin_country(&mut self, value: impl Into<String>) {
        self.origin_country = value.into();
    }

    pub fn set_city(&mut self, value: impl Into<String>) {
        self.city = value.into();
    }

    pub fn set_country(&mut self, value: impl Into<String>) {
        self.country = value.into();
    }

    /// Move the map marker. Always succeeds, takes effect immediately, and
    /// returns the ticket the caller must pass back with the lookup result.
    pub fn set_coordinates(&mut self, lat: f64, lon: f64) -> LookupTicket {
        self.lat = lat;
        self.lon = lon;
        self.seq += 1;
        LookupTicket { seq: self.seq, lat, lon }
    }

    /// Apply a lookup result. Returns `false` (state untouched) when the
    /// ticket has been superseded by a newer coordinate change. For the
    /// latest ticket, the landmark becomes the resolved name, or `None` on
    /// failure or an empty name — never left stale from prior coordinates.
    pub fn apply_lookup(&mut self, ticket: &LookupTicket, result: Option<String>) -> bool {
        if ticket.seq != self.seq {
            return false;
        }
        self.landmark = result.filter(|name| !name.trim().is_empty());
        true
    }

    /// Landmark display text, with the "none found" placeholder.
    pub fn landmark_label(&self) -> &str {
        self.landmark.as_deref().unwrap_or(NO_LANDMARK)
    }
}
