use crate::project::city_to_pixel;
use crate::types::city::{CandidateCity, SelectedCity};
use crate::types::geo::BoundingBox;
use crate::types::region::Region;
use log::debug;

/// Picks the candidates that fit inside `bbox` without crowding each other.
///
/// Candidates are scanned once, in input order. A candidate is accepted when its
/// planar distance to every city accepted so far is at least the candidate's own
/// `min_separation`. Rejected candidates are never revisited, so the input order
/// decides which of two nearby cities wins.
pub fn select(candidates: &[CandidateCity], bbox: &BoundingBox) -> Vec<CandidateCity> {
    let mut accepted: Vec<CandidateCity> = Vec::new();

    for candidate in candidates.iter().filter(|c| bbox.admits(c.location)) {
        let clear = accepted.iter().all(|placed| {
            candidate.location.planar_distance(&placed.location) >= candidate.min_separation
        });
        if clear {
            accepted.push(candidate.clone());
        } else {
            debug!("Skipping '{}': too close to an accepted city", candidate.name);
        }
    }

    accepted
}

/// Runs [`select`] and anchors every accepted city on the map canvas.
pub fn place(candidates: &[CandidateCity], bbox: &BoundingBox, region: Region) -> Vec<SelectedCity> {
    select(candidates, bbox)
        .into_iter()
        .map(|city| {
            let position = city_to_pixel(city.location, bbox.max_lat, bbox.min_lon, region);
            SelectedCity { city, position }
        })
        .collect()
}
