//! Normalization of raw Foursquare places into canonical records.

use mapcast_core::records::{latitude_in_range, longitude_in_range, PoiRecord};

use crate::error::FoursquareError;
use crate::types::Place;

/// Category label used when the provider returns no category at all —
/// the one field the normalizer is allowed to default.
const UNCATEGORIZED: &str = "Uncategorized";

/// Photo size segment for assembled image URLs.
const PHOTO_SIZE: &str = "original";

/// Converts one raw place into a [`PoiRecord`].
///
/// The provider id is preserved verbatim (it is the stable rendering key
/// downstream). `description`, `address`, `rating`, and the image URL are
/// optional passthrough; everything else is required.
///
/// # Errors
///
/// - [`FoursquareError::MissingField`] when `fsq_id`, `name`, or the main
///   geocode is absent.
/// - [`FoursquareError::Invalid`] when the coordinate is out of range.
pub fn normalize_place(raw: &Place) -> Result<PoiRecord, FoursquareError> {
    use FoursquareError::{Invalid, MissingField};

    let id = raw.fsq_id.clone().ok_or(MissingField("fsq_id"))?;
    let name = raw.name.clone().ok_or(MissingField("name"))?;

    let point = raw
        .geocodes
        .as_ref()
        .and_then(|g| g.main.as_ref())
        .ok_or(MissingField("geocodes.main"))?;
    let lat = point.latitude.ok_or(MissingField("geocodes.main.latitude"))?;
    let lon = point
        .longitude
        .ok_or(MissingField("geocodes.main.longitude"))?;
    if !latitude_in_range(lat) || !longitude_in_range(lon) {
        return Err(Invalid(format!("coordinate out of range: ({lat}, {lon})")));
    }

    let category = raw
        .categories
        .first()
        .and_then(|c| c.name.clone())
        .unwrap_or_else(|| UNCATEGORIZED.to_string());

    let address = raw
        .location
        .as_ref()
        .and_then(|l| l.formatted_address.clone());

    let image_url = raw.photos.first().and_then(|photo| {
        match (photo.prefix.as_deref(), photo.suffix.as_deref()) {
            (Some(prefix), Some(suffix)) => Some(format!("{prefix}{PHOTO_SIZE}{suffix}")),
            _ => None,
        }
    });

    Ok(PoiRecord {
        id,
        name,
        lat,
        lon,
        category,
        description: raw.description.clone(),
        address,
        rating: raw.rating,
        image_url,
    })
}
