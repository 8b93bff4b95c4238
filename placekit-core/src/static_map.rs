//! Static map image URLs for a place.

use url::form_urlencoded;

use crate::{Location, Place};

/// Google Static Maps endpoint.
pub const STATIC_MAP_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// Zoom level used for place thumbnails.
pub const DEFAULT_ZOOM: u8 = 15;

/// Pixel dimensions of a static map image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticMapOptions {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl StaticMapOptions {
    /// Build options for a `width`×`height` image.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Build a static map URL centred on `place` with a marker at its position.
///
/// `api_key` is the browser key; it is omitted from the URL when `None`.
/// No request is made.
///
/// # Examples
///
/// ```
/// use placekit_core::{Location, Place, StaticMapOptions, static_map_url};
///
/// let place = Place::new("id", "Museum", Location::new(51.5, -0.1));
/// let url = static_map_url(&place, StaticMapOptions::new(320, 200), None);
/// assert!(url.contains("size=320x200"));
/// ```
#[must_use]
pub fn static_map_url(place: &Place, options: StaticMapOptions, api_key: Option<&str>) -> String {
    location_map_url(place.coordinates, options, api_key)
}

/// Build a static map URL centred on a bare coordinate.
#[must_use]
pub fn location_map_url(
    location: Location,
    options: StaticMapOptions,
    api_key: Option<&str>,
) -> String {
    let centre = format!("{},{}", location.latitude, location.longitude);
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("center", &centre)
        .append_pair("zoom", &DEFAULT_ZOOM.to_string())
        .append_pair("size", &format!("{}x{}", options.width, options.height))
        .append_pair("markers", &centre);
    if let Some(key) = api_key {
        query.append_pair("key", key);
    }
    format!("{STATIC_MAP_ENDPOINT}?{}", query.finish())
}
