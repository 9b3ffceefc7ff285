// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Location Hierarchy
//!
//! A closed set of place kinds an entity can be found at: an internet
//! address or a physical building. Each kind carries its own strongly typed
//! key, a title, and a free-form description, and defines what it means for
//! two locations to be "the same place" — which is looser than structural
//! equality (two records with different keys and titles can still point at
//! one host or one building).

use crate::error::DomainResult;
use crate::key::{Key, KeyTag};
use crate::title::Title;
use serde::{Deserialize, Serialize};
use url::Url;

/// The kind of place a location describes.
///
/// `Outdoor` is reserved: the tag exists, but no outdoor location kind is
/// constructible yet.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PlacementType {
    Building,
    Internet,
    Outdoor,
}

/// A tag type for internet-location keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct InternetLocationTag;

impl KeyTag for InternetLocationTag {
    const NAME: &'static str = "InternetLocationKey";
}

/// A typed key for internet locations.
pub type InternetLocationKey = Key<InternetLocationTag>;

/// A tag type for building-location keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BuildingLocationTag;

impl KeyTag for BuildingLocationTag {
    const NAME: &'static str = "BuildingLocationKey";
}

/// A typed key for building locations.
pub type BuildingLocationKey = Key<BuildingLocationTag>;

/// A place on the internet, addressed by URL.
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::location::InternetLocation;
/// # use almanac_domain::title::Title;
///
/// let site = InternetLocation::new(
///     Title::new("Docs").unwrap(),
///     "https://docs.example.org/guide/intro",
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(site.short_address(), "docs.example.org");
/// assert_eq!(site.address(), "/guide/intro");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct InternetLocation {
    key: InternetLocationKey,
    title: Title,
    description: String,
    uri: Url,
}

impl InternetLocation {
    /// Creates an internet location with a fresh key.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::DomainError::InvalidUrl`] when `url` does
    /// not parse.
    pub fn new(title: Title, url: &str, description: Option<&str>) -> DomainResult<Self> {
        Ok(Self {
            key: Key::new(),
            title,
            description: description.unwrap_or_default().to_string(),
            uri: Url::parse(url)?,
        })
    }

    #[inline]
    pub const fn key(&self) -> InternetLocationKey {
        self.key
    }

    #[inline]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub const fn uri(&self) -> &Url {
        &self.uri
    }

    #[inline]
    pub const fn placement_type(&self) -> PlacementType {
        PlacementType::Internet
    }

    /// The host part of the URL — the identity of the place.
    pub fn short_address(&self) -> String {
        self.uri.host_str().unwrap_or_default().to_string()
    }

    /// The path part of the URL.
    pub fn address(&self) -> String {
        self.uri.path().to_string()
    }

    /// Two internet locations are the same place when they point at the
    /// same host, whatever their keys, titles, or paths.
    pub fn is_same_location(&self, other: &Self) -> bool {
        self.short_address() == other.short_address()
    }
}

/// A physical building address.
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::location::BuildingLocation;
/// # use almanac_domain::title::Title;
///
/// let office = BuildingLocation::new(
///     Title::new("Head office").unwrap(),
///     "Springfield",
///     "Main Street",
///     "12",
///     Some("3"),
///     62704,
///     None,
/// );
///
/// assert_eq!(office.short_address(), "Springfield, Main Street, bldg. 12");
/// assert_eq!(office.address(), "62704, Springfield, Main Street, bldg. 12, ent. 3");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BuildingLocation {
    key: BuildingLocationKey,
    title: Title,
    description: String,
    zip: u32,
    city: String,
    street: String,
    building_number: String,
    entrance_number: Option<String>,
}

impl BuildingLocation {
    /// Creates a building location with a fresh key. A zip of 0 stands for
    /// "not known".
    pub fn new(
        title: Title,
        city: &str,
        street: &str,
        building_number: &str,
        entrance_number: Option<&str>,
        zip: u32,
        description: Option<&str>,
    ) -> Self {
        Self {
            key: Key::new(),
            title,
            description: description.unwrap_or_default().to_string(),
            zip,
            city: city.to_string(),
            street: street.to_string(),
            building_number: building_number.to_string(),
            entrance_number: entrance_number.map(str::to_string),
        }
    }

    #[inline]
    pub const fn key(&self) -> BuildingLocationKey {
        self.key
    }

    #[inline]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub const fn zip(&self) -> u32 {
        self.zip
    }

    #[inline]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[inline]
    pub fn street(&self) -> &str {
        &self.street
    }

    #[inline]
    pub fn building_number(&self) -> &str {
        &self.building_number
    }

    #[inline]
    pub fn entrance_number(&self) -> Option<&str> {
        self.entrance_number.as_deref()
    }

    #[inline]
    pub const fn placement_type(&self) -> PlacementType {
        PlacementType::Building
    }

    /// City, street, and building number.
    pub fn short_address(&self) -> String {
        format!("{}, {}, bldg. {}", self.city, self.street, self.building_number)
    }

    /// The full postal form: zip, short address, and the entrance when one
    /// is known.
    pub fn address(&self) -> String {
        match self.entrance_number.as_deref() {
            Some(entrance) if !entrance.is_empty() => {
                format!("{}, {}, ent. {}", self.zip, self.short_address(), entrance)
            }
            _ => format!("{}, {}", self.zip, self.short_address()),
        }
    }

    /// Two building locations are the same place when city, street, and
    /// building number all match; zip, entrance, and description do not
    /// participate.
    pub fn is_same_location(&self, other: &Self) -> bool {
        self.city == other.city
            && self.street == other.street
            && self.building_number == other.building_number
    }
}

/// Any location an entity can be found at.
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::location::{InternetLocation, Location, PlacementType};
/// # use almanac_domain::title::Title;
///
/// let site = InternetLocation::new(
///     Title::new("Site").unwrap(),
///     "https://example.org/",
///     None,
/// )
/// .unwrap();
///
/// let location = Location::from(site);
/// assert_eq!(location.placement_type(), PlacementType::Internet);
/// assert_eq!(location.short_address(), "example.org");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Location {
    Internet(InternetLocation),
    Building(BuildingLocation),
}

impl Location {
    pub fn placement_type(&self) -> PlacementType {
        match self {
            Location::Internet(inner) => inner.placement_type(),
            Location::Building(inner) => inner.placement_type(),
        }
    }

    pub fn title(&self) -> &Title {
        match self {
            Location::Internet(inner) => inner.title(),
            Location::Building(inner) => inner.title(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Location::Internet(inner) => inner.description(),
            Location::Building(inner) => inner.description(),
        }
    }

    pub fn short_address(&self) -> String {
        match self {
            Location::Internet(inner) => inner.short_address(),
            Location::Building(inner) => inner.short_address(),
        }
    }

    pub fn address(&self) -> String {
        match self {
            Location::Internet(inner) => inner.address(),
            Location::Building(inner) => inner.address(),
        }
    }

    /// Same-place comparison. Locations of different kinds are never the
    /// same place.
    pub fn is_same_location(&self, other: &Location) -> bool {
        match (self, other) {
            (Location::Internet(a), Location::Internet(b)) => a.is_same_location(b),
            (Location::Building(a), Location::Building(b)) => a.is_same_location(b),
            _ => false,
        }
    }
}

impl From<InternetLocation> for Location {
    fn from(location: InternetLocation) -> Self {
        Location::Internet(location)
    }
}

impl From<BuildingLocation> for Location {
    fn from(location: BuildingLocation) -> Self {
        Location::Building(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    fn internet(url: &str) -> InternetLocation {
        InternetLocation::new(Title::new("Site").unwrap(), url, None).unwrap()
    }

    fn building(city: &str, street: &str, number: &str) -> BuildingLocation {
        BuildingLocation::new(
            Title::new("Place").unwrap(),
            city,
            street,
            number,
            None,
            0,
            None,
        )
    }

    #[test]
    fn test_internet_location_addresses() {
        let site = internet("https://docs.example.org/guide/intro");
        assert_eq!(site.short_address(), "docs.example.org");
        assert_eq!(site.address(), "/guide/intro");
        assert_eq!(site.placement_type(), PlacementType::Internet);
    }

    #[test]
    fn test_internet_location_rejects_bad_url() {
        let err = InternetLocation::new(Title::new("Site").unwrap(), "not a url", None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidUrl(_)));
    }

    #[test]
    fn test_internet_same_location_is_host_identity() {
        let a = internet("https://example.org/a");
        let b = internet("https://example.org/b");
        let c = internet("https://other.org/a");

        assert!(a.is_same_location(&b));
        assert!(!a.is_same_location(&c));
        // Structural equality still tells them apart (fresh keys, paths).
        assert_ne!(a, b);
    }

    #[test]
    fn test_building_location_addresses() {
        let office = BuildingLocation::new(
            Title::new("Head office").unwrap(),
            "Springfield",
            "Main Street",
            "12",
            Some("3"),
            62704,
            Some("ring twice"),
        );

        assert_eq!(office.short_address(), "Springfield, Main Street, bldg. 12");
        assert_eq!(
            office.address(),
            "62704, Springfield, Main Street, bldg. 12, ent. 3"
        );
        assert_eq!(office.description(), "ring twice");
    }

    #[test]
    fn test_building_address_without_entrance() {
        let office = building("Springfield", "Main Street", "12");
        assert_eq!(office.address(), "0, Springfield, Main Street, bldg. 12");
    }

    #[test]
    fn test_building_same_location_ignores_entrance_and_zip() {
        let a = BuildingLocation::new(
            Title::new("A").unwrap(),
            "Springfield",
            "Main Street",
            "12",
            Some("1"),
            62704,
            None,
        );
        let b = building("Springfield", "Main Street", "12");
        let c = building("Springfield", "Main Street", "14");

        assert!(a.is_same_location(&b));
        assert!(!a.is_same_location(&c));
    }

    #[test]
    fn test_cross_kind_never_same_location() {
        let site = Location::from(internet("https://example.org/"));
        let office = Location::from(building("Springfield", "Main Street", "12"));

        assert!(!site.is_same_location(&office));
        assert!(!office.is_same_location(&site));
        assert!(site.is_same_location(&site.clone()));
    }

    #[test]
    fn test_enum_accessors_delegate() {
        let office = Location::from(building("Springfield", "Main Street", "12"));
        assert_eq!(office.placement_type(), PlacementType::Building);
        assert_eq!(office.title(), &Title::new("Place").unwrap());
        assert_eq!(office.short_address(), "Springfield, Main Street, bldg. 12");
    }

    #[test]
    fn test_serde_roundtrip_keeps_key() {
        let site = internet("https://example.org/");
        let json = serde_json::to_string(&site).unwrap();
        let back: InternetLocation = serde_json::from_str(&json).unwrap();
        // The key travels with the record, so the restored value is equal.
        assert_eq!(back, site);
    }
}
