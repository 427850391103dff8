//! Distance-keyed presentation zones (fog, lighting, background).
//!
//! Zones know nothing about curve geometry; they partition arc length only.

use std::borrow::Cow;
use std::fmt;

use crate::error::{CourseError, Result};

/// 24-bit `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

#[allow(clippy::cast_possible_truncation)]
impl Color {
    /// Creates a color from a packed `0xRRGGBB` value. Bits above 24 are dropped.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    /// Red channel.
    #[must_use]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    /// Green channel.
    #[must_use]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Channels normalized to `[0, 1]`.
    #[must_use]
    pub fn to_rgb(self) -> [f64; 3] {
        [self.r(), self.g(), self.b()].map(|c| f64::from(c) / 255.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
    }
}

/// A named distance interval `[start_distance, end_distance)` with the
/// environment settings the scene should apply inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    /// Display name.
    pub name: Cow<'static, str>,
    /// Inclusive start, in distance units along the course.
    pub start_distance: f64,
    /// Exclusive end. The last zone of a table also covers distances past it.
    pub end_distance: f64,
    /// Fog color.
    pub fog_color: Color,
    /// Fog density.
    pub fog_density: f64,
    /// Ambient light color.
    pub ambient_color: Color,
    /// Directional light intensity.
    pub directional_intensity: f64,
    /// Clear color behind the scene.
    pub background_color: Color,
    /// Human-readable description.
    pub description: Cow<'static, str>,
}

impl Zone {
    /// Returns `true` if `distance` lies in `[start_distance, end_distance)`.
    #[must_use]
    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.start_distance && distance < self.end_distance
    }
}

/// Ordered, non-empty zone list for one course.
///
/// Lookup scans in table order and the first containing zone wins. Distances
/// no zone contains (past the authored end, inside a gap) resolve to the last
/// zone. Overlaps are not validated.
#[derive(Debug, Clone)]
pub struct ZoneTable {
    zones: Vec<Zone>,
}

impl ZoneTable {
    /// Creates a zone table for the named course.
    ///
    /// # Errors
    ///
    /// Returns [`CourseError::EmptyZoneTable`] if `zones` is empty.
    pub fn new(course: &str, zones: Vec<Zone>) -> Result<Self> {
        if zones.is_empty() {
            return Err(CourseError::EmptyZoneTable(course.to_owned()).into());
        }
        Ok(Self { zones })
    }

    /// Index of the zone governing `distance`.
    #[must_use]
    pub fn index_at(&self, distance: f64) -> usize {
        self.zones
            .iter()
            .position(|zone| zone.contains(distance))
            .unwrap_or(self.zones.len() - 1)
    }

    /// The zone governing `distance`.
    #[must_use]
    pub fn zone_at(&self, distance: f64) -> &Zone {
        &self.zones[self.index_at(distance)]
    }

    /// The catch-all final zone.
    #[must_use]
    pub fn last(&self) -> &Zone {
        &self.zones[self.zones.len() - 1]
    }

    /// Furthest authored end distance.
    #[must_use]
    pub fn authored_end(&self) -> f64 {
        self.zones
            .iter()
            .map(|zone| zone.end_distance)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Number of zones. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns `false`; a table is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterates zones in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Zone> {
        self.zones.iter()
    }
}

impl<'a> IntoIterator for &'a ZoneTable {
    type Item = &'a Zone;
    type IntoIter = std::slice::Iter<'a, Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
