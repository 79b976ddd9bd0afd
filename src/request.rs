//! Design request assembly.
//!
//! A [`DesignRequest`] is the JSON body posted to the generation
//! service. It is assembled once per submission via
//! [`DesignRequestBuilder`], never mutated afterwards, and discarded
//! when the call settles. `num_rooms` is always derived, never
//! user-supplied.

use serde::{Deserialize, Serialize};

/// Fixed room allowance added on top of the adjustable counts: every
/// plan gets a kitchen and a living room.
pub const FIXED_ROOM_ALLOWANCE: u32 = 2;

/// Architectural styles offered by the original UI. The `style` field
/// itself is an open string; this list only feeds CLI value hints.
pub const STYLES: [&str; 4] = ["Modern", "Traditional", "Contemporary", "Mediterranean"];

/// Requirement tags offered by the original UI.
pub const REQUIREMENT_TAGS: [&str; 4] = [
    "Open Floor Plan",
    "Home Office",
    "Large Kitchen",
    "Master Suite",
];

/// Structured parameters submitted to the generation service.
///
/// Invariant: `num_rooms == num_bedrooms + num_bathrooms +
/// additional_rooms + 2`. The builder enforces this; deserialized
/// requests are trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignRequest {
    pub num_bedrooms: u32,
    pub num_bathrooms: u32,
    pub additional_rooms: u32,
    /// Total area in square feet
    pub house_size: u32,
    pub style: String,
    /// Requirement tags, deduplicated, insertion order preserved
    pub requirements: Vec<String>,
    /// Derived total room count (see type-level invariant)
    pub num_rooms: u32,
}

impl DesignRequest {
    pub fn builder() -> DesignRequestBuilder {
        DesignRequestBuilder::default()
    }
}

/// Builder for [`DesignRequest`].
///
/// Pure data assembly: no bounds checking beyond the integer types
/// (the UI range widgets own input validation). Defaults mirror the
/// original sidebar defaults.
#[derive(Debug, Clone)]
pub struct DesignRequestBuilder {
    num_bedrooms: u32,
    num_bathrooms: u32,
    additional_rooms: u32,
    house_size: u32,
    style: String,
    requirements: Vec<String>,
}

impl Default for DesignRequestBuilder {
    fn default() -> Self {
        Self {
            num_bedrooms: 2,
            num_bathrooms: 2,
            additional_rooms: 1,
            house_size: 2000,
            style: "Modern".to_string(),
            requirements: vec!["Open Floor Plan".to_string()],
        }
    }
}

impl DesignRequestBuilder {
    pub fn bedrooms(mut self, n: u32) -> Self {
        self.num_bedrooms = n;
        self
    }

    pub fn bathrooms(mut self, n: u32) -> Self {
        self.num_bathrooms = n;
        self
    }

    pub fn additional_rooms(mut self, n: u32) -> Self {
        self.additional_rooms = n;
        self
    }

    pub fn house_size(mut self, sq_ft: u32) -> Self {
        self.house_size = sq_ft;
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Replace the requirement tags wholesale.
    pub fn requirements<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requirements = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single requirement tag.
    pub fn requirement(mut self, tag: impl Into<String>) -> Self {
        self.requirements.push(tag.into());
        self
    }

    /// Assemble the request. Duplicated requirement tags collapse to
    /// their first occurrence; `num_rooms` is derived here and nowhere
    /// else.
    pub fn build(self) -> DesignRequest {
        let mut requirements: Vec<String> = Vec::with_capacity(self.requirements.len());
        for tag in self.requirements {
            if !requirements.contains(&tag) {
                requirements.push(tag);
            }
        }

        let num_rooms = self.num_bedrooms
            + self.num_bathrooms
            + self.additional_rooms
            + FIXED_ROOM_ALLOWANCE;

        DesignRequest {
            num_bedrooms: self.num_bedrooms,
            num_bathrooms: self.num_bathrooms,
            additional_rooms: self.additional_rooms,
            house_size: self.house_size,
            style: self.style,
            requirements,
            num_rooms,
        }
    }
}

/// The three metric tiles shown next to a generated plan.
///
/// A pure function of the request only; room descriptors never feed
/// into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignDetails {
    /// Total area in square feet
    pub total_area: u32,
    pub bedrooms: u32,
    pub total_rooms: u32,
}

impl DesignDetails {
    pub fn from_request(request: &DesignRequest) -> Self {
        Self {
            total_area: request.house_size,
            bedrooms: request.num_bedrooms,
            total_rooms: request.num_rooms,
        }
    }
}
