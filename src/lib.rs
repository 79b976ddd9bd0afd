//! Homedraft floor-plan client
//!
//! A client-side pipeline for an external floor-plan generation
//! service: it assembles design requests, posts them to the service,
//! renders the returned room rectangles as a deterministic 2D diagram,
//! and exports the same layout as JSON or CSV.
//!
//! The hard part of floor-plan generation (room packing, adjacency,
//! size allocation) lives behind the service; this crate is the
//! presentation contract around it.
//!
//! # Example
//!
//! ```no_run
//! use homedraft::{ClientConfig, DesignRequest, GenerateClient};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig {
//!     endpoint: "http://localhost:8000".to_string(),
//!     ..Default::default()
//! };
//!
//! let request = DesignRequest::builder()
//!     .bedrooms(3)
//!     .bathrooms(2)
//!     .house_size(2000)
//!     .style("Modern")
//!     .build();
//!
//! let client = GenerateClient::new(config)?;
//! let plan = client.generate(&request)?;
//! let diagram = homedraft::rendering::render_plan(&plan.rooms, homedraft::Canvas::default());
//! println!("{} paint commands", diagram.commands.len());
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod request;
pub use request::{DesignDetails, DesignRequest, DesignRequestBuilder};

pub mod client;
pub use client::GenerateClient;

pub mod rendering;

pub mod export;

// Async-friendly session API (worker-thread backed abstraction)
pub mod async_api;
pub use async_api::Session;

/// Configuration for the generation client
///
/// The defaults are conservative: a local endpoint, a 30 second
/// timeout, and a fixed-size square drawing surface.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the generation service; `/generate` is resolved
    /// against it
    pub endpoint: String,
    /// User agent string to send with requests
    pub user_agent: String,
    /// Timeout for generation calls in milliseconds
    pub timeout_ms: u64,
    /// Custom HTTP headers
    pub headers: HashMap<String, String>,
    /// Drawing surface used by the render pipeline
    pub canvas: Canvas,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            user_agent: "Homedraft/0.1".to_string(),
            timeout_ms: 30000,
            headers: HashMap::new(),
            canvas: Canvas::default(),
        }
    }
}

/// Fixed-size drawing surface with a uniform margin on all four sides.
///
/// One diagram unit is equal in both axes; the render pipeline never
/// scales x and y independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Uniform margin applied to every side
    pub margin: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 24.0,
        }
    }
}

/// One rectangle (position, size, type, label) in a generated layout.
///
/// `size` is a pre-computed area supplied by the service; it is
/// trusted as-is and never recomputed from `width * height`. Fields
/// the service adds beyond the known set are preserved in `extra` so
/// exports can carry them through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDescriptor {
    pub room_type: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Pre-computed area in square feet
    pub size: f64,
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RoomDescriptor {
    pub fn new(room_type: impl Into<String>, x: f64, y: f64, width: f64, height: f64, size: f64) -> Self {
        Self {
            room_type: room_type.into(),
            x,
            y,
            width,
            height,
            size,
            extra: serde_json::Map::new(),
        }
    }
}

/// An immutable generated design: the request that produced it and the
/// room list the service returned.
///
/// Produced once per successful generation and passed by reference to
/// both the render step and the export functions, so a stale layout
/// can never outlive a failed regeneration.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    pub request: DesignRequest,
    pub rooms: Vec<RoomDescriptor>,
}

/// Wire response from `POST /generate`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(default)]
    pub layout: Option<Vec<RoomDescriptor>>,
    #[serde(default)]
    pub error: Option<String>,
}
