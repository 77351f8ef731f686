//! Declarative region construction.
//!
//! A region is described by a record tagged with its `"type"`:
//!
//! ```json
//! { "type": "circle", "xc": 1.0, "zc": 1.0, "radius": 0.5, "units": "mm" }
//! ```
//!
//! The same layout is accepted from TOML files.

use std::{path::{Path, PathBuf}, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};
use crate::{
    error::{RegionError, Result},
    io::load_vertices,
    shapes::{Annulus, Circle, Ellipse, Polygon, Rectangle, Shape},
};

/// Accepted values of the `"type"` tag
#[derive(
    Debug, Clone, Copy,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames, IntoStaticStr,
    PartialEq, Eq
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RegionType {
    Circle,
    Annulus,
    Rectangle,
    Square,
    Ellipse,
    Polygon,
}

impl RegionType {
    /// Names of every accepted region type
    pub fn names() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }
}

/// Where a polygon's vertices come from
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum VertexSource {
    /// Inline `[[x, z], ...]` list
    Inline(Vec<[f64; 2]>),
    /// Path to a text file with one `x, z` pair per line
    File(PathBuf),
}

impl VertexSource {
    pub fn resolve(&self) -> Result<Vec<[f64; 2]>> {
        match self {
            VertexSource::Inline(vertices) => Ok(vertices.clone()),
            VertexSource::File(path) => load_vertices(path),
        }
    }
}

/// Parameters for one region, tagged by shape
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegionConfig {
    /// Disk around a center point
    Circle {
        xc: f64,
        zc: f64,
        #[schemars(range(min = 0.0))]
        radius: f64,
        units: String,
    },

    /// Ring between two concentric circles
    Annulus {
        xc: f64,
        zc: f64,
        #[schemars(range(min = 0.0))]
        radius_in: f64,
        #[schemars(range(min = 0.0))]
        radius_out: f64,
        units: String,
    },

    /// Axis-aligned rectangle around a center point
    Rectangle {
        xc: f64,
        zc: f64,
        width: f64,
        height: f64,
        units: String,
    },

    /// Axis-aligned square around a center point
    Square {
        xc: f64,
        zc: f64,
        length: f64,
        units: String,
    },

    /// Axis-aligned ellipse around a center point
    Ellipse {
        xc: f64,
        zc: f64,
        radius_x: f64,
        radius_z: f64,
        units: String,
    },

    /// Closed polygon through ordered vertices
    Polygon {
        vertices: VertexSource,
        units: String,
    },
}

impl RegionConfig {
    /// Get the JSON schema for region configurations
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(RegionConfig)
    }

    pub fn region_type(&self) -> RegionType {
        match self {
            Self::Circle { .. } => RegionType::Circle,
            Self::Annulus { .. } => RegionType::Annulus,
            Self::Rectangle { .. } => RegionType::Rectangle,
            Self::Square { .. } => RegionType::Square,
            Self::Ellipse { .. } => RegionType::Ellipse,
            Self::Polygon { .. } => RegionType::Polygon,
        }
    }

    /// Decode an untyped record, checking the `"type"` tag first
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let tag = match value.get("type") {
            Some(serde_json::Value::String(tag)) => tag.clone(),
            Some(other) => return Err(RegionError::UnknownType(other.to_string())),
            None => return Err(RegionError::UnknownType("<missing>".to_string())),
        };
        if RegionType::from_str(&tag).is_err() {
            return Err(RegionError::UnknownType(tag));
        }

        serde_json::from_value(value).map_err(|e| RegionError::InvalidConfig(e.to_string()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let value: serde_json::Value = toml::from_str(content)?;
        Self::from_value(value)
    }

    /// Load a configuration file, picking the format from its extension.
    ///
    /// Relative vertex file paths are taken relative to the configuration
    /// file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content)?,
            Some("toml") => Self::from_toml(&content)?,
            _ => return Err(RegionError::UnsupportedFormat(path.display().to_string())),
        };

        Ok(match path.parent() {
            Some(dir) => config.relative_to(dir),
            None => config,
        })
    }

    fn relative_to(self, dir: &Path) -> Self {
        match self {
            Self::Polygon { vertices: VertexSource::File(file), units } if file.is_relative() => {
                Self::Polygon {
                    vertices: VertexSource::File(dir.join(file)),
                    units,
                }
            }
            other => other,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Construct the region described by this configuration
    pub fn build(&self) -> Result<Shape> {
        let shape: Shape = match self {
            Self::Circle { xc, zc, radius, units } => {
                Circle::new(*xc, *zc, *radius, units.as_str())?.into()
            }
            Self::Annulus { xc, zc, radius_in, radius_out, units } => {
                Annulus::new(*xc, *zc, *radius_in, *radius_out, units.as_str())?.into()
            }
            Self::Rectangle { xc, zc, width, height, units } => {
                Rectangle::new(*xc, *zc, *width, *height, units.as_str())?.into()
            }
            Self::Square { xc, zc, length, units } => {
                Rectangle::square(*xc, *zc, *length, units.as_str())?.into()
            }
            Self::Ellipse { xc, zc, radius_x, radius_z, units } => {
                Ellipse::new(*xc, *zc, *radius_x, *radius_z, units.as_str())?.into()
            }
            Self::Polygon { vertices, units } => {
                Polygon::new(vertices.resolve()?, units.as_str())?.into()
            }
        };

        tracing::debug!(region_type = %self.region_type(), "created region");
        Ok(shape)
    }
}

/// Create a region from its configuration
pub fn create_region(config: &RegionConfig) -> Result<Shape> {
    config.build()
}
