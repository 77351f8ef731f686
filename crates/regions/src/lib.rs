//! # Regions of Interest
//!
//! Geometric regions over a lateral (x) by axial (z) coordinate space, with
//! grid masks and value extraction for co-registered 2D images.
//!
//! ## Core Features
//!
//! - **Shapes**: circle, annulus, rectangle, square, ellipse and polygon behind one `Region` trait
//! - **Grid Masks**: evaluate a region on axis pairs or pre-expanded coordinate grids
//! - **Value Extraction**: pull the image values inside a region in row-major order
//! - **Declarative Construction**: build regions from tagged JSON or TOML records
//! - **Overlays**: outline descriptions and GeoJSON export for external renderers
//!
//! ## Quick Start
//!
//! ```rust
//! use regions::{linspace, Circle, Region};
//!
//! let circle = Circle::new(1.0, 1.0, 0.5, "mm")?;
//! let x_axis = linspace(0.0, 2.0, 5);
//! let z_axis = linspace(0.0, 2.0, 5);
//!
//! let mask = circle.create_mask(x_axis.view(), z_axis.view());
//! assert_eq!(mask.iter().filter(|&&inside| inside).count(), 5);
//! # Ok::<(), regions::RegionError>(())
//! ```
//!
//! ## From Configuration
//!
//! ```rust
//! use regions::{create_region, RegionConfig, Region};
//!
//! let config = RegionConfig::from_json(
//!     r#"{ "type": "annulus", "xc": 0, "zc": 0, "radius_in": 1, "radius_out": 2, "units": "mm" }"#,
//! )?;
//! let annulus = create_region(&config)?;
//! assert!(annulus.contains(1.5, 0.0));
//! # Ok::<(), regions::RegionError>(())
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod io;
pub mod mask;
pub mod overlay;
pub mod shapes;
pub mod traits;

// Re-exports for convenience
pub use config::{create_region, RegionConfig, RegionType, VertexSource};
pub use error::{RegionError, Result};
pub use grid::{index_axis, linspace, Grid};
pub use mask::{compute_mask, extract_values, Mask, MaskSummary};
pub use overlay::Overlay;
pub use shapes::{Annulus, Circle, Ellipse, FullGrid, Polygon, Rectangle, Shape};
pub use traits::Region;
