pub mod annulus;
pub mod circle;
pub mod ellipse;
pub mod full;
pub mod polygon;
pub mod rectangle;

pub use annulus::Annulus;
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use full::FullGrid;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

use crate::{
    error::{RegionError, Result},
    overlay::Overlay,
    traits::Region,
};

/// Closed set of region shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Full(FullGrid),
    Circle(Circle),
    Annulus(Annulus),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Polygon(Polygon),
}

impl Shape {
    /// Short name of the variant
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Full(_) => "full",
            Shape::Circle(_) => "circle",
            Shape::Annulus(_) => "annulus",
            Shape::Rectangle(r) if r.is_square() => "square",
            Shape::Rectangle(_) => "rectangle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Polygon(_) => "polygon",
        }
    }

    fn as_region(&self) -> &dyn Region {
        match self {
            Shape::Full(s) => s,
            Shape::Circle(s) => s,
            Shape::Annulus(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Ellipse(s) => s,
            Shape::Polygon(s) => s,
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Full(FullGrid::default())
    }
}

impl Region for Shape {
    fn contains(&self, x: f64, z: f64) -> bool {
        self.as_region().contains(x, z)
    }

    fn area(&self) -> Option<f64> {
        self.as_region().area()
    }

    fn units(&self) -> &str {
        self.as_region().units()
    }

    fn overlay(&self) -> Option<Overlay> {
        self.as_region().overlay()
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape!(Circle, Annulus, Rectangle, Ellipse, Polygon);

impl From<FullGrid> for Shape {
    fn from(shape: FullGrid) -> Self {
        Shape::Full(shape)
    }
}

pub(crate) fn check_finite(shape: &'static str, name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RegionError::invalid(shape, format!("{name} must be finite, got {value}")))
    }
}

pub(crate) fn check_non_negative(shape: &'static str, name: &str, value: f64) -> Result<f64> {
    let value = check_finite(shape, name, value)?;
    if value < 0.0 {
        return Err(RegionError::invalid(shape, format!("{name} must be non-negative, got {value}")));
    }
    Ok(value)
}

pub(crate) fn check_positive(shape: &'static str, name: &str, value: f64) -> Result<f64> {
    let value = check_finite(shape, name, value)?;
    if value <= 0.0 {
        return Err(RegionError::invalid(shape, format!("{name} must be positive, got {value}")));
    }
    Ok(value)
}
