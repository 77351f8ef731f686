pub mod image;
pub mod vertices;

pub use self::image::{load_image, save_mask};
pub use vertices::{load_vertices, parse_vertices};
