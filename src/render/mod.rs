//! CPU-side geometry for a host renderer
//!
//! Produces flat triangle lists in clip space ([-1, 1]²). Uploading and
//! drawing them is the host's job.

pub mod shapes;
pub mod vertex;

pub use shapes::{frame_vertices, object_vertices, player_vertices};
pub use vertex::Vertex;
