//! GPU rendering subsystem.
//!
//! [`SceneRenderer`] consumes a `scene::DrawList` and records it into a single
//! render pass. Primitives of different kinds are interleaved in paint order;
//! consecutive commands of the same kind share one instanced draw call.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod batch;
mod ctx;
mod scene;
mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene::SceneRenderer;
