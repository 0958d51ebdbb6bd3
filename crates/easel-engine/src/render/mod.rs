//! Rendering collaborator seam.
//!
//! The engine never touches pixels. A canvas backend implements [`Renderer`]
//! and receives the primitives recorded in a [`DrawList`](crate::scene::DrawList).

use crate::scene::DrawCmd;

/// Draws recorded primitives onto some surface.
pub trait Renderer {
    fn draw(&mut self, cmd: &DrawCmd);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    #[inline]
    fn draw(&mut self, cmd: &DrawCmd) {
        (**self).draw(cmd);
    }
}
