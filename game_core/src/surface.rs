//! Retained-mode drawing surface the game loop reads and writes shape boxes through

use hecs::{Entity, World};
use thiserror::Error;

use crate::{Aabb, Color, Shape};

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("shape handle is not on the surface")]
    UnknownShape,
}

/// Host drawing surface. Shapes are retained; the game only moves their boxes.
pub trait RenderSurface {
    type Handle: Copy;

    fn create_shape(&mut self, shape: Shape, bounds: Aabb, color: Color) -> Self::Handle;

    fn coords(&self, handle: Self::Handle) -> Result<Aabb, SurfaceError>;

    fn set_coords(&mut self, handle: Self::Handle, bounds: Aabb) -> Result<(), SurfaceError>;
}

/// A shape as hosts see it when drawing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawable {
    pub shape: Shape,
    pub bounds: Aabb,
    pub color: Color,
}

/// In-memory scene backed by a hecs world, one entity per shape
#[derive(Default)]
pub struct Scene {
    world: World,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All shapes in creation order (later shapes draw on top)
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut shapes: Vec<(Entity, Drawable)> = self
            .world
            .query::<(&Shape, &Aabb, &Color)>()
            .iter()
            .map(|(entity, (shape, bounds, color))| {
                (
                    entity,
                    Drawable {
                        shape: *shape,
                        bounds: *bounds,
                        color: *color,
                    },
                )
            })
            .collect();
        // Entities are never despawned, so ids follow creation order
        shapes.sort_by_key(|(e, _)| e.id());
        shapes.into_iter().map(|(_, d)| d).collect()
    }
}

impl RenderSurface for Scene {
    type Handle = Entity;

    fn create_shape(&mut self, shape: Shape, bounds: Aabb, color: Color) -> Entity {
        self.world.spawn((shape, bounds, color))
    }

    fn coords(&self, handle: Entity) -> Result<Aabb, SurfaceError> {
        let bounds = self
            .world
            .get::<&Aabb>(handle)
            .map_err(|_| SurfaceError::UnknownShape)?;
        Ok(*bounds)
    }

    fn set_coords(&mut self, handle: Entity, bounds: Aabb) -> Result<(), SurfaceError> {
        let mut current = self
            .world
            .get::<&mut Aabb>(handle)
            .map_err(|_| SurfaceError::UnknownShape)?;
        *current = bounds;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn boxed(x: i32, y: i32, w: i32, h: i32) -> Aabb {
        Aabb::from_origin_size(IVec2::new(x, y), IVec2::new(w, h))
    }

    #[test]
    fn test_create_and_read_back() {
        let mut scene = Scene::new();
        let handle = scene.create_shape(Shape::Rectangle, boxed(50, 250, 20, 100), Color::Red);
        assert_eq!(scene.coords(handle).unwrap(), boxed(50, 250, 20, 100));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_set_coords_moves_shape() {
        let mut scene = Scene::new();
        let handle = scene.create_shape(Shape::Ellipse, boxed(390, 290, 20, 20), Color::White);
        scene.set_coords(handle, boxed(395, 295, 20, 20)).unwrap();
        assert_eq!(scene.coords(handle).unwrap(), boxed(395, 295, 20, 20));
    }

    #[test]
    fn test_unknown_handle_is_an_error() {
        let mut other = Scene::new();
        other.create_shape(Shape::Rectangle, boxed(0, 0, 1, 1), Color::Red);
        let stranger = other.create_shape(Shape::Rectangle, boxed(0, 0, 1, 1), Color::Red);

        let mut scene = Scene::new();
        assert!(matches!(
            scene.coords(stranger),
            Err(SurfaceError::UnknownShape)
        ));
        assert!(matches!(
            scene.set_coords(stranger, boxed(0, 0, 1, 1)),
            Err(SurfaceError::UnknownShape)
        ));
    }

    #[test]
    fn test_drawables_in_creation_order() {
        let mut scene = Scene::new();
        scene.create_shape(Shape::Rectangle, boxed(50, 250, 20, 100), Color::Red);
        scene.create_shape(Shape::Rectangle, boxed(730, 250, 20, 100), Color::Blue);
        scene.create_shape(Shape::Ellipse, boxed(390, 290, 20, 20), Color::White);

        let colors: Vec<Color> = scene.drawables().iter().map(|d| d.color).collect();
        assert_eq!(colors, vec![Color::Red, Color::Blue, Color::White]);
    }
}
