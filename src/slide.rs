use raylib::prelude::*;
use raylib::core::collision::get_ray_collision_sphere;
use carousel::Coord;
use carousel::constants::*;

const SHADOW: Color = Color::new(0, 0, 0, 70);

/// One image of the carousel, drawn as a disc facing the camera.
pub struct Slide {
    image: Texture2D,
    pub position: Vector3,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self {
            image,
            position: Vector3::zero(),
        }
    }

    pub fn place(&mut self, coord: Coord) {
        self.position = Vector3::new(coord.x, coord.y, coord.z);
    }

    /// Whether `ray` passes through the sphere enclosing the disc, and how far away.
    pub fn pick(&self, ray: Ray) -> Option<f32> {
        let collision = get_ray_collision_sphere(ray, self.position, ITEM_RADIUS);
        collision.hit.then_some(collision.distance)
    }

    pub fn draw(&self, d: &mut impl RaylibDraw3D, camera: Camera3D) {
        // Soft contact shadow on the floor, right under the disc
        d.draw_circle_3D(
            Vector3::new(self.position.x, FLOOR_Y, self.position.z),
            ITEM_RADIUS * 0.8,
            Vector3::new(1.0, 0.0, 0.0),
            90.0,
            SHADOW,
        );
        d.draw_billboard(camera, &self.image, self.position, ITEM_RADIUS * 2.0, Color::WHITE);
    }
}
