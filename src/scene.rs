use raylib::prelude::*;
use carousel::{Coord, ItemId, Renderer};
use carousel::constants::*;
use crate::slide::Slide;

/// Raylib front end of the carousel: a fixed camera and one slide per item.
pub struct Scene {
    pub camera: Camera3D,
    slides: Vec<Slide>,
}

impl Scene {
    pub fn new(textures: Vec<Texture2D>) -> Self {
        // Camera at the origin looking down -z, like the items are laid out.
        // Aspect ratio follows the render target, so resizing needs no work here.
        let camera = Camera3D::perspective(
            Vector3::zero(),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::up(),
            FIELD_OF_VIEW,
        );
        Self {
            camera,
            slides: textures.into_iter().map(Slide::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        // Back to front, so transparent disc corners never hide what lies behind
        let mut order: Vec<&Slide> = self.slides.iter().collect();
        order.sort_by(|a, b| a.position.z.total_cmp(&b.position.z));

        let mut d3 = d.begin_mode3D(self.camera);
        for slide in order {
            slide.draw(&mut d3, self.camera);
        }
    }
}

impl Renderer for Scene {
    type Pointer = Ray;

    fn place(&mut self, item: ItemId, position: Coord) {
        if let Some(slide) = self.slides.get_mut(item.0) {
            slide.place(position);
        }
    }

    fn hit_test(&self, ray: Ray) -> Option<ItemId> {
        self.slides
            .iter()
            .enumerate()
            .filter_map(|(index, slide)| slide.pick(ray).map(|distance| (index, distance)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| ItemId(index))
    }
}
