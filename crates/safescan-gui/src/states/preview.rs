use image::RgbaImage;

use crate::convert::rgba_to_color_image;

/// Texture of the selected image.
#[derive(Default)]
pub struct PreviewState {
    pub texture: Option<egui::TextureHandle>,
    pub image_size: Option<[usize; 2]>,
}

impl PreviewState {
    pub fn set(&mut self, ctx: &egui::Context, img: &RgbaImage) {
        let image = rgba_to_color_image(img);
        self.image_size = Some(image.size);
        self.texture = Some(ctx.load_texture("preview", image, egui::TextureOptions::LINEAR));
    }

    pub fn clear(&mut self) {
        self.texture = None;
        self.image_size = None;
    }
}
