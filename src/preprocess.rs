use crate::Result;
use image::imageops::FilterType;
use tract_nnef::prelude::*;

/// Spatial resolution the model was trained on. Model-intrinsic, so a
/// compiled-in constant rather than configuration.
pub const INPUT_WIDTH: usize = 200;
pub const INPUT_HEIGHT: usize = 200;
pub const CHANNELS: usize = 3;

/// Decode raw upload bytes into the model's input tensor: resize to
/// 200x200 RGB, scale pixels to [0,1] and add a leading batch dimension
/// (NHWC, `[1, 200, 200, 3]`).
pub fn image_to_tensor(bytes: &[u8]) -> Result<Tensor> {
    let img = image::load_from_memory(bytes)?;
    let resized = img
        .resize_exact(INPUT_WIDTH as u32, INPUT_HEIGHT as u32, FilterType::Triangle)
        .to_rgb8();

    let tensor: Tensor = tract_ndarray::Array4::from_shape_fn(
        (1, INPUT_HEIGHT, INPUT_WIDTH, CHANNELS),
        |(_, y, x, c)| resized.get_pixel(x as u32, y as u32).0[c] as f32 / 255.0,
    )
    .into();

    Ok(tensor)
}
