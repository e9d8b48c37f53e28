use std::sync::{Arc, Mutex};

use image::imageops::FilterType;
use tch::nn::ModuleT;
use tch::{CModule, Device, Kind, Tensor};

use shared::Label;

use super::config::ClassifierConfig;

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("model error: {0}")]
    Model(#[from] tch::TchError),
    #[error("model produced no usable prediction")]
    EmptyPrediction,
}

/// TorchScript classifier, loaded once at startup and shared for the
/// lifetime of the process.
#[derive(Clone)]
pub struct Model {
    model: Arc<Mutex<CModule>>,
    config: ClassifierConfig,
}

impl Model {
    pub fn load(model_path: &str, config: ClassifierConfig) -> Result<Self, ClassifierError> {
        let device = Device::cuda_if_available();
        let model = CModule::load_on_device(model_path, device)?;
        Ok(Self {
            model: Arc::new(Mutex::new(model)),
            config,
        })
    }

    /// Decodes and classifies raw image bytes into a label and a confidence
    /// percentage. Same artifact, same bytes, same answer: nothing in the
    /// pipeline samples.
    pub fn classify(&self, image: &[u8]) -> Result<(Label, f32), ClassifierError> {
        let tensor = preprocess(image, self.config.image.size, self.config.image.pixel_scale)?;
        let output = self.model.lock().unwrap().forward_t(&tensor, false);
        let output = output.softmax(-1, Kind::Float);
        let output_flat = output.to_kind(Kind::Float).view([-1]);
        let num_elements = output_flat.size()[0] as usize;
        let mut probabilities = vec![0.0f32; num_elements];
        output_flat.copy_data(&mut probabilities, num_elements);

        let (index, probability) = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .ok_or(ClassifierError::EmptyPrediction)?;
        let label = Label::from_index(index).ok_or(ClassifierError::EmptyPrediction)?;
        Ok((label, probability * 100.0))
    }
}

/// Decode, resize and normalize image bytes into an NCHW float tensor.
/// Undecodable bytes fail here, before the model is ever consulted.
pub fn preprocess(
    image_bytes: &[u8],
    size: u32,
    pixel_scale: f32,
) -> Result<Tensor, ClassifierError> {
    let decoded = image::load_from_memory(image_bytes)?;
    let rgb = decoded.to_rgb8();
    let resized = image::imageops::resize(&rgb, size, size, FilterType::Triangle);

    let plane = (size * size) as usize;
    let mut data = vec![0.0f32; 3 * plane];
    for (x, y, pixel) in resized.enumerate_pixels() {
        let offset = (y * size + x) as usize;
        data[offset] = pixel[0] as f32 / pixel_scale;
        data[plane + offset] = pixel[1] as f32 / pixel_scale;
        data[2 * plane + offset] = pixel[2] as f32 / pixel_scale;
    }

    Ok(Tensor::from_slice(&data).view([1, 3, size as i64, size as i64]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undecodable_bytes_fail_before_inference() {
        let garbage = [0x00, 0x01, 0x02, 0x03, 0xff];
        assert!(matches!(
            preprocess(&garbage, 224, 255.0),
            Err(ClassifierError::Decode(_))
        ));
    }

    #[test]
    fn empty_buffer_is_a_decode_error() {
        assert!(matches!(
            preprocess(&[], 224, 255.0),
            Err(ClassifierError::Decode(_))
        ));
    }

    #[test]
    fn preprocess_produces_a_unit_batch() {
        let mut png = Vec::new();
        let img = image::RgbImage::from_pixel(8, 8, image::Rgb([120, 200, 40]));
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        let tensor = preprocess(&png, 224, 255.0).unwrap();
        assert_eq!(tensor.size(), vec![1, 3, 224, 224]);
    }
}
