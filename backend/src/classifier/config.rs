use serde::{Deserialize, Serialize};

/// Preprocessing parameters for the classification model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub image: ImageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    pub size: u32,
    pub channels: u32,
    pub pixel_scale: f32,
}

impl ClassifierConfig {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let manifest_dir =
            std::env::var("CARGO_MANIFEST_DIR").map_err(|_| "Failed to get manifest directory")?;
        let config_path = format!("{}/../config/classifier.yaml", manifest_dir);
        let config_str = std::fs::read_to_string(config_path)?;
        let config: ClassifierConfig = serde_yaml::from_str(&config_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_shipped_config() {
        let config: ClassifierConfig = serde_yaml::from_str(
            "image:\n  size: 224\n  channels: 3\n  pixel_scale: 255.0\n",
        )
        .unwrap();
        assert_eq!(config.image.size, 224);
        assert_eq!(config.image.channels, 3);
        assert_eq!(config.image.pixel_scale, 255.0);
    }
}
