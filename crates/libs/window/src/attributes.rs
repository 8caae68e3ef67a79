#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Client API requested from the toolkit when the window is created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GraphicsApi {
    OpenGl,
    #[default]
    OpenGlEs2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowAttributes {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub graphics_api: GraphicsApi,
}

impl Default for WindowAttributes {
    fn default() -> Self {
        Self {
            title: "Window".to_owned(),
            width: 720,
            height: 480,
            graphics_api: GraphicsApi::default(),
        }
    }
}

impl WindowAttributes {
    pub fn new(title: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_graphics_api(mut self, graphics_api: GraphicsApi) -> Self {
        self.graphics_api = graphics_api;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gles2() {
        let attributes = WindowAttributes::default();
        assert_eq!(attributes.graphics_api, GraphicsApi::OpenGlEs2);
        assert_eq!((attributes.width, attributes.height), (720, 480));
    }

    #[test]
    fn builder_overrides() {
        let attributes = WindowAttributes::new("Game", 1280, 720).with_graphics_api(GraphicsApi::OpenGl);
        assert_eq!(attributes.title, "Game");
        assert_eq!(attributes.width, 1280);
        assert_eq!(attributes.graphics_api, GraphicsApi::OpenGl);

        let attributes = attributes.with_size(640, 360).with_title("Other");
        assert_eq!((attributes.width, attributes.height), (640, 360));
        assert_eq!(attributes.title, "Other");
    }
}
