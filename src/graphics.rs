use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::surface::Surface;

#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Relative image paths are looked up here. Empty means the working directory.
    pub resource_folder: PathBuf,
}

/// Handle to the graphics subsystem. Elements are built against it instead
/// of some process-wide "is it initialized" flag.
#[derive(Debug, Clone)]
pub struct Graphics {
    settings: Settings,
    initialized: bool,
}

impl Graphics {
    /// A handle that still needs `init_in_place` before it can load anything.
    pub fn new(settings: Settings) -> Self {
        Graphics {
            settings,
            initialized: false,
        }
    }

    pub fn init(settings: Settings) -> Self {
        let mut graphics = Graphics::new(settings);
        graphics.init_in_place();
        graphics
    }

    pub fn init_in_place(&mut self) {
        if !self.initialized {
            debug!(
                "graphics initialized, resource folder {:?}",
                self.settings.resource_folder
            );
        }
        self.initialized = true;
    }

    pub fn quit(&mut self) {
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn path_of<T: AsRef<Path>>(&self, resource: T) -> PathBuf {
        let mut path = self.settings.resource_folder.clone();
        path.push(resource);
        path
    }

    /// Loads and decodes an image file into an RGBA surface ready for
    /// alpha blitting.
    pub fn load_image<T: AsRef<Path>>(&self, file: T) -> Result<Surface> {
        if !self.initialized {
            return Err(Error::UninitializedSubsystem {
                type_name: "Surface",
            });
        }
        let file = file.as_ref();
        if file.as_os_str().is_empty() {
            return Err(Error::InvalidArgument("empty image path".into()));
        }

        let path = self.path_of(file);
        let img = image::open(&path).map_err(|source| Error::ResourceLoadFailure {
            path: path.display().to_string(),
            source,
        })?;

        let surface = Surface::from_image(img.to_rgba8());
        debug!(
            "loaded {} ({}x{})",
            path.display(),
            surface.width(),
            surface.height()
        );
        Ok(surface)
    }
}
