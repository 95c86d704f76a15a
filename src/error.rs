use derive_more::{Display, Error};

/// Everything that can go wrong while building an element.
#[derive(Debug, Display, Error)]
pub enum Error {
    #[display(
        fmt = "graphics must be initialized before creating a {} object, call Graphics::init first",
        type_name
    )]
    UninitializedSubsystem { type_name: &'static str },

    #[display(fmt = "invalid image source: {}", _0)]
    InvalidArgument(#[error(not(source))] String),

    #[display(fmt = "could not load {}: {}", path, source)]
    ResourceLoadFailure {
        path: String,
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
