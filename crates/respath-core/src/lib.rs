pub mod config;
pub mod dates;
pub mod error;
pub mod logging;
pub mod resolver;
pub mod url_model;

pub use config::ResolverConfig;
pub use error::ResolverError;
pub use resolver::{
    HostKind, PathShape, Resolution, ResolutionWarning, ResourcePathResolver, Resolver, Storage,
    Variant,
};
