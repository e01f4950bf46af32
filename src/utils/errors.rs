use std::io;
use thiserror::Error;

use crate::assembly::AssemblyError;
use crate::resources::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("Physics error: {0}")]
    PhysicsError(String),
}
