#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    create_directories, decode_image_and_save, encode_image_to_base64, file_size_kb,
    get_file_size_label, load_binary_object, load_structured_data, read_structured_config,
    read_structured_config_with_env, read_toml_config, save_binary_object, save_structured_data,
};
pub use domain::model::ConfigTree;
pub use utils::error::{ErrorCategory, FileError, Result};
