pub mod binary;
pub mod directories;
pub mod documents;
pub mod media;
pub mod size;

pub use crate::domain::model::ConfigTree;
pub use crate::utils::error::Result;
pub use binary::{load_binary_object, save_binary_object};
pub use directories::create_directories;
pub use documents::{
    load_structured_data, read_structured_config, read_structured_config_with_env,
    read_toml_config, save_structured_data, substitute_env_vars,
};
pub use media::{decode_image_and_save, encode_image_to_base64};
pub use size::{file_size_kb, get_file_size_label};
