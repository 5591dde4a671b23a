mod format;
mod manifest;
mod naming;

pub use format::save_sprite_image;
pub use manifest::{MANIFEST_FILE_NAME, write_manifest};
pub use naming::{is_sprite_file_name, remove_previous_sprites, sprite_file_name};
