mod cli_mode;
mod path_mode;
mod tags_mode;
mod use_color;
mod view_mode;

pub use cli_mode::CliModeResult;
pub use path_mode::path_mode;
pub use tags_mode::tags_mode;
pub use use_color::use_color;
pub use view_mode::view_mode;
