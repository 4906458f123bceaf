pub mod convert;
pub mod palette_report;

pub use convert::{
    convert_to_gif, convert_to_png, default_output_path, read_image_file, write_image_file,
};
pub use palette_report::{PaletteReport, ReportEntry};
