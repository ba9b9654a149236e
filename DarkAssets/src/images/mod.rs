//! Dark image variants
//!
//! - [`record`] parses `name[-dark][@2x|@3x][~iphone|~ipad].(png|jpg)` filenames
//! - [`imageset`] models compiled `.imageset/Contents.json` descriptors
//! - [`linker`] copies dark files into image sets and appends their entries

pub mod imageset;
pub mod linker;
pub mod record;

pub use imageset::{ImageEntry, ImageSetContents};
pub use linker::{
    ImageReport, LinkOptions, LinkOutcome, append_dark_entries, copy_into_image_set,
    image_set_path, link_dark_images, list_source_images,
};
pub use record::{Device, ImageFileRecord, ImageFormat, Scale};
