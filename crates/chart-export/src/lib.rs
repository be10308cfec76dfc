mod options;
mod pdf;
mod pipeline;
mod print;
mod raster;
mod svg;
mod types;

pub use options::*;
pub use pdf::PdfAssembler;
pub use pipeline::*;
pub use print::build_print_document;
pub use raster::{PageRenderer, ResvgRenderer, raster_size};
pub use svg::build_page_svg;
pub use types::*;
