pub mod assets;
pub mod builder;
pub mod writer;

pub use builder::build_site;
