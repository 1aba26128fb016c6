mod yaml;

pub use yaml::yaml_to_liquid;
