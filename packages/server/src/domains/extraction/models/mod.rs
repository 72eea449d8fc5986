pub mod building_record;

pub use building_record::*;
