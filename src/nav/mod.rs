pub mod history;
pub mod location;
pub mod params;

pub use history::History;
pub use location::Location;
pub use params::SearchParams;
