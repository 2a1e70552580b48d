pub mod facets;
pub mod lookup;
pub mod partners;
pub mod session;
pub mod stats;
