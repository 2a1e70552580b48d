pub mod agreement;
pub mod partner;
pub mod statistics;
