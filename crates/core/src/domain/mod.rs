pub mod observation;
pub mod profile;
