pub mod collapse;
pub mod selection;
