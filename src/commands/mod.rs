pub mod deadline;
pub mod form;
pub mod generate;
pub mod interactive;
pub mod validate;
