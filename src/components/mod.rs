mod gallery;
mod lupe;
mod query;

pub use lupe::{Lupe, Props as LupeProps};
