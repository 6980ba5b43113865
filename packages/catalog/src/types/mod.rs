pub mod config;
pub mod facet;
pub mod item;
pub mod page;
pub mod selection;
