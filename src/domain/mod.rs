// Domain layer: the in-memory shape of parsed documents.

pub mod model;

pub use model::ConfigTree;
