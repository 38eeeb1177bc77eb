mod entries;
mod ordered;
mod outcome;
mod summary;
mod volume;

#[cfg(test)]
mod tests;

pub use entries::*;
pub use ordered::OrderedMap;
pub use outcome::*;
pub use summary::*;
pub use volume::*;
