pub mod errors;
pub mod grouping;
pub mod models;
pub mod session;
pub mod tasks;


pub use errors::WordlensError;
pub use models::{
    Definition,
    Entry,
    Meaning,
    Pronunciation,
};
