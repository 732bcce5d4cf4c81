mod button;

pub use button::{LinkBase, TextButton};
