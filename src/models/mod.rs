pub mod lesson;
pub mod slots;
pub mod week;

pub use lesson::*;
pub use slots::*;
pub use week::*;
