//! UI components for the greeting screen.

pub mod app;
pub mod footer;
pub mod hero;
pub mod letter;
pub mod memory;
pub mod particles;
pub mod top_bar;

pub use app::*;
pub use footer::*;
pub use hero::*;
pub use letter::*;
pub use memory::*;
pub use particles::*;
pub use top_bar::*;
