mod allclose;
pub use allclose::all_close;

mod linspace;
pub use linspace::linspace;
