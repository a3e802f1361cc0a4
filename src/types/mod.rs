mod angle;
mod distance;
mod point;
#[cfg(feature = "serde")]
mod serde_impls;
mod speed;

pub use angle::*;
pub use distance::*;
pub use point::*;
pub use speed::*;
