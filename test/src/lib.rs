
pub use helpers::*;
pub use mock_animator::{AnimatorCall, MockAnimator};
