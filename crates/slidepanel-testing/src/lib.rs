//! Testing utilities and harness for the sliding panel container

mod clock;
mod logging;
pub mod rule;
mod surface;

pub use clock::ManualClock;
pub use logging::init_test_logging;
pub use rule::PanelTestRule;
pub use surface::RecordingSurface;

pub mod prelude {
    pub use crate::clock::ManualClock;
    pub use crate::init_test_logging;
    pub use crate::rule::{PanelTestRule, FRAME_MILLIS};
    pub use crate::surface::RecordingSurface;
}
