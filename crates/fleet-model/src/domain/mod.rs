mod tags;
pub use tags::Tags;

mod environment;
pub use environment::Environment;

mod constants;
pub use constants::{
    DEFAULT_KEY_PAIR, DEFAULT_ROOT_VOLUME_GIB, SCALE_DOWN_DELAY_SECS, TAG_PVRE_REPORTING,
    TAG_PVRE_REPORTING_VALUE,
};
