mod platform;
pub use platform::Platform;

mod arch;
pub use arch::Arch;

mod stage;
pub use stage::Stage;
