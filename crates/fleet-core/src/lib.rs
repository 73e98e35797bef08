pub mod assembler;
pub mod codebuild;
pub mod config;
pub mod context;
pub mod error;
pub mod map;
pub mod userdata;

pub mod prelude {
    pub use crate::assembler::FleetAssembler;
    pub use crate::config::{DeployConfig, EnvConfig, RunnerConfig};
    pub use crate::context::DeployContext;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::userdata::{DirTemplateSource, MemoryTemplateSource, TemplateSource};
}
