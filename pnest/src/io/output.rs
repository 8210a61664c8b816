use serde::{Deserialize, Serialize};

use crate::config::NestConfig;
use panel_nest::io::ext_repr::{ExtInstance, ExtSolution};

/// Everything written to the JSON solution file
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NestOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: NestConfig,
}
