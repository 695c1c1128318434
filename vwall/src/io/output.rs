use serde::{Deserialize, Serialize};
use vitreye::io::ext_repr::{ExtItem, ExtLayout};

use crate::config::WallConfig;

/// Everything needed to reproduce and inspect a wall
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WallOutput {
    pub items: Vec<ExtItem>,
    pub layout: ExtLayout,
    pub scroll_offset: i32,
    pub config: WallConfig,
}
