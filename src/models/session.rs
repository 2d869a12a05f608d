//! Per-browser state carried in the session cookie.

use serde::{Deserialize, Serialize};

use crate::controller::ControllerSnapshot;
use crate::shell::FilterPanel;

/// Session key the board state is stored under.
pub const BOARD_SESSION_KEY: &str = "board";

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardSession {
    pub controller: ControllerSnapshot,
    pub panel: FilterPanel,
}
