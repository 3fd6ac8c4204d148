use crate::tracker::AttemptTracker;
use std::path::PathBuf;

// app's shared state
pub struct AppState {
    pub tracker: AttemptTracker,
    pub flag: String,          // secret served by the visions endpoint
    pub static_dir: PathBuf,   // where index.html / client.js live
}
