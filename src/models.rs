use serde::{Deserialize, Serialize};

// /api/send success body
#[derive(Deserialize, Serialize, Clone)]
pub struct SendAccepted {
    pub status: String,
    pub privileged: bool,
}

// /api/send lockout body (both the cooldown and fresh-lock cases)
#[derive(Deserialize, Serialize, Clone)]
pub struct SendLocked {
    pub status: String,
    pub message: String,
    pub retry_after: u64,
}

// /visions/eleven-only success body
#[derive(Deserialize, Serialize, Clone)]
pub struct Vision {
    pub vision: String,
}

// /visions/eleven-only denial body
#[derive(Deserialize, Serialize, Clone)]
pub struct AccessDenied {
    pub error: String,
}
