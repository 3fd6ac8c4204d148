use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, register_counter, register_gauge};

lazy_static! {
    pub static ref SEND_TOTAL: Counter = register_counter!(
        "station_send_requests_total",
        "Total POST /api/send requests"
    )
    .unwrap();
    pub static ref LOCKOUTS_TOTAL: Counter =
        register_counter!("station_lockouts_total", "Lockouts triggered").unwrap();
    pub static ref PRIVILEGED_SENDS: Counter = register_counter!(
        "station_privileged_sends_total",
        "Sends carrying the operator flag"
    )
    .unwrap();
    pub static ref VISIONS_REVEALED: Counter = register_counter!(
        "station_visions_revealed_total",
        "Successful vision disclosures"
    )
    .unwrap();
    pub static ref TRACKED_CLIENTS: Gauge = register_gauge!(
        "station_tracked_clients",
        "Distinct client ids in the attempt tracker"
    )
    .unwrap();
}
