mod admin;
mod receive;
mod send;

pub use admin::{
    execute_mark_delivered, execute_mark_in_flight, execute_mark_stuck, execute_pause,
    execute_set_enforced_options, execute_set_fee, execute_set_peer, execute_unpause,
    execute_update_admin,
};
pub use receive::{execute_lz_receive, COMPOSE_REPLY_ID};
pub use send::execute_send;
