pub mod server_handlers;

pub use server_handlers::{
    delete_server_by_id, get_all_server_data, get_server_by_id, input_server_data,
    method_not_allowed, missing_server_id, update_server_by_id,
};
