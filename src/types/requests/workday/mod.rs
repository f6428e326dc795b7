pub mod assign_request;
pub mod create_workday_request;
pub mod timeslot_input;
pub mod update_workday_request;
pub mod workday_query;
