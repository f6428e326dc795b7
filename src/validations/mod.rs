pub mod email;
pub mod name;
pub mod password;
pub mod sale;
pub mod timeslot;
