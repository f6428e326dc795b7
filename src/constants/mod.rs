use std::env;
use std::sync::LazyLock;

macro_rules! lazy_env_var {
    ($name:ident) => {
        pub static $name: LazyLock<String> = LazyLock::new(|| {
            let var_name = stringify!($name);
            env::var(var_name).expect(&format!("{} must be set", var_name))
        });
    };
}

lazy_env_var!(MONGODB_URI);
lazy_env_var!(DB_NAME);
lazy_env_var!(JWT_SECRET_KEY);
lazy_env_var!(COOKIE_NAME);
lazy_env_var!(ALLOWED_ORIGIN);

pub static PORT: LazyLock<u16> = LazyLock::new(|| {
    env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid port number")
});

pub const USERS_COL_NAME: &str = "users";
pub const ORGANIZATIONS_COL_NAME: &str = "organizations";
pub const WORKDAYS_COL_NAME: &str = "workdays";
pub const SALES_COL_NAME: &str = "sales";

pub const ORG_CODE_LENGTH: usize = 6;
pub const ORG_CODE_MAX_ATTEMPTS: usize = 5;

pub const MAX_TIMESLOT_CAPACITY: u32 = 10;

// Defaults used by bulk schedule generation.
pub const GENERATED_DAYS: u64 = 7;
pub const GENERATED_SLOT_START_HOURS: [u32; 5] = [10, 12, 14, 16, 18];
pub const GENERATED_SLOT_DURATION_HOURS: u32 = 2;
pub const GENERATED_SLOT_CAPACITY: u32 = 2;

pub const JWT_EXPIRY_HOURS: i64 = 24;
