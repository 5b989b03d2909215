pub use create_user::*;
pub use withdraw::*;

mod create_user;
mod withdraw;
