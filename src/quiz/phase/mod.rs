mod question;
mod results;
mod startup;

pub use self::question::*;
pub use self::results::*;
pub use self::startup::*;
