pub(crate) mod helper_constants;
pub(crate) mod helper_types;
pub mod enums;
pub mod errors;
pub mod formatter;
pub mod parser;
pub mod phonenumber;

pub use enums::PhoneNumberFormat;
pub use helper_types::PhoneNumberRecord;
