pub mod aadhar;
pub mod cleaner;
pub mod dob;
pub mod name;
pub mod script;

pub use aadhar::extract_aadhar_number;
pub use cleaner::clean_name;
pub use dob::extract_dob;
pub use name::extract_name;
