//! Structured decomposition of recognized values.
//!
//! - [`split_phone`]: phone number -> (calling-code country, national number)
//! - [`split_company`]: company name -> (base name, legal suffix)
//!
//! Neither decomposer fails. Fields that cannot be determined come back as `None`.

pub mod company;
pub mod phone;

pub use company::split_company;
pub use phone::{calling_code_country, split_phone, CALLING_CODES, NATIONAL_NUMBER_LEN};
