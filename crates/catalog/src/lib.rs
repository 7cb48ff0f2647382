mod data;
mod record;

pub use data::{
    ammunition, artillery, countries, AMMUNITION_FIELDS, AMMUNITION_PAGE_SIZE, ARTILLERY_FIELDS,
    ARTILLERY_PAGE_SIZE, COUNTRY_FIELDS, COUNTRY_PAGE_SIZE,
};
pub use record::{Ammunition, Artillery, Country, FieldValue, Searchable};
