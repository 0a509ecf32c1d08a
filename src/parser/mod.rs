//! JSON loaders for requests, coefficients and catalogs.

mod json;

pub use json::{
    parse_catalog_file, parse_request_file, parse_request_str, read_json_value,
};
