//! Wire-facing constants for the upload classification flow.
//!
//! The note strings are part of the observable contract with the frontend and
//! must match the original demo verbatim.

pub const NOTE_CONNECTION_FAILED: &str = "Using mock data because the API connection failed";
pub const NOTE_REMOTE_ERROR: &str = "Using mock data because the API returned an error";
pub const NOTE_NON_JSON: &str = "Using mock data because the API returned a non-JSON response";
