pub mod classify_upload;
