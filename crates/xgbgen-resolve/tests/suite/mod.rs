mod common;
mod engine_tests;
mod fs_import_tests;
mod pipeline_tests;
