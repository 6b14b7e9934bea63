pub mod import_files;
