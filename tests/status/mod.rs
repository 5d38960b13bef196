mod print_clean_status;
mod report_modified_and_deleted_files;
