mod commit_records_nested_files;
