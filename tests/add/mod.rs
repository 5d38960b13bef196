mod add_files_from_nested_directories;
mod adding_a_non_existent_file_fails;
