mod end_to_end;
mod list_files;
