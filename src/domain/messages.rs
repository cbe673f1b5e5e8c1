//! User-visible prompt and log text.

pub const CHOOSE_FILES: &str = "Choose the files you want to use:";
pub const CONFIG_FILE_NOT_FOUND: &str = "Could not find the configuration file named:";
pub const CONFIRM_EXISTING_CONFIG: &str = "Do you want to use the existing config?:";
pub const CURRENT_CONFIG: &str = "Current configuration:";
pub const DIRECTORY_NOT_FOUND: &str = "Could not find the directory named:";
pub const INPUT_ORIGIN: &str = "Enter a remote origin (https:// or git@) or a local path where the OpenAPI Specification files are located:";
pub const SELECT_AT_LEAST_ONE: &str = "Select at least one schema.";
pub const USING_PROVIDED_CONFIG: &str = "Using provided configuration:";

pub fn confirm_add_to_gitignore(entry: &str) -> String {
    format!("Add {entry} to .gitignore?:")
}

pub fn config_file_invalid(file_name: &str) -> String {
    format!("The configuration file {file_name} is not valid JSON.")
}

pub fn input_port(schema_path: &str) -> String {
    format!("Enter a port number for {schema_path}:")
}

pub fn saved_config(file_name: &str) -> String {
    format!("Configuration saved in {file_name}:")
}
