//! `[Run]` section resolution: program path, argument template, and `ArgN` defaults.
mod resolver;
mod template;

pub use resolver::{
    arg_default_key, resolve_args, resolve_command, resolve_file_name, ResolvedCommand,
    ARGS_KEY, FILE_NAME_KEY,
};
pub use template::ArgsTemplate;
