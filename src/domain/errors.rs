use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ReqscanError {
    #[error("not a valid project folder: {}", .0.display())]
    InvalidProjectPath(PathBuf),
    #[error("no project folder given")]
    EmptyProjectPath,
    #[error("could not list installed packages: {0}")]
    EnvironmentQuery(String),
    #[error("malformed mapping file {}: {reason}", .path.display())]
    MalformedMapping { path: PathBuf, reason: String },
}
