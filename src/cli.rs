use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sbx")]
#[command(author, version, about = "Stashbox CLI - upload files, manage remote directories, inspect your account")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Account token for this invocation (overrides the stored one)
    #[arg(long, global = true, env = "SBX_TOKEN")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store the account token in the config file
    SetToken {
        /// Token issued for your account
        token: String,
    },

    /// Browse all operations through an interactive menu
    Interactive,

    /// Upload a file anonymously
    UploadAnon {
        /// Local file to upload
        file: PathBuf,
        /// Destination name (defaults to the file's base name)
        name: Option<String>,
    },

    /// Upload a file into one of your directories
    UploadAuth {
        /// Local file to upload
        file: PathBuf,
        /// Directory id to upload into
        parent_id: String,
        /// Destination name (defaults to the file's base name)
        name: Option<String>,
    },

    /// Upload a file to a specific storage location
    UploadLoc {
        /// Local file to upload
        file: PathBuf,
        /// Storage location id
        location_id: String,
        /// Destination name (defaults to the file's base name)
        name: Option<String>,
    },

    /// Upload a file with an attached note
    UploadNote {
        /// Local file to upload
        file: PathBuf,
        /// Note text to attach (sent base64-encoded)
        note: String,
        /// Destination name (defaults to the file's base name)
        name: Option<String>,
    },

    /// Upload many files into one directory, one request per file
    BulkUpload {
        /// Directory id to upload into
        parent_id: String,
        /// Local files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List the available storage locations
    Locations,

    /// Show account details
    Account,

    /// Show the root directory listing
    GetRoot,

    /// Show a directory listing by id
    GetDir {
        /// Directory id
        id: String,
    },

    /// Create a directory
    CreateDir {
        /// Name for the new directory
        name: String,
        /// Parent directory id
        parent_id: String,
    },

    /// Rename a directory
    RenameDir {
        /// Directory id
        id: String,
        /// New name
        name: String,
    },

    /// Move a directory under a new parent
    MoveDir {
        /// Directory id
        id: String,
        /// New parent directory id
        parent_id: String,
    },

    /// Rename a file
    RenameFile {
        /// File id
        id: String,
        /// New name
        name: String,
    },

    /// Move a file into another directory
    MoveFile {
        /// File id
        id: String,
        /// New parent directory id
        parent_id: String,
    },

    /// Attach a note to a file
    AddNoteFile {
        /// File id
        id: String,
        /// Note text
        note: String,
    },

    /// Delete a directory
    DeleteDir {
        /// Directory id
        id: String,
    },

    /// Delete many directories, one request per id
    BulkDelete {
        /// Directory ids to delete, in order
        #[arg(required = true)]
        ids: Vec<String>,
    },
}
