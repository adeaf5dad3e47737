mod metadata_ext;

pub use metadata_ext::NoteTimestampExt;
