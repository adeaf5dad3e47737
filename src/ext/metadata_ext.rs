use std::fs::Metadata;
use std::io;
use std::time::{Duration, SystemTime};

/// Timestamp accessors for notes that tolerate filesystems without birth time.
pub trait NoteTimestampExt {
    /// Birth time of the file, or its status change time where the platform
    /// does not record birth time.
    ///
    /// Where birth time exists, rewriting a file does not move it forward;
    /// the status change time (`ctime`) would.
    fn creation_time(&self) -> io::Result<SystemTime>;
}

impl NoteTimestampExt for Metadata {
    fn creation_time(&self) -> io::Result<SystemTime> {
        match self.created() {
            Ok(time) => Ok(time),
            Err(err) => status_change_time(self).ok_or(err),
        }
    }
}

#[cfg(unix)]
fn status_change_time(metadata: &Metadata) -> Option<SystemTime> {
    use std::os::unix::fs::MetadataExt;

    let nanos = u32::try_from(metadata.ctime_nsec()).ok()?;
    match u64::try_from(metadata.ctime()) {
        Ok(secs) => SystemTime::UNIX_EPOCH.checked_add(Duration::new(secs, nanos)),
        Err(_) => {
            let before_epoch = Duration::from_secs(metadata.ctime().unsigned_abs());
            SystemTime::UNIX_EPOCH
                .checked_sub(before_epoch)?
                .checked_add(Duration::from_nanos(nanos.into()))
        }
    }
}

#[cfg(not(unix))]
fn status_change_time(_metadata: &Metadata) -> Option<SystemTime> {
    None
}
