//! Native SEUIF97 backend: construction error paths.
//!
//! Property evaluation through the native library needs a SEUIF97
//! installation and is exercised by the same engine/test suite through
//! the `CorrelationBackend` trait, so only discovery failures are
//! covered here.

use std::path::Path;

use if97_water::{If97Error, NativeBackend};

#[test]
fn missing_directory_is_reported() {
    let err = NativeBackend::from_dir(Path::new("/definitely/not/seuif97")).unwrap_err();
    match err {
        If97Error::LibraryNotFound(msg) => {
            assert!(msg.contains("does not exist"), "unexpected message: {msg}");
        }
        other => panic!("expected LibraryNotFound, got {other:?}"),
    }
}

#[test]
fn directory_without_the_library_is_reported() {
    // The temp dir exists but carries no SEUIF97 shared library.
    let err = NativeBackend::from_dir(&std::env::temp_dir()).unwrap_err();
    assert!(matches!(err, If97Error::LibraryNotFound(_)));
}
