//! Version command implementation

use crate::config::MANIFEST_FILE;
use crate::error::Result;
use crate::logging::LOG_ENV;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", report());
    Ok(())
}

/// Version line followed by build and lookup details
fn report() -> String {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    format!(
        "{name} {version}\n\n\
         Build info:\n  \
         Minimum rustc: {msrv}\n  \
         Profile: {profile}\n\n\
         Defaults:\n  \
         Manifest: ./{MANIFEST_FILE} (override with --manifest or NOTEMARK_MANIFEST)\n  \
         Log filter: {LOG_ENV}\n",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        msrv = env!("CARGO_PKG_RUST_VERSION"),
    )
}
