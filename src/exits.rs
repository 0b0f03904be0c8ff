//! Exit handling: signal handlers and terminal restore.
//!
//! Generation is held entirely in memory until the final write, so an
//! interrupt before then leaves no output file behind.

/// Signal handler for SIGINT/SIGTERM/SIGHUP - restore the cursor and exit 0.
extern "C" fn signal_handler(_: libc::c_int) {
    const SHOW_CURSOR: &[u8] = b"\x1b[0m\x1b[?25h";
    const MESSAGE: &[u8] = b"\n[!] Interrupted by user\n";
    unsafe {
        // Only write escape codes if stdout is a TTY (not when piping)
        if libc::isatty(1) == 1 {
            libc::write(1, SHOW_CURSOR.as_ptr() as *const libc::c_void, SHOW_CURSOR.len());
        }
        libc::write(2, MESSAGE.as_ptr() as *const libc::c_void, MESSAGE.len());
        libc::_exit(0)
    }
}

/// Install interrupt handlers. Call this early in main().
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated credentials out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}
