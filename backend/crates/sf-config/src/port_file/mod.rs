pub(crate) mod port_file_info;

/// Whether a process with `pid` exists.
///
/// Unix uses `kill(pid, 0)`, which checks existence without signalling.
#[cfg(unix)]
pub(crate) fn is_process_running(pid: u32) -> bool {
    let Ok(pid) = libc::pid_t::try_from(pid) else {
        return false;
    };
    // SAFETY: signal 0 performs only the existence/permission check.
    unsafe { libc::kill(pid, 0) == 0 }
}

/// Elsewhere assume alive; a dead server surfaces as a connection error.
#[cfg(not(unix))]
pub(crate) fn is_process_running(_pid: u32) -> bool {
    true
}
