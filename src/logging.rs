use tracing::Level;

/// Routes `tracing` output (seed announcements included) into the test harness's
/// captured output. Safe to call from every test; only the first call installs.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
        tracing::debug!("tracing initialised twice without panicking");
    }
}
