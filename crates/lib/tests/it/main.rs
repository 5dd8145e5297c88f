/*! Integration tests for Crosspost.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * Every test talks to an in-process fake of the cross-posting service
 * (see `helpers`) over real HTTP:
 * - api: Tests for HttpApi against each service resource
 * - session: Tests for the synchronization operations and the session store
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("crosspost=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}
