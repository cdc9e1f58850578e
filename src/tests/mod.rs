/*
The registry tests are organized into the same binary in this directory.

1) For speed (one binary to link)
2) For access to crate internals
3) So the process-global registry is initialized by exactly one test (global_registry_test)

See: https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 */

mod common;
mod registry_test;
mod concurrency_test;
