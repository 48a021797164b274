// Integration tests for reaindex

mod integration {
    mod cli_test;
    mod discovery_test;
    mod end_to_end_test;
}
